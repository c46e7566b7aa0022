//! catalog-admin: back-office command-line client for the catalog REST API.
#![deny(clippy::all, clippy::pedantic)]

mod args;
mod client;
mod console;
mod handlers;
mod io;
mod print;

#[cfg(test)]
mod tests;

use catalog_admin::{config, infra::telemetry};
use clap::Parser;

use args::{Cli, Commands};
use client::{CliError, build_ctx};
use handlers::{auth, company, contacts, dashboard, news, products};

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let settings = config::load(&cli.overrides)?;
    telemetry::init(&settings.logging)?;
    let ctx = build_ctx(&settings)?;

    match cli.command {
        Commands::Login(args) => auth::login(&ctx, args)?,
        Commands::Logout => auth::logout(&ctx)?,
        Commands::Status => auth::status(&ctx)?,
        Commands::Products(cmd) => products::handle(&ctx, cmd.action).await?,
        Commands::News(cmd) => news::handle(&ctx, cmd.action).await?,
        Commands::Contacts(cmd) => contacts::handle(&ctx, cmd.action).await?,
        Commands::Company(cmd) => company::handle(&ctx, cmd.action).await?,
        Commands::Dashboard => dashboard::handle(&ctx).await?,
    }

    Ok(())
}
