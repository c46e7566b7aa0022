#![deny(clippy::all, clippy::pedantic)]

use catalog_admin::application::notify::Notification;
use catalog_admin::application::session::AuthState;
use serde_json::json;

use crate::args::LoginArgs;
use crate::client::{CliError, Ctx};
use crate::io::read_password;
use crate::print::print_json;

pub fn login(ctx: &Ctx, args: LoginArgs) -> Result<(), CliError> {
    let password = read_password(args.password_file, args.password_env)?;
    if let Err(err) = ctx.guard.login(&args.username, &password) {
        ctx.notifier.notify(Notification::error(err.to_string()));
        return Err(err.into());
    }
    ctx.notifier
        .notify(Notification::success(format!("Logged in as {}", args.username)));
    Ok(())
}

pub fn logout(ctx: &Ctx) -> Result<(), CliError> {
    ctx.guard.logout()?;
    ctx.notifier.notify(Notification::success("Logged out"));
    Ok(())
}

pub fn status(ctx: &Ctx) -> Result<(), CliError> {
    let value = match ctx.guard.state() {
        AuthState::Authenticated { username } => json!({
            "authenticated": true,
            "username": username,
            "api": ctx.api.base().as_str(),
        }),
        AuthState::Unauthenticated => json!({
            "authenticated": false,
            "api": ctx.api.base().as_str(),
        }),
    };
    print_json(&value)
}
