#![deny(clippy::all, clippy::pedantic)]

use catalog_admin::application::dashboard::Dashboard;
use catalog_admin::application::notify::Notification;
use time::OffsetDateTime;
use tracing::error;

use crate::client::{CliError, Ctx};
use crate::print::print_json;

pub async fn handle(ctx: &Ctx) -> Result<(), CliError> {
    ctx.require_session()?;
    match Dashboard::collect(&ctx.api, OffsetDateTime::now_utc()).await {
        Ok(dashboard) => print_json(&dashboard),
        Err(err) => {
            error!(error = %err, "failed to collect dashboard");
            ctx.notifier
                .notify(Notification::error("Failed to load dashboard data"));
            Err(err.into())
        }
    }
}
