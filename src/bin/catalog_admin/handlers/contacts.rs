#![deny(clippy::all, clippy::pedantic)]

use catalog_admin::application::manager::DeleteOutcome;
use catalog_admin::application::resource::Contacts;
use catalog_admin_types::{ContactSubmission, Language, RecordId, format_timestamp};
use serde::Serialize;

use crate::args::ContactsCmd;
use crate::client::{CliError, Ctx};
use crate::console::PromptConfirm;
use crate::print::print_json;

pub async fn handle(ctx: &Ctx, cmd: ContactsCmd) -> Result<(), CliError> {
    ctx.require_session()?;
    match cmd {
        ContactsCmd::List { search } => list(ctx, search).await,
        ContactsCmd::View { id } => view(ctx, id).await,
        ContactsCmd::Delete { id, yes } => delete(ctx, id, yes).await,
    }
}

#[derive(Debug, Serialize)]
struct ContactRow<'a> {
    id: RecordId,
    name: &'a str,
    email: &'a str,
    phone: Option<&'a str>,
    company: Option<&'a str>,
    received: Option<String>,
}

impl<'a> ContactRow<'a> {
    fn new(contact: &'a ContactSubmission, lang: Language) -> Self {
        Self {
            id: contact.id,
            name: &contact.name,
            email: &contact.email,
            phone: contact.phone.as_deref(),
            company: contact.company.as_deref(),
            received: contact.created_at.map(|ts| format_timestamp(ts, lang)),
        }
    }
}

async fn list(ctx: &Ctx, search: Option<String>) -> Result<(), CliError> {
    let mut contacts = ctx.manager::<Contacts>();
    contacts.load().await?;
    if let Some(term) = search {
        contacts.set_search(term);
    }

    let lang = contacts.query().language;
    let rows: Vec<ContactRow<'_>> = contacts
        .filtered()
        .into_iter()
        .map(|c| ContactRow::new(c, lang))
        .collect();
    print_json(&rows)
}

async fn view(ctx: &Ctx, id: u64) -> Result<(), CliError> {
    let mut contacts = ctx.manager::<Contacts>();
    contacts.load().await?;
    let contact = contacts.view(RecordId(id))?;
    print_json(contact)
}

async fn delete(ctx: &Ctx, id: u64, yes: bool) -> Result<(), CliError> {
    let mut contacts = ctx.manager::<Contacts>();
    contacts.load().await?;
    if contacts.delete(RecordId(id), &PromptConfirm::new(yes)).await? == DeleteOutcome::Cancelled
    {
        eprintln!("Cancelled");
    }
    Ok(())
}
