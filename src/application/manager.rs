//! Generic list + dialog controller shared by every collection resource.
//!
//! A manager owns the records fetched for one view, the list query, and the
//! dialog currently open over the list. Mutations go through the API client
//! and report their outcome through the notifier; on failure the previous
//! state is left exactly as it was.

use std::sync::Arc;

use catalog_admin_types::{Language, RecordId};
use reqwest::Method;
use tracing::{debug, error, info, warn};

use crate::domain::error::DomainError;
use crate::domain::search::{self, CategoryFilter, ListQuery};
use crate::infra::http::ApiClient;

use super::error::AppError;
use super::notify::{Notification, Notifier};
use super::resource::{Resource, WritableResource};

/// Explicit user confirmation before a destructive request.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormDialog<F> {
    /// `None` while creating, the edited record's id otherwise.
    pub target: Option<RecordId>,
    pub form: F,
    submitting: bool,
}

impl<F> FormDialog<F> {
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Dialog<F, T> {
    Closed,
    Edit(FormDialog<F>),
    View(T),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Cancelled,
}

pub struct ResourceManager<R: Resource> {
    api: Arc<ApiClient>,
    notifier: Arc<dyn Notifier>,
    records: Vec<R::Record>,
    loading: bool,
    query: ListQuery,
    dialog: Dialog<R::Form, R::Record>,
}

impl<R: Resource> ResourceManager<R> {
    pub fn new(api: Arc<ApiClient>, notifier: Arc<dyn Notifier>, language: Language) -> Self {
        Self {
            api,
            notifier,
            records: Vec::new(),
            loading: false,
            query: ListQuery {
                language,
                ..ListQuery::default()
            },
            dialog: Dialog::Closed,
        }
    }

    /// Replaces the local list with the server's collection.
    pub async fn load(&mut self) -> Result<(), AppError> {
        self.loading = true;
        let result = self.api.get_json::<Vec<R::Record>>(R::ENDPOINT).await;
        self.loading = false;

        match result {
            Ok(records) => {
                debug!(resource = R::LABEL, count = records.len(), "list loaded");
                self.records = records;
                Ok(())
            }
            Err(err) => {
                error!(resource = R::LABEL, error = %err, "failed to load list");
                self.notifier.notify(Notification::error(format!(
                    "Failed to load {} list",
                    R::LABEL
                )));
                Err(err.into())
            }
        }
    }

    pub fn records(&self) -> &[R::Record] {
        &self.records
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    pub fn dialog(&self) -> &Dialog<R::Form, R::Record> {
        &self.dialog
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.query.term = term.into();
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.query.category = category;
    }

    /// Switches the display language. Data is not re-fetched.
    pub fn set_language(&mut self, language: Language) {
        self.query.language = language;
    }

    pub fn filtered(&self) -> Vec<&R::Record> {
        search::filter(&self.records, &self.query)
    }

    pub fn categories(&self) -> Vec<String> {
        search::categories(&self.records, self.query.language)
    }

    pub fn find(&self, id: RecordId) -> Option<&R::Record> {
        self.records.iter().find(|r| R::id(r) == id)
    }

    /// Opens the read-only detail view of an already loaded record.
    pub fn view(&mut self, id: RecordId) -> Result<&R::Record, AppError> {
        let record = self
            .find(id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(R::LABEL, id))?;
        self.dialog = Dialog::View(record);
        let Dialog::View(record) = &self.dialog else {
            return Err(DomainError::not_found(R::LABEL, id).into());
        };
        Ok(record)
    }

    pub fn close_dialog(&mut self) {
        self.dialog = Dialog::Closed;
    }

    /// Deletes after confirmation and splices the record out locally.
    pub async fn delete(
        &mut self,
        id: RecordId,
        confirm: &dyn Confirm,
    ) -> Result<DeleteOutcome, AppError> {
        if !confirm.confirm(&format!("Delete {} #{id}?", R::LABEL)) {
            debug!(resource = R::LABEL, %id, "delete cancelled");
            return Ok(DeleteOutcome::Cancelled);
        }

        match self.api.delete(&R::item_path(id)).await {
            Ok(()) => {
                self.records.retain(|r| R::id(r) != id);
                info!(resource = R::LABEL, %id, "record deleted");
                self.notifier.notify(Notification::success(format!(
                    "{} deleted successfully",
                    capitalized(R::LABEL)
                )));
                Ok(DeleteOutcome::Deleted)
            }
            Err(err) => {
                error!(resource = R::LABEL, %id, error = %err, "failed to delete record");
                self.notifier
                    .notify(Notification::error(format!("Failed to delete {}", R::LABEL)));
                Err(err.into())
            }
        }
    }
}

impl<R: WritableResource> ResourceManager<R> {
    /// Opens an empty create form.
    pub fn open_create(&mut self) -> Result<&mut R::Form, AppError> {
        self.open_form(None, R::blank_form())
    }

    /// Opens an edit form prefilled from a loaded record.
    pub fn open_edit(&mut self, id: RecordId) -> Result<&mut R::Form, AppError> {
        let record = self
            .find(id)
            .ok_or_else(|| DomainError::not_found(R::LABEL, id))?;
        let form = R::prefill(record);
        self.open_form(Some(id), form)
    }

    fn open_form(
        &mut self,
        target: Option<RecordId>,
        form: R::Form,
    ) -> Result<&mut R::Form, AppError> {
        self.dialog = Dialog::Edit(FormDialog {
            target,
            form,
            submitting: false,
        });
        self.form_mut().ok_or(AppError::NoOpenForm)
    }

    pub fn form_mut(&mut self) -> Option<&mut R::Form> {
        match &mut self.dialog {
            Dialog::Edit(dialog) => Some(&mut dialog.form),
            _ => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(&self.dialog, Dialog::Edit(dialog) if dialog.submitting)
    }

    /// Validates and submits the open form.
    ///
    /// Creates POST to the collection, edits PUT the whole record to its item
    /// path. On success the dialog closes and the list is re-fetched to pick
    /// up server-computed fields. On failure the dialog stays open with the
    /// entered data.
    pub async fn submit(&mut self) -> Result<(), AppError> {
        let Dialog::Edit(dialog) = &mut self.dialog else {
            return Err(AppError::NoOpenForm);
        };
        if dialog.submitting {
            return Err(AppError::Busy);
        }

        let payload = match R::validate(&dialog.form) {
            Ok(payload) => payload,
            Err(err) => {
                warn!(resource = R::LABEL, error = %err, "form rejected locally");
                self.notifier.notify(Notification::error(err.to_string()));
                return Err(err.into());
            }
        };

        let target = dialog.target;
        let result = {
            let _in_flight = InFlight::start(&mut dialog.submitting);
            match target {
                None => {
                    self.api
                        .send_form(Method::POST, R::ENDPOINT, &payload, R::ENCODING)
                        .await
                }
                Some(id) => {
                    self.api
                        .send_form(Method::PUT, &R::item_path(id), &payload, R::ENCODING)
                        .await
                }
            }
        };

        let verb = if target.is_some() { "updated" } else { "created" };
        match result {
            Ok(()) => {
                info!(resource = R::LABEL, ?target, "record {verb}");
                self.notifier.notify(Notification::success(format!(
                    "{} {verb} successfully",
                    capitalized(R::LABEL)
                )));
                self.close_dialog();
                if let Err(err) = self.load().await {
                    debug!(resource = R::LABEL, error = %err, "refresh after save failed");
                }
                Ok(())
            }
            Err(err) => {
                error!(resource = R::LABEL, ?target, error = %err, "failed to save record");
                self.notifier
                    .notify(Notification::error(format!("Failed to save {}", R::LABEL)));
                Err(err.into())
            }
        }
    }
}

/// Raises a busy flag and lowers it again when dropped, including when the
/// request future is cancelled mid-flight.
pub(super) struct InFlight<'a>(&'a mut bool);

impl<'a> InFlight<'a> {
    pub(super) fn start(flag: &'a mut bool) -> Self {
        *flag = true;
        Self(flag)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

fn capitalized(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
