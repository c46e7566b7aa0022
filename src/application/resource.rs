//! Per-entity descriptors plugged into the generic [`ResourceManager`].
//!
//! [`ResourceManager`]: super::manager::ResourceManager

use std::convert::Infallible;
use std::fmt::Debug;

use catalog_admin_types::{ContactSubmission, NewsItem, Product, RecordId};
use serde::de::DeserializeOwned;

use crate::domain::error::DomainError;
use crate::domain::forms::{NewsForm, ProductForm};
use crate::domain::payload::{FormPayload, PayloadEncoding};
use crate::domain::search::Searchable;

/// A REST collection of records.
pub trait Resource: Send + Sync + 'static {
    type Record: DeserializeOwned + Searchable + Clone + Debug + Send + Sync;
    /// Editable form state; [`Infallible`] for read-only collections.
    type Form: Clone + Debug + Send + Sync;

    /// Singular noun used in messages.
    const LABEL: &'static str;
    /// Collection path relative to the API base, with trailing slash.
    const ENDPOINT: &'static str;

    fn id(record: &Self::Record) -> RecordId;

    fn item_path(id: RecordId) -> String {
        format!("{}{id}/", Self::ENDPOINT)
    }
}

/// A collection that also accepts create and full-record update.
pub trait WritableResource: Resource {
    const ENCODING: PayloadEncoding;

    fn blank_form() -> Self::Form;

    fn prefill(record: &Self::Record) -> Self::Form;

    /// Local validation hook. Runs before any request is issued.
    fn validate(form: &Self::Form) -> Result<FormPayload, DomainError>;
}

#[derive(Debug, Clone, Copy)]
pub struct Products;

impl Resource for Products {
    type Record = Product;
    type Form = ProductForm;

    const LABEL: &'static str = "product";
    const ENDPOINT: &'static str = "products/";

    fn id(record: &Product) -> RecordId {
        record.id
    }
}

impl WritableResource for Products {
    const ENCODING: PayloadEncoding = PayloadEncoding::Multipart;

    fn blank_form() -> ProductForm {
        ProductForm::default()
    }

    fn prefill(record: &Product) -> ProductForm {
        ProductForm::from_record(record)
    }

    fn validate(form: &ProductForm) -> Result<FormPayload, DomainError> {
        form.to_payload()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct News;

impl Resource for News {
    type Record = NewsItem;
    type Form = NewsForm;

    const LABEL: &'static str = "news item";
    const ENDPOINT: &'static str = "news/";

    fn id(record: &NewsItem) -> RecordId {
        record.id
    }
}

impl WritableResource for News {
    const ENCODING: PayloadEncoding = PayloadEncoding::Multipart;

    fn blank_form() -> NewsForm {
        NewsForm::default()
    }

    fn prefill(record: &NewsItem) -> NewsForm {
        NewsForm::from_record(record)
    }

    fn validate(form: &NewsForm) -> Result<FormPayload, DomainError> {
        form.to_payload()
    }
}

/// Contact submissions originate on the public site; the back office only
/// reads and deletes them.
#[derive(Debug, Clone, Copy)]
pub struct Contacts;

impl Resource for Contacts {
    type Record = ContactSubmission;
    type Form = Infallible;

    const LABEL: &'static str = "contact submission";
    const ENDPOINT: &'static str = "contact-forms/";

    fn id(record: &ContactSubmission) -> RecordId {
        record.id
    }
}
