//! Wire records exchanged with the catalog REST API.
//!
//! The records mirror what the server returns. Bilingual fields come in
//! `_uz` / `_ru` pairs and are read through [`Language`]-aware accessors.

mod company;
mod contact;
mod de;
mod language;
mod news;
mod product;
mod timestamp;

pub use company::CompanyInfo;
pub use contact::ContactSubmission;
pub use language::{Language, ParseLanguageError};
pub use news::NewsItem;
pub use product::{Product, Specifications};
pub use timestamp::format_timestamp;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned identifier of a collection record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub u64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for RecordId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}
