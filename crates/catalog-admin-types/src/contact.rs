use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{RecordId, de};

/// Message left through the public contact form. Read and delete only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub id: RecordId,
    #[serde(default, deserialize_with = "de::string")]
    pub name: String,
    #[serde(default, deserialize_with = "de::string")]
    pub email: String,
    #[serde(default, deserialize_with = "de::optional_string")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "de::optional_string")]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "de::string")]
    pub message: String,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
}
