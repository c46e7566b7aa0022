use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{Language, RecordId, de};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: RecordId,
    #[serde(default, deserialize_with = "de::string")]
    pub title_uz: String,
    #[serde(default, deserialize_with = "de::string")]
    pub title_ru: String,
    #[serde(default, deserialize_with = "de::string")]
    pub content_uz: String,
    #[serde(default, deserialize_with = "de::string")]
    pub content_ru: String,
    #[serde(default, deserialize_with = "de::string")]
    pub category_uz: String,
    #[serde(default, deserialize_with = "de::string")]
    pub category_ru: String,
    #[serde(default, deserialize_with = "de::optional_string")]
    pub image: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
}

impl NewsItem {
    pub fn title(&self, lang: Language) -> &str {
        lang.pick(&self.title_uz, &self.title_ru)
    }

    pub fn content(&self, lang: Language) -> &str {
        lang.pick(&self.content_uz, &self.content_ru)
    }

    pub fn category(&self, lang: Language) -> &str {
        lang.pick(&self.category_uz, &self.category_ru)
    }
}
