use serde::{Deserialize, Serialize};

use crate::{Language, de};

/// The single company profile record. It has no identifier on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyInfo {
    #[serde(default, deserialize_with = "de::string")]
    pub about_uz: String,
    #[serde(default, deserialize_with = "de::string")]
    pub about_ru: String,
    #[serde(default, deserialize_with = "de::string")]
    pub history_uz: String,
    #[serde(default, deserialize_with = "de::string")]
    pub history_ru: String,
    #[serde(default, deserialize_with = "de::string")]
    pub mission_uz: String,
    #[serde(default, deserialize_with = "de::string")]
    pub mission_ru: String,
    #[serde(default, deserialize_with = "de::string")]
    pub vision_uz: String,
    #[serde(default, deserialize_with = "de::string")]
    pub vision_ru: String,
    #[serde(default, deserialize_with = "de::string")]
    pub phone: String,
    #[serde(default, deserialize_with = "de::string")]
    pub email: String,
    #[serde(default, deserialize_with = "de::string")]
    pub telegram: String,
    #[serde(default, deserialize_with = "de::string")]
    pub address_uz: String,
    #[serde(default, deserialize_with = "de::string")]
    pub address_ru: String,
    #[serde(default, deserialize_with = "de::number")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "de::number")]
    pub longitude: Option<f64>,
    #[serde(default, deserialize_with = "de::number")]
    pub employees_count: Option<u32>,
    #[serde(default, deserialize_with = "de::number")]
    pub established_year: Option<i32>,
}

impl CompanyInfo {
    pub fn about(&self, lang: Language) -> &str {
        lang.pick(&self.about_uz, &self.about_ru)
    }

    pub fn address(&self, lang: Language) -> &str {
        lang.pick(&self.address_uz, &self.address_ru)
    }
}
