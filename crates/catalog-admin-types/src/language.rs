use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Display locale selecting which `_uz` / `_ru` field is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Uz,
    Ru,
}

impl Language {
    pub fn suffix(self) -> &'static str {
        match self {
            Language::Uz => "uz",
            Language::Ru => "ru",
        }
    }

    /// Picks the value belonging to this language from a bilingual pair.
    pub fn pick<'a, T: ?Sized>(self, uz: &'a T, ru: &'a T) -> &'a T {
        match self {
            Language::Uz => uz,
            Language::Ru => ru,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::Uz => Language::Ru,
            Language::Ru => Language::Uz,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLanguageError(pub String);

impl fmt::Display for ParseLanguageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported language `{}` (expected uz or ru)", self.0)
    }
}

impl std::error::Error for ParseLanguageError {}

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uz" => Ok(Language::Uz),
            "ru" => Ok(Language::Ru),
            other => Err(ParseLanguageError(other.to_string())),
        }
    }
}
