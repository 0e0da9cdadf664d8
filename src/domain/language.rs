use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::domain::AppError;

/// Display language of the widget
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, EnumString, Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ru,
}

impl Language {
    /// Parses a stored language code. Unknown codes are reported so the caller can fall back.
    pub fn from_code(code: &str) -> Result<Self, AppError> {
        code.parse()
            .map_err(|_| AppError::UnknownLanguage(code.to_string()))
    }

    pub fn code(&self) -> String {
        self.to_string()
    }

    /// Text of the language toggle button ("EN" / "RU")
    pub fn badge(&self) -> String {
        self.code().to_uppercase()
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Ru,
            Language::Ru => Language::En,
        }
    }
}
