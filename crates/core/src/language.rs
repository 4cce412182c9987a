//! Language definitions for the bilingual responder
//!
//! English is the primary language; Sinhala is the secondary language and is
//! recognised purely by its Unicode block (U+0D80..=U+0DFF).

use serde::{Deserialize, Serialize};

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Primary language, assumed whenever no Sinhala code point is present
    #[default]
    English,
    /// Secondary language
    Sinhala,
}

impl Language {
    /// Get ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Sinhala => "si",
        }
    }

    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Sinhala => "Sinhala",
        }
    }

    /// Classify text by script.
    ///
    /// Any single Sinhala code point makes the whole message Sinhala; empty,
    /// ASCII-only or otherwise ambiguous text is English. Never fails.
    pub fn detect(text: &str) -> Self {
        if text.chars().any(|c| Script::Sinhala.contains_char(c)) {
            Self::Sinhala
        } else {
            Self::English
        }
    }

    /// Get all supported languages
    pub fn all() -> &'static [Language] {
        &[Self::English, Self::Sinhala]
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Script systems used by the supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Script {
    Latin,
    Sinhala,
}

impl Script {
    /// Get Unicode range for this script (first block only)
    pub fn unicode_range(&self) -> (u32, u32) {
        match self {
            Self::Latin => (0x0000, 0x007F),
            Self::Sinhala => (0x0D80, 0x0DFF),
        }
    }

    /// Check if a character belongs to this script
    pub fn contains_char(&self, c: char) -> bool {
        let code = c as u32;
        let (start, end) = self.unicode_range();
        code >= start && code <= end
    }
}
