//! Supported display languages.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A supported display language, in canonical declared order.
///
/// Serialized as its BCP 47 code so persisted navigation state stays readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en-US")]
    English,
    #[serde(rename = "zh-CN")]
    Chinese,
}

impl Language {
    /// Declared order; the first entry is the default.
    pub const ALL: [Language; 2] = [Language::English, Language::Chinese];

    /// BCP 47 code, also the locale folder / content file name.
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en-US",
            Language::Chinese => "zh-CN",
        }
    }

    /// Name shown in the language picker (always in its own script).
    pub fn display_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Chinese => "中文",
        }
    }

    /// Parse a language code or display name.
    ///
    /// Accepts full codes (`en-US`), bare primary subtags (`zh`) in any case,
    /// and display names (`中文`). Returns `None` for anything unsupported.
    pub fn from_code(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL.into_iter().find(|lang| {
            let code = lang.code();
            let primary = code.split('-').next().unwrap_or(code);
            raw.eq_ignore_ascii_case(code)
                || raw.eq_ignore_ascii_case(primary)
                || raw.replace('_', "-").eq_ignore_ascii_case(code)
                || raw == lang.display_name()
        })
    }

    /// Like [`Language::from_code`], but unsupported input resolves to the default.
    pub fn resolve(raw: &str) -> Self {
        Self::from_code(raw).unwrap_or_else(|| {
            tracing::debug!(
                requested = raw,
                fallback = Self::default().code(),
                "unsupported language; using default"
            );
            Self::default()
        })
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
