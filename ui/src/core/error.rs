//! Errors raised while building the content store from embedded data.

use crate::core::language::Language;

#[derive(thiserror::Error, Debug)]
pub enum ContentError {
    #[error("no embedded content file for {0}")]
    MissingContent(&'static str),
    #[error("malformed content for {language}: {source}")]
    Parse {
        language: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("{language} content does not match the default language: {reason}")]
    Inconsistent { language: Language, reason: String },
    #[error(transparent)]
    Localization(#[from] i18n_embed::I18nEmbedError),
    #[error(transparent)]
    LanguageId(#[from] unic_langid::LanguageIdentifierError),
}
