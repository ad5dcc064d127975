//! Internationalization (i18n) support for `portfolio-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language negotiation + asset loading)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/portfolio-ui.ftl   (fallback/reference)
//!   zh-CN/portfolio-ui.ftl
//! ```
//!
//! Unlike a single global loader, every supported [`Language`] gets its own
//! loader, and all chrome strings are resolved once into [`UiLabels`] when the
//! content store is built. Rendering never touches Fluent, so a render pass
//! depends only on the content it is handed.
//!
//! To add a new locale:
//! 1. Copy `en-US/portfolio-ui.ftl` to `i18n/<lang-id>/portfolio-ui.ftl`.
//! 2. Translate each message value (keep IDs identical).
//! 3. Add the variant to [`Language`] and a matching `content/<lang-id>.json`.
//! 4. Run tests to ensure completeness.
//!
//! NOTE: The hyphenated filename `portfolio-ui.ftl` is canonical across all locales.
use i18n_embed::fluent::FluentLanguageLoader;
use rust_embed::Embed;
use serde::Serialize;
use unic_langid::LanguageIdentifier;

use crate::core::error::ContentError;
use crate::core::language::Language;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Keyed lookup against an explicit loader.
///
/// ```ignore
/// let loader = &i18n::loader_for(Language::Chinese)?;
/// let home = t!(loader, "nav-home");
/// ```
///
/// Keys are checked against the fallback FTL at compile time.
#[macro_export]
macro_rules! t {
    ($loader:expr, $key:literal) => {
        $crate::i18n::fl!($loader, $key)
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
const DOMAIN: &str = "portfolio-ui";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Localized chrome strings for one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UiLabels {
    pub nav_heading: String,
    pub nav_go_to: String,
    pub nav_home: String,
    pub nav_projects: String,
    pub nav_contact: String,
    pub nav_language: String,
    pub projects_heading: String,
    pub contact_heading: String,
    pub view_details: String,
    pub avatar_placeholder: String,
    pub project_placeholder: String,
    pub footer_copyright: String,
    pub footer_note: String,
}

impl UiLabels {
    /// Resolve every chrome string for `language`.
    pub fn load(language: Language) -> Result<Self, ContentError> {
        let loader = loader_for(language)?;
        let loader = &loader;
        Ok(Self {
            nav_heading: t!(loader, "nav-heading"),
            nav_go_to: t!(loader, "nav-go-to"),
            nav_home: t!(loader, "nav-home"),
            nav_projects: t!(loader, "nav-projects"),
            nav_contact: t!(loader, "nav-contact"),
            nav_language: t!(loader, "nav-language-label"),
            projects_heading: t!(loader, "projects-heading"),
            contact_heading: t!(loader, "contact-heading"),
            view_details: t!(loader, "project-view-details"),
            avatar_placeholder: t!(loader, "placeholder-avatar"),
            project_placeholder: t!(loader, "placeholder-project"),
            footer_copyright: t!(loader, "footer-copyright"),
            footer_note: t!(loader, "footer-note"),
        })
    }
}

/// Build a loader with `language` selected on top of the en-US fallback.
pub fn loader_for(language: Language) -> Result<FluentLanguageLoader, ContentError> {
    let fallback: LanguageIdentifier = Language::default().code().parse()?;
    let requested: LanguageIdentifier = language.code().parse()?;
    let loader = FluentLanguageLoader::new(DOMAIN, fallback);
    i18n_embed::select(&loader, &Localizations, &[requested])?;
    Ok(loader)
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}
