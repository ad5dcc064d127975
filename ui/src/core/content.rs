//! Content store: every piece of portfolio copy, keyed by language.
//!
//! Copy lives in `content/<lang-code>.json` (embedded at compile time) and
//! chrome labels in the Fluent files under `i18n/`. Both are resolved once
//! into [`LocalizedContent`] values when the store is built; afterwards the
//! store is read-only and can be shared freely.

use once_cell::sync::Lazy;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};

use crate::core::error::ContentError;
use crate::core::language::Language;
use crate::i18n::UiLabels;

#[derive(Embed)]
#[folder = "content"]
struct ContentFiles;

/// The concept behind a contact entry, stable across translations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    Email,
    LinkedIn,
    GitHub,
    Resume,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub subtitle: String,
    /// Relative to the images root, e.g. `images/jacket.png`. May not exist.
    pub image: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactEntry {
    pub kind: ContactKind,
    pub label: String,
    /// Either a bare string (an email address) or an absolute URL.
    pub value: String,
}

/// Shape of `content/<lang-code>.json`.
#[derive(Debug, Deserialize)]
struct ContentFile {
    hero_title: String,
    about_title: String,
    about_body: String,
    avatar_caption: String,
    projects: Vec<Project>,
    contact: Vec<ContactEntry>,
}

/// All copy for one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalizedContent {
    pub language: Language,
    /// Markup (may contain `<br>`).
    pub hero_title: String,
    pub about_title: String,
    /// Markup (may contain inline emphasis).
    pub about_body: String,
    pub avatar_caption: String,
    pub projects: Vec<Project>,
    pub contact: Vec<ContactEntry>,
    pub labels: UiLabels,
}

impl LocalizedContent {
    fn load(language: Language) -> Result<Self, ContentError> {
        let code = language.code();
        let file = ContentFiles::get(&format!("{code}.json"))
            .ok_or(ContentError::MissingContent(code))?;
        let raw: ContentFile = serde_json::from_slice(&file.data)
            .map_err(|source| ContentError::Parse { language: code, source })?;

        Ok(Self {
            language,
            hero_title: raw.hero_title,
            about_title: raw.about_title,
            about_body: raw.about_body,
            avatar_caption: raw.avatar_caption,
            projects: raw.projects,
            contact: raw.contact,
            labels: UiLabels::load(language)?,
        })
    }

    /// Check that this variant lines up with `reference` (projects by
    /// position, contact entries by concept).
    fn check_matches(&self, reference: &LocalizedContent) -> Result<(), ContentError> {
        let fail = |reason: String| ContentError::Inconsistent {
            language: self.language,
            reason,
        };

        if self.projects.len() != reference.projects.len() {
            return Err(fail(format!(
                "{} projects, expected {}",
                self.projects.len(),
                reference.projects.len()
            )));
        }
        for (idx, (ours, theirs)) in self.projects.iter().zip(&reference.projects).enumerate() {
            if ours.link != theirs.link {
                return Err(fail(format!("project {idx} links to {}", ours.link)));
            }
            if ours.image != theirs.image {
                return Err(fail(format!("project {idx} uses image {}", ours.image)));
            }
        }

        let kinds = |c: &LocalizedContent| c.contact.iter().map(|e| e.kind).collect::<Vec<_>>();
        if kinds(self) != kinds(reference) {
            return Err(fail("contact entries differ".to_string()));
        }
        Ok(())
    }
}

static STORE: Lazy<ContentStore> =
    Lazy::new(|| ContentStore::load().expect("embedded portfolio content is valid"));

/// Immutable, language-keyed table of all portfolio copy.
#[derive(Debug, Clone)]
pub struct ContentStore {
    /// One entry per [`Language::ALL`], in declared order. Never empty.
    variants: Vec<LocalizedContent>,
}

impl ContentStore {
    /// Build every language variant and verify they agree structurally.
    pub fn load() -> Result<Self, ContentError> {
        let variants = Language::ALL
            .into_iter()
            .map(LocalizedContent::load)
            .collect::<Result<Vec<_>, _>>()?;

        let (reference, rest) = variants
            .split_first()
            .ok_or(ContentError::MissingContent(Language::default().code()))?;
        for variant in rest {
            variant.check_matches(reference)?;
        }

        tracing::debug!(languages = variants.len(), "content store ready");
        Ok(Self { variants })
    }

    /// Process-wide store, built on first use.
    pub fn global() -> &'static ContentStore {
        &STORE
    }

    pub fn get(&self, language: Language) -> &LocalizedContent {
        self.variants
            .iter()
            .find(|c| c.language == language)
            .unwrap_or(&self.variants[0])
    }

    /// Lookup by language code; unknown codes get the default language.
    pub fn get_by_code(&self, code: &str) -> &LocalizedContent {
        self.get(Language::resolve(code))
    }

    pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
        self.variants.iter().map(|c| c.language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_loads_every_language() {
        let store = ContentStore::load().unwrap();
        let langs: Vec<_> = store.languages().collect();
        assert_eq!(langs, Language::ALL.to_vec());
    }

    #[test]
    fn get_by_code_falls_back_to_english() {
        let store = ContentStore::global();
        let fallback = store.get_by_code("de-DE");
        assert_eq!(fallback.language, Language::English);
        assert_eq!(fallback, store.get(Language::English));
    }

    #[test]
    fn contact_kinds_parse_lowercase() {
        let entry: ContactEntry =
            serde_json::from_str(r#"{"kind":"github","label":"GitHub","value":"x"}"#).unwrap();
        assert_eq!(entry.kind, ContactKind::GitHub);
    }

    #[test]
    fn mismatched_projects_are_rejected() {
        let store = ContentStore::load().unwrap();
        let english = store.get(Language::English);
        let mut chinese = store.get(Language::Chinese).clone();
        chinese.projects.pop();

        let err = chinese.check_matches(english).unwrap_err();
        assert!(matches!(
            err,
            ContentError::Inconsistent { language: Language::Chinese, .. }
        ));
    }

    #[test]
    fn swapped_links_are_rejected() {
        let store = ContentStore::load().unwrap();
        let english = store.get(Language::English);
        let mut chinese = store.get(Language::Chinese).clone();
        chinese.projects.swap(0, 1);

        assert!(chinese.check_matches(english).is_err());
    }

    #[test]
    fn reordered_contact_is_rejected() {
        let store = ContentStore::load().unwrap();
        let english = store.get(Language::English);
        let mut chinese = store.get(Language::Chinese).clone();
        chinese.contact.reverse();

        assert!(chinese.check_matches(english).is_err());
    }
}
