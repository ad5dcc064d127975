//! Per-session navigation state: which view is showing, in which language.

use serde::{Deserialize, Serialize};

use crate::core::language::Language;

/// Top-level display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Home,
    Projects,
    Contact,
}

impl View {
    pub const ALL: [View; 3] = [View::Home, View::Projects, View::Contact];

    /// Stable identifier for element ids and CSS modifiers.
    pub fn slug(self) -> &'static str {
        match self {
            View::Home => "home",
            View::Projects => "projects",
            View::Contact => "contact",
        }
    }
}

/// The only ways navigation state can change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    SelectView(View),
    SelectLanguage(Language),
}

/// A flat selector: any action is valid from any state, and the two
/// dimensions never affect each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NavigationState {
    pub view: View,
    pub language: Language,
}

impl NavigationState {
    pub fn apply(&mut self, action: NavAction) {
        match action {
            NavAction::SelectView(view) => self.view = view,
            NavAction::SelectLanguage(language) => self.language = language,
        }
    }

    pub fn with(mut self, action: NavAction) -> Self {
        self.apply(action);
        self
    }
}
