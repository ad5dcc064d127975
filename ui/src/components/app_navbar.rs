use dioxus::prelude::*;

use crate::core::config::NavPlacement;
use crate::core::language::Language;
use crate::core::navigation::{NavAction, NavigationState, View};
use crate::i18n::UiLabels;

/// View selector plus language picker.
///
/// Emits [`NavAction`]s and never keeps state of its own; the owner applies
/// the action and re-renders. Labels are decorative only: every branch is on
/// the [`View`] / [`Language`] enums.
///
/// `Sidebar` renders the views as a radio group in a left column; `TopTabs`
/// renders them as a tab strip above the page.
#[component]
pub fn AppNavbar(
    state: NavigationState,
    labels: UiLabels,
    placement: NavPlacement,
    on_action: EventHandler<NavAction>,
) -> Element {
    match placement {
        NavPlacement::Sidebar => rsx! {
            aside { id: "navbar", class: "navbar navbar--sidebar",
                h2 { class: "navbar__heading", "{labels.nav_heading}" }
                fieldset { class: "navbar__views",
                    legend { class: "navbar__legend", "{labels.nav_go_to}" }
                    for view in View::ALL {
                        label { key: "{view.slug()}", class: "navbar__radio",
                            input {
                                r#type: "radio",
                                name: "view",
                                value: view.slug(),
                                checked: state.view == view,
                                onchange: move |_| on_action.call(NavAction::SelectView(view)),
                            }
                            span { {view_label(&labels, view)} }
                        }
                    }
                }
                {language_picker(state.language, &labels.nav_language, on_action)}
                hr { class: "navbar__rule" }
                p { class: "navbar__caption", "{labels.footer_copyright}" }
            }
        },
        NavPlacement::TopTabs => rsx! {
            header { id: "navbar", class: "navbar navbar--tabs",
                nav { class: "navbar__tabs",
                    for view in View::ALL {
                        button {
                            key: "{view.slug()}",
                            r#type: "button",
                            class: format!(
                                "navbar__tab {}",
                                if state.view == view { "navbar__tab--active" } else { "" }
                            ),
                            onclick: move |_| on_action.call(NavAction::SelectView(view)),
                            {view_label(&labels, view)}
                        }
                    }
                }
                {language_picker(state.language, &labels.nav_language, on_action)}
            }
        },
    }
}

fn view_label(labels: &UiLabels, view: View) -> String {
    match view {
        View::Home => labels.nav_home.clone(),
        View::Projects => labels.nav_projects.clone(),
        View::Contact => labels.nav_contact.clone(),
    }
}

fn language_picker(current: Language, caption: &str, on_action: EventHandler<NavAction>) -> Element {
    rsx! {
        div { class: "navbar__locale",
            label { class: "navbar__locale-label", r#for: "locale-select", "{caption}" }
            select {
                id: "locale-select",
                value: current.code(),
                oninput: move |evt: FormEvent| {
                    // Unknown values (should not happen) leave the language unchanged.
                    if let Some(language) = Language::from_code(&evt.value()) {
                        on_action.call(NavAction::SelectLanguage(language));
                    }
                },
                for language in Language::ALL {
                    option {
                        key: "{language.code()}",
                        value: language.code(),
                        selected: language == current,
                        "{language.display_name()}"
                    }
                }
            }
        }
    }
}
