use dioxus::prelude::*;

/// Page footer. `copyright` is omitted when the sidebar already shows it.
#[component]
pub fn SiteFooter(note: String, #[props(!optional)] copyright: Option<String>) -> Element {
    rsx! {
        footer { class: "footer",
            hr { class: "page__divider" }
            p { class: "footer__note", "{note}" }
            if let Some(copyright) = copyright {
                p { class: "footer__copyright", "{copyright}" }
            }
        }
    }
}
