use dioxus::prelude::*;

use crate::components::{AppNavbar, SiteFooter};
use crate::core::assets::AssetHandle;
use crate::core::config::{NavPlacement, SiteConfig};
use crate::core::content::ContentStore;
use crate::core::navigation::NavAction;
use crate::core::render::Renderer;
use crate::core::storage;
use crate::views::ViewPage;

/// Root component shared by every host.
///
/// Hosts may provide a [`SiteConfig`] and an [`AssetHandle`] through the
/// context; defaults are used otherwise. Navigation state lives in a signal
/// owned here, so every action re-runs one full render pass.
#[component]
pub fn PortfolioApp() -> Element {
    let config = try_use_context::<SiteConfig>().unwrap_or_default();
    let assets = try_use_context::<AssetHandle>().unwrap_or_default();

    let mut nav = use_signal(storage::restore_navigation);
    use_effect(move || storage::persist_navigation(&nav()));

    let state = nav();
    let content = ContentStore::global().get(state.language);
    let page = Renderer::new(&assets, &config).view(state.view, content);

    tracing::debug!(view = ?state.view, language = state.language.code(), "render pass");

    rsx! {
        document::Title { "{config.title}" }

        div { class: config.nav_placement.css_class(), lang: state.language.code(),
            AppNavbar {
                state,
                labels: content.labels.clone(),
                placement: config.nav_placement,
                on_action: move |action: NavAction| nav.write().apply(action),
            }
            main { class: "layout__main",
                ViewPage { page }
                SiteFooter {
                    note: content.labels.footer_note.clone(),
                    copyright: (config.nav_placement == NavPlacement::TopTabs)
                        .then(|| content.labels.footer_copyright.clone()),
                }
            }
        }
    }
}
