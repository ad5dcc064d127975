use dioxus::prelude::*;

use ui::core::assets::{AssetHandle, EmbeddedImages};
use ui::core::config::{NavPlacement, SiteConfig};
use ui::PortfolioApp;

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Top tabs on the web; images are compiled in since WASM has no filesystem.
    use_context_provider(|| SiteConfig::default().with_placement(NavPlacement::TopTabs));
    use_context_provider(|| AssetHandle::new(EmbeddedImages));

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        PortfolioApp {}
    }
}
