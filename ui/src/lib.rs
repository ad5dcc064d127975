//! Shared UI crate for the portfolio site. Content, navigation and the view
//! renderer live in `core`; the Dioxus components on top are shared by the
//! web and desktop hosts.

pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    mod app_navbar;
    pub use app_navbar::AppNavbar;

    mod footer;
    pub use footer::SiteFooter;
}

mod app;
pub use app::PortfolioApp;
