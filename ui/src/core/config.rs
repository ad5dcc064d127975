//! Presentation settings a host can override through the Dioxus context.

/// Where the view selector and language picker live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavPlacement {
    /// Left column with a radio group, like a classic sidebar.
    #[default]
    Sidebar,
    /// Horizontal tabs above the page.
    TopTabs,
}

impl NavPlacement {
    pub fn css_class(self) -> &'static str {
        match self {
            NavPlacement::Sidebar => "layout layout--sidebar",
            NavPlacement::TopTabs => "layout layout--tabs",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub title: String,
    pub nav_placement: NavPlacement,
    /// Portrait looked up on the Home view.
    pub avatar_path: String,
    /// Display width of the portrait, in CSS pixels.
    pub avatar_width: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Leon Zhang Portfolio".to_string(),
            nav_placement: NavPlacement::default(),
            avatar_path: "images/avatar.jpg".to_string(),
            avatar_width: 200,
        }
    }
}

impl SiteConfig {
    pub fn with_placement(mut self, placement: NavPlacement) -> Self {
        self.nav_placement = placement;
        self
    }
}
