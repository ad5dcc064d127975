//! View renderer: turns one language's content into a plain view tree.
//!
//! The tree is data, not markup. Components in `crate::views` draw it, and
//! tests can compare it directly. Rendering is pure: the same content, view
//! and asset source always produce the same tree.
//!
//! A missing image never fails a render. The slot becomes
//! [`ImageSlot::Placeholder`] carrying a localized hint, and the rest of the
//! page renders as usual.

use serde::Serialize;

use crate::core::assets::AssetSource;
use crate::core::config::SiteConfig;
use crate::core::content::{ContactEntry, LocalizedContent, Project};
use crate::core::navigation::View;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ImageSlot {
    Image {
        src: String,
        width: Option<u32>,
        caption: Option<String>,
    },
    Placeholder {
        message: String,
    },
}

impl ImageSlot {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, ImageSlot::Placeholder { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hyperlink {
    pub text: String,
    pub href: String,
}

/// How a contact value is shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContactValue {
    Link(Hyperlink),
    Text { text: String },
}

impl ContactValue {
    /// `http…` values become links whose text is the URL itself; anything
    /// else, including bare email addresses, stays plain text.
    pub fn classify(value: &str) -> Self {
        if value.starts_with("http") {
            ContactValue::Link(Hyperlink {
                text: value.to_string(),
                href: value.to_string(),
            })
        } else {
            ContactValue::Text {
                text: value.to_string(),
            }
        }
    }

    pub fn is_link(&self) -> bool {
        matches!(self, ContactValue::Link(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "block", rename_all = "snake_case")]
pub enum Block {
    /// Full-width banner; `title_html` is markup.
    Hero { title_html: String },
    /// Avatar column beside the bio; `body_html` is markup.
    About {
        avatar: ImageSlot,
        title: String,
        body_html: String,
    },
    Heading { text: String },
    Divider,
    ProjectRow {
        image: ImageSlot,
        name: String,
        subtitle: String,
        details: Hyperlink,
    },
    ContactLine { label: String, value: ContactValue },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedView {
    pub view: View,
    pub blocks: Vec<Block>,
}

impl RenderedView {
    pub fn project_rows(&self) -> impl Iterator<Item = &Block> {
        self.blocks
            .iter()
            .filter(|b| matches!(b, Block::ProjectRow { .. }))
    }
}

pub struct Renderer<'a> {
    assets: &'a dyn AssetSource,
    avatar_path: &'a str,
    avatar_width: u32,
}

impl<'a> Renderer<'a> {
    pub fn new(assets: &'a dyn AssetSource, config: &'a SiteConfig) -> Self {
        Self {
            assets,
            avatar_path: &config.avatar_path,
            avatar_width: config.avatar_width,
        }
    }

    pub fn view(&self, view: View, content: &LocalizedContent) -> RenderedView {
        match view {
            View::Home => self.home(content),
            View::Projects => self.projects(content),
            View::Contact => self.contact(content),
        }
    }

    pub fn home(&self, content: &LocalizedContent) -> RenderedView {
        let avatar = match self.assets.resolve(self.avatar_path) {
            Some(src) => ImageSlot::Image {
                src,
                width: Some(self.avatar_width),
                caption: Some(content.avatar_caption.clone()),
            },
            None => placeholder(self.avatar_path, &content.labels.avatar_placeholder),
        };

        RenderedView {
            view: View::Home,
            blocks: vec![
                Block::Hero {
                    title_html: content.hero_title.clone(),
                },
                Block::About {
                    avatar,
                    title: content.about_title.clone(),
                    body_html: content.about_body.clone(),
                },
            ],
        }
    }

    pub fn projects(&self, content: &LocalizedContent) -> RenderedView {
        let mut blocks = Vec::with_capacity(1 + content.projects.len() * 2);
        blocks.push(Block::Heading {
            text: content.labels.projects_heading.clone(),
        });
        for project in &content.projects {
            blocks.push(Block::Divider);
            blocks.push(self.project_row(project, content));
        }

        RenderedView {
            view: View::Projects,
            blocks,
        }
    }

    pub fn contact(&self, content: &LocalizedContent) -> RenderedView {
        let mut blocks = Vec::with_capacity(1 + content.contact.len());
        blocks.push(Block::Heading {
            text: content.labels.contact_heading.clone(),
        });
        blocks.extend(content.contact.iter().map(contact_line));

        RenderedView {
            view: View::Contact,
            blocks,
        }
    }

    fn project_row(&self, project: &Project, content: &LocalizedContent) -> Block {
        let image = match self.assets.resolve(&project.image) {
            Some(src) => ImageSlot::Image {
                src,
                width: None,
                caption: None,
            },
            None => placeholder(&project.image, &content.labels.project_placeholder),
        };

        Block::ProjectRow {
            image,
            name: project.name.clone(),
            subtitle: project.subtitle.clone(),
            details: Hyperlink {
                text: content.labels.view_details.clone(),
                href: project.link.clone(),
            },
        }
    }
}

fn placeholder(path: &str, message: &str) -> ImageSlot {
    tracing::debug!(path, "image not found; rendering placeholder");
    ImageSlot::Placeholder {
        message: message.to_string(),
    }
}

fn contact_line(entry: &ContactEntry) -> Block {
    Block::ContactLine {
        label: entry.label.clone(),
        value: ContactValue::classify(&entry.value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::content::ContentStore;
    use crate::core::language::Language;

    struct Everything;

    impl AssetSource for Everything {
        fn resolve(&self, path: &str) -> Option<String> {
            Some(format!("/static/{path}"))
        }
    }

    struct Nothing;

    impl AssetSource for Nothing {
        fn resolve(&self, _path: &str) -> Option<String> {
            None
        }
    }

    #[test]
    fn classify_prefers_links_for_http() {
        assert!(ContactValue::classify("https://github.com/leonz-ux").is_link());
        assert!(ContactValue::classify("http://example.com").is_link());
        assert!(!ContactValue::classify("zhangzeng1999@gmail.com").is_link());
        assert!(!ContactValue::classify("mailto:someone@example.com").is_link());
        assert!(!ContactValue::classify("").is_link());
    }

    #[test]
    fn avatar_uses_configured_width_and_caption() {
        let config = SiteConfig::default();
        let content = ContentStore::global().get(Language::English);
        let page = Renderer::new(&Everything, &config).home(content);

        let Block::About { avatar, .. } = &page.blocks[1] else {
            panic!("second block should be About, got {:?}", page.blocks[1]);
        };
        assert_eq!(
            avatar,
            &ImageSlot::Image {
                src: "/static/images/avatar.jpg".into(),
                width: Some(200),
                caption: Some("Leon Zhang".into()),
            }
        );
    }

    #[test]
    fn missing_project_images_become_placeholders() {
        let config = SiteConfig::default();
        let content = ContentStore::global().get(Language::English);
        let page = Renderer::new(&Nothing, &config).projects(content);

        for row in page.project_rows() {
            let Block::ProjectRow { image, .. } = row else {
                unreachable!()
            };
            assert_eq!(
                image,
                &ImageSlot::Placeholder {
                    message: content.labels.project_placeholder.clone()
                }
            );
        }
    }

    #[test]
    fn dividers_separate_every_project() {
        let config = SiteConfig::default();
        let content = ContentStore::global().get(Language::English);
        let page = Renderer::new(&Nothing, &config).projects(content);

        let dividers = page
            .blocks
            .iter()
            .filter(|b| matches!(b, Block::Divider))
            .count();
        assert_eq!(dividers, content.projects.len());
        assert!(matches!(page.blocks[0], Block::Heading { .. }));
    }

    #[test]
    fn dispatch_matches_direct_calls() {
        let config = SiteConfig::default();
        let renderer = Renderer::new(&Nothing, &config);
        let content = ContentStore::global().get(Language::Chinese);

        assert_eq!(renderer.view(View::Home, content), renderer.home(content));
        assert_eq!(renderer.view(View::Projects, content), renderer.projects(content));
        assert_eq!(renderer.view(View::Contact, content), renderer.contact(content));
    }
}
