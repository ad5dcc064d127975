use dioxus::prelude::*;

use crate::core::render::{Block, ContactValue, Hyperlink, ImageSlot, RenderedView};

/// Draws a rendered view tree. Holds no state of its own.
#[component]
pub fn ViewPage(page: RenderedView) -> Element {
    rsx! {
        section { class: "page page-{page.view.slug()}",
            for block in page.blocks.iter() {
                {render_block(block)}
            }
        }
    }
}

fn render_block(block: &Block) -> Element {
    match block {
        Block::Hero { title_html } => rsx! {
            div { class: "hero",
                h1 { class: "hero__title", dangerous_inner_html: "{title_html}" }
            }
        },
        Block::About {
            avatar,
            title,
            body_html,
        } => rsx! {
            div { class: "about",
                div { class: "about__avatar", {render_image(avatar)} }
                div { class: "about__text",
                    h3 { class: "about__title", "{title}" }
                    div { class: "about__body", dangerous_inner_html: "{body_html}" }
                }
            }
        },
        Block::Heading { text } => rsx! {
            h2 { class: "page__heading", "{text}" }
        },
        Block::Divider => rsx! {
            hr { class: "page__divider" }
        },
        Block::ProjectRow {
            image,
            name,
            subtitle,
            details,
        } => rsx! {
            article { class: "project",
                div { class: "project__image", {render_image(image)} }
                div { class: "project__detail",
                    h3 { class: "project__name", "{name}" }
                    p { class: "project__subtitle", "{subtitle}" }
                    {render_link(details, "project__link")}
                }
            }
        },
        Block::ContactLine { label, value } => rsx! {
            p { class: "contact__line",
                strong { class: "contact__label", "{label}:" }
                " "
                {render_contact_value(value)}
            }
        },
    }
}

fn render_contact_value(value: &ContactValue) -> Element {
    match value {
        ContactValue::Link(link) => render_link(link, "contact__value contact__value--link"),
        ContactValue::Text { text } => rsx! {
            span { class: "contact__value", "{text}" }
        },
    }
}

fn render_image(slot: &ImageSlot) -> Element {
    match slot {
        ImageSlot::Image {
            src,
            width,
            caption,
        } => rsx! {
            figure { class: "image",
                img {
                    class: "image__img",
                    src: "{src}",
                    width: width.map(|w| w.to_string()),
                    alt: caption.clone().unwrap_or_default(),
                }
                if let Some(caption) = caption {
                    figcaption { class: "image__caption", "{caption}" }
                }
            }
        },
        ImageSlot::Placeholder { message } => rsx! {
            p { class: "image-placeholder", "{message}" }
        },
    }
}

fn render_link(link: &Hyperlink, class: &str) -> Element {
    rsx! {
        a {
            class: "{class}",
            href: "{link.href}",
            target: "_blank",
            rel: "noopener noreferrer",
            "{link.text}"
        }
    }
}
