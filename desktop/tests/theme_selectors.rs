#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Purpose:
- Ensure that CSS selectors emitted by the shared components (navbar, view
  pages, placeholders) remain present in the unified shared theme:
  ui/assets/theme/main.css
- Fail fast if a refactor accidentally drops or renames core classes, preventing a
  silent styling regression in packaged (embedded) desktop builds.

How it works:
- We compile‑time embed the unified theme using `include_str!` pointing to the shared
  `ui/` location (mirrors the constant in `desktop/src/main.rs`).
- We assert presence of a curated set of selectors / tokens.
- If you intentionally rename or remove a selector:
    1. Update the Dioxus component markup.
    2. Adjust this test's REQUIRED_SELECTORS accordingly.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Core selectors / tokens that must exist in the shared theme for desktop.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".layout--sidebar",
    ".layout--tabs",
    ".layout__main",
    // Navigation
    ".navbar--sidebar",
    ".navbar--tabs",
    ".navbar__radio",
    ".navbar__tab--active",
    ".navbar__locale",
    // Pages
    ".page {",
    ".page__heading",
    ".page__divider",
    ".hero__title",
    ".about__avatar",
    ".project__subtitle",
    ".project__link",
    ".contact__label",
    // Degraded rendering
    ".image-placeholder",
    ".image__caption",
    // Footer
    ".footer__note",
    // Media query token (sanity check responsive block exists)
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let mut missing = Vec::new();
    for sel in REQUIRED_SELECTORS {
        if !THEME_CSS.contains(sel) {
            missing.push(*sel);
        }
    }

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 2_000,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}

#[test]
fn placeholder_is_visually_distinct() {
    // A missing asset must never look like an empty gap.
    let start = THEME_CSS
        .find(".image-placeholder {")
        .expect("placeholder rule present");
    let rule = &THEME_CSS[start..];
    let rule = &rule[..rule.find('}').unwrap_or(rule.len())];
    assert!(
        rule.contains("border"),
        "placeholder rule should draw a border:\n{rule}"
    );
}
