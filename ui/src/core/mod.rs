//! Platform-agnostic core: content, navigation, rendering. Nothing in here
//! depends on Dioxus.

pub mod assets;
pub mod config;
pub mod content;
pub mod error;
pub mod language;
pub mod navigation;
pub mod render;
pub mod storage;
