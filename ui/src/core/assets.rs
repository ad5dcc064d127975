//! Image lookup. The renderer asks an [`AssetSource`] whether an image exists
//! before referencing it; a `None` answer turns into a placeholder.

use std::path::{Path, PathBuf};
use std::rc::Rc;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use rust_embed::Embed;

/// Resolves a relative asset path (`images/avatar.jpg`) to the `src` the
/// host should use, or `None` if the asset is not available.
pub trait AssetSource {
    fn resolve(&self, path: &str) -> Option<String>;
}

/// Images on disk below `root`. The `src` is the relative path, so the host
/// must serve `root` as its resource directory.
#[derive(Debug, Clone)]
pub struct DirectoryAssets {
    root: PathBuf,
}

impl DirectoryAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl AssetSource for DirectoryAssets {
    fn resolve(&self, path: &str) -> Option<String> {
        if Path::new(path).is_absolute() || path.split('/').any(|seg| seg == "..") {
            return None;
        }
        self.root.join(path).is_file().then(|| path.to_string())
    }
}

#[derive(Embed)]
#[folder = "images"]
#[prefix = "images/"]
struct ImageFiles;

/// Images compiled into the binary from this crate's `images/` folder,
/// served as `data:` URIs. Works where there is no filesystem (WASM).
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedImages;

impl AssetSource for EmbeddedImages {
    fn resolve(&self, path: &str) -> Option<String> {
        let mime = image_mime(path)?;
        let file = ImageFiles::get(path)?;
        Some(format!("data:{mime};base64,{}", STANDARD.encode(&file.data)))
    }
}

fn image_mime(path: &str) -> Option<&'static str> {
    let ext = Path::new(path).extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "svg" => Some("image/svg+xml"),
        _ => None,
    }
}

/// Cloneable handle so hosts can put an asset source into the Dioxus context.
#[derive(Clone)]
pub struct AssetHandle(Rc<dyn AssetSource>);

impl AssetHandle {
    pub fn new(source: impl AssetSource + 'static) -> Self {
        Self(Rc::new(source))
    }
}

impl Default for AssetHandle {
    fn default() -> Self {
        Self::new(EmbeddedImages)
    }
}

impl AssetSource for AssetHandle {
    fn resolve(&self, path: &str) -> Option<String> {
        self.0.resolve(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_assets_find_existing_files() {
        let assets = DirectoryAssets::new(env!("CARGO_MANIFEST_DIR"));
        assert_eq!(assets.resolve("Cargo.toml").as_deref(), Some("Cargo.toml"));
        assert_eq!(assets.resolve("images/does-not-exist.png"), None);
    }

    #[test]
    fn directory_assets_ignore_directories_and_escapes() {
        let assets = DirectoryAssets::new(concat!(env!("CARGO_MANIFEST_DIR"), "/src"));
        assert_eq!(assets.resolve("core"), None);
        assert_eq!(assets.resolve("../Cargo.toml"), None);
    }

    #[test]
    fn embedded_images_skip_non_images() {
        // The folder README is embedded but is not an image.
        assert_eq!(EmbeddedImages.resolve("images/README.md"), None);
        assert_eq!(EmbeddedImages.resolve("images/not-there.png"), None);
    }

    #[test]
    fn mime_by_extension() {
        assert_eq!(image_mime("images/a.JPG"), Some("image/jpeg"));
        assert_eq!(image_mime("images/a.png"), Some("image/png"));
        assert_eq!(image_mime("images/a"), None);
    }
}
