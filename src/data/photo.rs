//! Selected photo and the temporary preview URLs created for it.
//!
//! A preview URL plays the role of a browser object URL: it keeps the photo
//! bytes reachable for the preview until it is revoked. Revoking releases them.

use anyhow::{Context, Result};
use eframe::egui::ColorImage;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A user-chosen image file
#[derive(Clone, PartialEq, Eq)]
pub struct SelectedPhoto {
    pub name: String,
    pub bytes: Arc<[u8]>,
}

impl SelectedPhoto {
    pub fn new(name: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn read_from_path(path: &std::path::Path) -> Result<Self> {
        let bytes = std::fs::read(path)
            .context(format!("Failed to read photo: {}", path.display()))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self::new(name, bytes))
    }
}

impl fmt::Debug for SelectedPhoto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectedPhoto")
            .field("name", &self.name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PreviewUrl(String);

impl PreviewUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PreviewUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Registry of live preview URLs
#[derive(Debug, Default)]
pub struct PreviewUrls {
    next_id: u64,
    live: HashMap<PreviewUrl, SelectedPhoto>,
}

impl PreviewUrls {
    pub fn create(&mut self, photo: &SelectedPhoto) -> PreviewUrl {
        self.next_id += 1;
        let url = PreviewUrl(format!("bytes://preview/{}/{}", self.next_id, photo.name));
        self.live.insert(url.clone(), photo.clone());
        url
    }

    pub fn resolve(&self, url: &PreviewUrl) -> Option<&SelectedPhoto> {
        self.live.get(url)
    }

    /// Returns false if the URL was already revoked
    pub fn revoke(&mut self, url: &PreviewUrl) -> bool {
        self.live.remove(url).is_some()
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }
}

/// Decodes photo bytes into an image egui can upload as a texture.
pub fn decode_preview(bytes: &[u8]) -> Result<ColorImage> {
    let image = image::load_from_memory(bytes).context("Unsupported or corrupt image data")?;
    let rgba = image.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}
