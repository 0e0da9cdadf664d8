// Preference storage and photo handling
pub mod photo;
pub mod preferences;

// Re-export commonly used types
pub use photo::{PreviewUrl, PreviewUrls, SelectedPhoto, decode_preview};
pub use preferences::{MemoryStore, PreferenceStore};
