// Domain types and value objects
pub mod error;
pub mod language;
pub mod pair_catalog;
pub mod timeframe;

// Re-export commonly used types
pub use error::AppError;
pub use language::Language;
pub use pair_catalog::{PairCatalog, PairOptionGroup};
pub use timeframe::TimeframeSelector;
