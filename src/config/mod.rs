//! Configuration module for the OptiBotX widget.

pub mod analysis;
pub mod calculator;

mod debug; // Private: files use crate::config::DEBUG_FLAGS, not crate::config::debug::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

pub mod pairs;
pub mod persistence;
pub mod timeframes;
pub mod web;

// Re-export commonly used items
pub use analysis::ANALYSIS;
pub use calculator::CALCULATOR;
pub use pairs::{PAIRS, PairGroup};
pub use persistence::PERSISTENCE;
pub use timeframes::TIMEFRAMES;
pub use web::WEB;
