use std::fmt;

/// Error types for application operations
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// A stored language code is not one we ship translations for
    UnknownLanguage(String),
    /// A timeframe token that has no matching button
    UnknownTimeframe(String),
    /// Calculator input could not be parsed as a number
    NotANumber(String),
    /// Selected photo bytes could not be decoded as an image
    PhotoDecode(String),
    /// A photo path given natively could not be read
    PhotoRead(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::UnknownLanguage(code) => write!(f, "Unknown language code: {}", code),
            AppError::UnknownTimeframe(token) => write!(f, "Unknown timeframe: {}", token),
            AppError::NotANumber(input) => write!(f, "Not a number: {:?}", input),
            AppError::PhotoDecode(msg) => write!(f, "Could not decode photo: {}", msg),
            AppError::PhotoRead(msg) => write!(f, "Could not read photo: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}
