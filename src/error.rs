//! Error types for the munsell_match library

use thiserror::Error;

/// Result type alias for munsell_match operations
pub type Result<T> = std::result::Result<T, MatchError>;

/// Errors raised at the boundary of the matching core
///
/// An unknown palette code is not an error: lookups return `Option`.
#[derive(Error, Debug)]
pub enum MatchError {
    /// Hex color string is not `[#]RRGGBB`
    #[error("Invalid hex color {input:?}: {reason}")]
    InvalidHex { input: String, reason: String },

    /// RGB channel value outside [0, 255]
    #[error("Channel {channel} out of range: {value} (expected 0-255)")]
    ChannelOutOfRange { channel: Channel, value: i64 },

    /// Nearest-match requested against a palette with no entries
    #[error("Reference palette is empty")]
    EmptyPalette,

    /// A palette source row could not be parsed
    #[error("Palette parse error at line {line}: {reason}")]
    PaletteParse { line: usize, reason: String },

    /// Palette source could not be read
    #[error("Failed to load palette: {message}")]
    PaletteLoad {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration could not be read, parsed or written
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// RGB channel identifier used in validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        };
        f.write_str(name)
    }
}

impl MatchError {
    /// Create an invalid hex error
    pub fn invalid_hex(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidHex {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create a palette parse error for a 1-based source line
    pub fn palette_parse(line: usize, reason: impl Into<String>) -> Self {
        Self::PaletteParse {
            line,
            reason: reason.into(),
        }
    }

    /// Create a palette load error with context
    pub fn palette_load<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::PaletteLoad {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Check if this error was caused by malformed caller input
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            MatchError::InvalidHex { .. } | MatchError::ChannelOutOfRange { .. }
        )
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            MatchError::InvalidHex { input, .. } => {
                format!("\"{input}\" is not a color. Use six hex digits such as #1a2b3c.")
            }
            MatchError::ChannelOutOfRange { channel, value } => {
                format!("The {channel} value {value} is outside 0-255.")
            }
            MatchError::EmptyPalette => {
                "No reference colors are loaded, so nothing can be matched.".to_string()
            }
            MatchError::PaletteParse { line, .. } => {
                format!("The reference color table is malformed near line {line}.")
            }
            MatchError::PaletteLoad { .. } => {
                "Could not read the reference color table. Please check the file path.".to_string()
            }
            MatchError::Config { .. } => {
                "Could not read the configuration file.".to_string()
            }
        }
    }
}
