//! # Munsell Match
//!
//! Names measured colors by their closest entry in a reference palette of
//! Munsell codes.
//!
//! This library provides:
//! - sRGB → CIE Lab conversion under the D65 white point
//! - CIE76 nearest-match search with first-entry-wins tie-breaking
//! - Hex ↔ RGB codec
//! - Reverse lookup from a code to its reference RGB
//!
//! ## Example
//!
//! ```rust
//! use munsell_match::{ColorIdentifier, ReferencePalette, Rgb};
//!
//! let palette = ReferencePalette::new([
//!     ("N 9.5/", Rgb::new(243, 243, 242)),
//!     ("5R 4/14", Rgb::new(186, 34, 51)),
//! ]);
//! let identifier = ColorIdentifier::new(palette);
//!
//! let rgb = identifier.decode_hex("#c0283a")?;
//! assert_eq!(identifier.match_nearest_code(rgb)?, "5R 4/14");
//! assert_eq!(identifier.lookup_rgb_by_code("5R 4/14"), Some(Rgb::new(186, 34, 51)));
//! # Ok::<(), munsell_match::MatchError>(())
//! ```

use std::sync::Arc;

pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod matching;
pub mod reference;

pub use color::{delta_e, hex_to_rgb, rgb_to_hex, rgb_to_lab, ColorConverter, LabColor, Rgb};
pub use config::{IdentifierConfig, PaletteFormat, PaletteSourceConfig};
pub use error::{Channel, MatchError, Result};
pub use matching::{find_closest, find_closest_match, ColorMatch, NearestMatcher, SearchStrategy};
pub use reference::{load_palette, DelimitedFormat, PaletteEntry, ReferencePalette};

/// Consumer-facing entry point over a palette loaded once
///
/// Cheap to clone and safe to share across threads; the palette is never
/// mutated after construction.
#[derive(Debug, Clone)]
pub struct ColorIdentifier {
    matcher: NearestMatcher,
}

impl ColorIdentifier {
    /// Create an identifier with the default search strategy
    pub fn new(palette: impl Into<Arc<ReferencePalette>>) -> Self {
        Self {
            matcher: NearestMatcher::new(palette),
        }
    }

    /// Create an identifier with an explicit search strategy
    pub fn with_strategy(palette: impl Into<Arc<ReferencePalette>>, strategy: SearchStrategy) -> Self {
        Self {
            matcher: NearestMatcher::with_strategy(palette, strategy),
        }
    }

    /// Load the configured palette and build an identifier over it
    ///
    /// # Errors
    ///
    /// Returns any error from [`load_palette`].
    pub fn from_config(config: &IdentifierConfig) -> Result<Self> {
        let palette = load_palette(&config.palette)?;
        Ok(Self::with_strategy(palette, config.search))
    }

    /// Palette this identifier matches against
    pub fn palette(&self) -> &ReferencePalette {
        self.matcher.palette()
    }

    /// CIE Lab coordinates of `rgb`
    pub fn convert_to_lab(&self, rgb: Rgb) -> LabColor {
        rgb_to_lab(rgb)
    }

    /// Code of the palette entry closest to `rgb`
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::EmptyPalette`] if no entries are loaded.
    pub fn match_nearest_code(&self, rgb: Rgb) -> Result<&str> {
        self.matcher.find_closest(rgb)
    }

    /// Palette entry closest to `rgb`, with its ΔE76 distance
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::EmptyPalette`] if no entries are loaded.
    pub fn match_nearest(&self, rgb: Rgb) -> Result<ColorMatch<'_>> {
        self.matcher.find_closest_match(rgb)
    }

    /// Lowercase `#rrggbb` form of `rgb`
    pub fn encode_hex(&self, rgb: Rgb) -> String {
        rgb_to_hex(rgb)
    }

    /// Parse `[#]RRGGBB`
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::InvalidHex`] for malformed input.
    pub fn decode_hex(&self, hex: &str) -> Result<Rgb> {
        hex_to_rgb(hex)
    }

    /// Reference RGB of the first entry named `code`
    pub fn lookup_rgb_by_code(&self, code: &str) -> Option<Rgb> {
        self.palette().rgb_for_code(code)
    }
}
