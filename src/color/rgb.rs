//! Bounded 8-bit sRGB triplet

use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::error::{Channel, MatchError, Result};

/// Lightness threshold on R+G+B above which dark text reads better
const DARK_TEXT_CHANNEL_SUM: u16 = 384;

/// Gamma-encoded sRGB color with one byte per channel
///
/// Channels are `u8`, so a constructed `Rgb` is always in range. Wider
/// integers go through [`Rgb::try_from_channels`], which rejects rather
/// than clamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a color from in-range channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from arbitrary integers, rejecting values outside [0, 255]
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::ChannelOutOfRange`] naming the first offending channel.
    pub fn try_from_channels(r: i64, g: i64, b: i64) -> Result<Self> {
        Ok(Self {
            r: channel(Channel::Red, r)?,
            g: channel(Channel::Green, g)?,
            b: channel(Channel::Blue, b)?,
        })
    }

    /// Channels in (R, G, B) order
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Whether black label text is more legible than white on this color
    pub fn prefers_dark_text(self) -> bool {
        u16::from(self.r) + u16::from(self.g) + u16::from(self.b) > DARK_TEXT_CHANNEL_SUM
    }
}

fn channel(which: Channel, value: i64) -> Result<u8> {
    u8::try_from(value).map_err(|_| MatchError::ChannelOutOfRange {
        channel: which,
        value,
    })
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl TryFrom<[i64; 3]> for Rgb {
    type Error = MatchError;

    fn try_from([r, g, b]: [i64; 3]) -> Result<Self> {
        Self::try_from_channels(r, g, b)
    }
}

impl From<Srgb<u8>> for Rgb {
    fn from(color: Srgb<u8>) -> Self {
        Self::new(color.red, color.green, color.blue)
    }
}

impl From<Rgb> for Srgb<u8> {
    fn from(color: Rgb) -> Self {
        Srgb::new(color.r, color.g, color.b)
    }
}
