//! Color values, conversion and encoding
//!
//! This module holds the measured-color side of the pipeline: the bounded
//! [`Rgb`] triplet, the sRGB → CIE Lab conversion with CIE76 distance, and
//! the hex codec that feeds both.

pub mod conversion;
pub mod hex;
pub mod rgb;

pub use conversion::{delta_e, rgb_to_lab, ColorConverter, LabColor};
pub use hex::{hex_to_rgb, rgb_to_hex};
pub use rgb::Rgb;
