//! Color space conversion utilities
//!
//! Provides the sRGB → CIE Lab transform under the D65 white point and the
//! CIE76 color difference used for nearest-match search:
//! - sRGB gamma decoding to linear light
//! - Linear RGB to CIE XYZ (D65 matrix)
//! - XYZ to Lab with the linear toe near black
//!
//! Everything is computed in `f64` with the fixed constants from
//! [`crate::constants`], so identical input yields bit-identical output.

use palette::Lab;
use serde::Serialize;

use crate::color::Rgb;
use crate::constants::{lab, srgb, D65_WHITE_POINT_XYZ};

/// CIE Lab coordinates relative to D65
///
/// Only produced by [`rgb_to_lab`]; fields are read through accessors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LabColor {
    l: f64,
    a: f64,
    b: f64,
}

impl LabColor {
    /// Lightness, nominally [0, 100]
    pub fn l(&self) -> f64 {
        self.l
    }

    /// Green–red axis
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Blue–yellow axis
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Coordinates as an `[L, a, b]` array
    pub fn to_array(&self) -> [f64; 3] {
        [self.l, self.a, self.b]
    }
}

impl From<LabColor> for Lab {
    fn from(color: LabColor) -> Self {
        Lab::new(color.l as f32, color.a as f32, color.b as f32)
    }
}

/// Decode one normalized sRGB channel to linear light
fn decode_gamma(c: f64) -> f64 {
    if c <= srgb::LINEAR_BREAKPOINT {
        c / srgb::LINEAR_SLOPE
    } else {
        ((c + srgb::GAMMA_OFFSET) / srgb::GAMMA_SCALE).powf(srgb::GAMMA_EXPONENT)
    }
}

/// Lab companding function
fn lab_f(t: f64) -> f64 {
    if t > lab::EPSILON {
        t.cbrt()
    } else {
        (lab::KAPPA * t + 16.0) / 116.0
    }
}

/// Convert an 8-bit sRGB color to CIE Lab (D65)
pub fn rgb_to_lab(rgb: Rgb) -> LabColor {
    let [r, g, b] = rgb
        .channels()
        .map(|c| decode_gamma(f64::from(c) / srgb::CHANNEL_MAX));

    let [x, y, z] = srgb::TO_XYZ.map(|row| row[0] * r + row[1] * g + row[2] * b);
    let [xn, yn, zn] = D65_WHITE_POINT_XYZ;

    let fx = lab_f(x / xn);
    let fy = lab_f(y / yn);
    let fz = lab_f(z / zn);

    LabColor {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

/// Compute Delta E (color difference) between two Lab colors
///
/// Uses simple Euclidean distance (ΔE76).
pub fn delta_e(lab1: &LabColor, lab2: &LabColor) -> f64 {
    let dl = lab1.l - lab2.l;
    let da = lab1.a - lab2.a;
    let db = lab1.b - lab2.b;
    (dl * dl + da * da + db * db).sqrt()
}

/// Color converter bundling the conversion and difference functions
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorConverter;

impl ColorConverter {
    /// Create a new color converter with D65 as reference white
    pub fn new() -> Self {
        Self
    }

    /// Convert RGB to Lab color space
    ///
    /// # Arguments
    ///
    /// * `rgb` - 8-bit sRGB color
    ///
    /// # Returns
    ///
    /// Lab color in D65 illuminant
    pub fn rgb_to_lab(&self, rgb: Rgb) -> LabColor {
        rgb_to_lab(rgb)
    }

    /// Compute ΔE76 between two Lab colors
    pub fn delta_e(&self, lab1: &LabColor, lab2: &LabColor) -> f64 {
        delta_e(lab1, lab2)
    }

    /// Compute ΔE76 between two sRGB colors
    pub fn rgb_distance(&self, rgb1: Rgb, rgb2: Rgb) -> f64 {
        delta_e(&rgb_to_lab(rgb1), &rgb_to_lab(rgb2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_lab(lab: LabColor, expected: [f64; 3], tolerance: f64) {
        for (got, want) in lab.to_array().into_iter().zip(expected) {
            assert!(
                (got - want).abs() < tolerance,
                "Lab {:?} differs from {:?}",
                lab.to_array(),
                expected
            );
        }
    }

    #[test]
    fn test_rgb_to_lab_black() {
        assert_lab(rgb_to_lab(Rgb::new(0, 0, 0)), [0.0, 0.0, 0.0], 1e-3);
    }

    #[test]
    fn test_rgb_to_lab_white() {
        assert_lab(rgb_to_lab(Rgb::new(255, 255, 255)), [100.0, 0.0, 0.0], 1e-3);
    }

    #[test]
    fn test_rgb_to_lab_primaries() {
        // Reference values for the sRGB D65 matrix, rounded to 2 decimals
        assert_lab(rgb_to_lab(Rgb::new(255, 0, 0)), [53.24, 80.09, 67.20], 0.05);
        assert_lab(rgb_to_lab(Rgb::new(0, 255, 0)), [87.73, -86.18, 83.18], 0.05);
        assert_lab(rgb_to_lab(Rgb::new(0, 0, 255)), [32.30, 79.19, -107.86], 0.05);
    }

    #[test]
    fn test_neutral_greys_have_no_chroma() {
        let mut previous = -1.0;
        for v in (0..=255).step_by(15) {
            let lab = rgb_to_lab(Rgb::new(v, v, v));
            assert!(lab.a().abs() < 1e-2, "a* for grey {v}: {}", lab.a());
            assert!(lab.b().abs() < 1e-2, "b* for grey {v}: {}", lab.b());
            assert!(lab.l() > previous, "L* must grow with grey level");
            previous = lab.l();
        }
    }

    #[test]
    fn test_linear_toe_near_black() {
        // (1,1,1) stays on both linear segments: L = 903.3 * Y
        let lab = rgb_to_lab(Rgb::new(1, 1, 1));
        let y = (1.0 / 255.0) / 12.92 * (0.2126729 + 0.7151522 + 0.0721750);
        assert!((lab.l() - 903.3 * y).abs() < 1e-9);
    }

    #[test]
    fn test_conversion_is_deterministic() {
        let rgb = Rgb::new(91, 44, 200);
        assert_eq!(rgb_to_lab(rgb), rgb_to_lab(rgb));
    }

    #[test]
    fn test_delta_e_same_color() {
        let lab = rgb_to_lab(Rgb::new(40, 80, 120));
        assert_eq!(delta_e(&lab, &lab), 0.0);
    }

    #[test]
    fn test_delta_e_black_white() {
        let converter = ColorConverter::new();
        let delta = converter.rgb_distance(Rgb::new(0, 0, 0), Rgb::new(255, 255, 255));
        assert!((delta - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_delta_e_is_symmetric() {
        let converter = ColorConverter::new();
        let a = converter.rgb_to_lab(Rgb::new(200, 30, 30));
        let b = converter.rgb_to_lab(Rgb::new(20, 140, 90));
        assert_eq!(converter.delta_e(&a, &b), converter.delta_e(&b, &a));
    }

    #[test]
    fn test_into_palette_lab() {
        let lab: Lab = rgb_to_lab(Rgb::new(255, 255, 255)).into();
        assert!((lab.l - 100.0).abs() < 1e-3);
        assert!(lab.a.abs() < 1e-3);
    }
}
