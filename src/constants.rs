//! Colorimetric constants for the sRGB → CIE Lab pipeline
//!
//! All values are fixed by the sRGB (IEC 61966-2-1) and CIE 15 definitions
//! and must not be tuned: matching results are only reproducible when every
//! breakpoint and coefficient is exactly the one below.

/// D65 Standard Illuminant Reference
///
/// CIE Standard Illuminant D65 represents average daylight with a correlated
/// color temperature of 6504K. This is the reference white for sRGB.
pub mod d65 {
    /// D65 white point in CIE XYZ (Xn, Yn, Zn)
    pub const WHITE_POINT_XYZ: [f64; 3] = [0.95047, 1.00000, 1.08883];
}

/// Re-export D65 white point at top level for convenience
pub const D65_WHITE_POINT_XYZ: [f64; 3] = d65::WHITE_POINT_XYZ;

/// sRGB transfer function (gamma decoding)
pub mod srgb {
    /// Normalized channel value at or below which the curve is linear
    pub const LINEAR_BREAKPOINT: f64 = 0.04045;

    /// Slope of the linear segment
    pub const LINEAR_SLOPE: f64 = 12.92;

    /// Offset of the power segment
    pub const GAMMA_OFFSET: f64 = 0.055;

    /// Divisor of the power segment (1 + offset)
    pub const GAMMA_SCALE: f64 = 1.055;

    /// Exponent of the power segment
    pub const GAMMA_EXPONENT: f64 = 2.4;

    /// Largest 8-bit channel value, used for normalization
    pub const CHANNEL_MAX: f64 = 255.0;

    /// Linear sRGB → CIE XYZ matrix for the D65 white point (row-major)
    pub const TO_XYZ: [[f64; 3]; 3] = [
        [0.4124564, 0.3575761, 0.1804375],
        [0.2126729, 0.7151522, 0.0721750],
        [0.0193339, 0.1191920, 0.9503041],
    ];
}

/// CIE Lab nonlinearity
pub mod lab {
    /// Below this relative luminance the cube root is replaced by a line
    pub const EPSILON: f64 = 0.008856;

    /// Slope of the linear segment (before the 116 scale)
    pub const KAPPA: f64 = 903.3;
}
