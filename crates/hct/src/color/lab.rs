//! CIE L\*a\*b\* color space
//!
//! L\*a\*b\* is the perceptual space the warm/cool temperature metric is
//! defined in. Its lightness axis L\* is also HCT's tone.
//!
//! # References
//!
//! CIE 15:2004, Colorimetry, 3rd edition, section 8.2.1

use super::argb::Argb;
use super::linear::{argb_from_xyz, lab_f, lab_invf, xyz_from_argb, WHITE_POINT_D65};

/// A color in CIE L\*a\*b\* color space under the D65 white point.
///
/// # Components
///
/// - `l`: Lightness (0.0 = black, 100.0 = white)
/// - `a`: Green-red axis (negative = green, positive = red)
/// - `b`: Blue-yellow axis (negative = blue, positive = yellow)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    /// Lightness: 0.0 (black) to 100.0 (white)
    pub l: f64,
    /// Green-red axis, roughly -128.0 to 127.0 for sRGB colors
    pub a: f64,
    /// Blue-yellow axis, roughly -128.0 to 127.0 for sRGB colors
    pub b: f64,
}

impl Lab {
    /// Create a new Lab color.
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Polar chroma: `sqrt(a² + b²)`.
    #[inline]
    pub fn chroma(self) -> f64 {
        self.a.hypot(self.b)
    }

    /// Polar hue angle in degrees, `[0.0, 360.0)`.
    #[inline]
    pub fn hue(self) -> f64 {
        crate::math::sanitize_degrees(self.b.atan2(self.a).to_degrees())
    }

    /// Convert back to the nearest opaque ARGB color.
    pub fn to_argb(self) -> Argb {
        let fy = (self.l + 16.0) / 116.0;
        let fx = self.a / 500.0 + fy;
        let fz = fy - self.b / 200.0;
        let x = lab_invf(fx) * WHITE_POINT_D65[0];
        let y = lab_invf(fy) * WHITE_POINT_D65[1];
        let z = lab_invf(fz) * WHITE_POINT_D65[2];
        argb_from_xyz(x, y, z)
    }
}

impl From<Argb> for Lab {
    fn from(argb: Argb) -> Self {
        let xyz = xyz_from_argb(argb);
        let fx = lab_f(xyz[0] / WHITE_POINT_D65[0]);
        let fy = lab_f(xyz[1] / WHITE_POINT_D65[1]);
        let fz = lab_f(xyz[2] / WHITE_POINT_D65[2]);
        Self {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tolerance against the palette crate, whose sRGB matrix differs in
    /// the last few digits
    const PALETTE_TOLERANCE: f64 = 0.1;

    #[test]
    fn test_white_and_black() {
        let white = Lab::from(Argb::from_rgb(255, 255, 255));
        assert!((white.l - 100.0).abs() < 1e-3);
        assert!(white.a.abs() < 1e-2);
        assert!(white.b.abs() < 1e-2);

        let black = Lab::from(Argb::from_rgb(0, 0, 0));
        assert_eq!(black.l, 0.0);
        assert_eq!(black.chroma(), 0.0);
    }

    #[test]
    fn test_round_trip_through_argb() {
        for argb in [0xff4285f4u32, 0xffea4335, 0xfffbbc05, 0xff34a853, 0xff808080] {
            let argb = Argb(argb);
            assert_eq!(Lab::from(argb).to_argb(), argb);
        }
    }

    #[test]
    fn test_polar_hue_of_axes() {
        assert!((Lab::new(50.0, 10.0, 0.0).hue() - 0.0).abs() < 1e-9);
        assert!((Lab::new(50.0, 0.0, 10.0).hue() - 90.0).abs() < 1e-9);
        assert!((Lab::new(50.0, 0.0, -10.0).hue() - 270.0).abs() < 1e-9);
        assert!((Lab::new(50.0, 3.0, 4.0).chroma() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_matches_palette_crate() {
        use palette::{IntoColor, Lab as PaletteLab, Srgb};

        let test_colors = [
            (255u8, 0u8, 0u8), // Red
            (0, 255, 0),       // Green
            (0, 0, 255),       // Blue
            (128, 128, 128),   // Mid gray
            (181, 140, 255),   // Lavender
            (255, 136, 0),     // Orange
        ];

        for (r, g, b) in test_colors {
            let ours = Lab::from(Argb::from_rgb(r, g, b));

            let srgb: Srgb<f64> = Srgb::new(r, g, b).into_format();
            let theirs: PaletteLab<palette::white_point::D65, f64> =
                srgb.into_linear().into_color();

            assert!(
                (ours.l - theirs.l).abs() < PALETTE_TOLERANCE,
                "L mismatch for ({}, {}, {}): ours={}, palette={}",
                r,
                g,
                b,
                ours.l,
                theirs.l
            );
            assert!(
                (ours.a - theirs.a).abs() < PALETTE_TOLERANCE * 5.0,
                "a mismatch for ({}, {}, {}): ours={}, palette={}",
                r,
                g,
                b,
                ours.a,
                theirs.a
            );
            assert!(
                (ours.b - theirs.b).abs() < PALETTE_TOLERANCE * 5.0,
                "b mismatch for ({}, {}, {}): ours={}, palette={}",
                r,
                g,
                b,
                ours.b,
                theirs.b
            );
        }
    }
}
