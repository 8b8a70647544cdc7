//! Linear RGB, XYZ and L\* conversion functions
//!
//! Linear RGB components here use a 0..100 scale so that Y comes out as
//! relative luminance on the same 0..100 scale as L\*.

use super::argb::Argb;
use crate::math::matrix_multiply;

/// sRGB (linear, 0..100) to CIE XYZ.
pub const SRGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.41233895, 0.35762064, 0.18051042],
    [0.2126, 0.7152, 0.0722],
    [0.01932141, 0.11916382, 0.95034478],
];

/// CIE XYZ to sRGB (linear, 0..100).
pub const XYZ_TO_SRGB: [[f64; 3]; 3] = [
    [
        3.2413774792388685,
        -1.5376652402851851,
        -0.49885366846268053,
    ],
    [-0.9691452513005321, 1.8758853451067872, 0.04156585616912061],
    [0.05562093689691305, -0.20395524564742123, 1.0571799111220335],
];

/// Standard D65 white point, Y normalized to 100.
pub const WHITE_POINT_D65: [f64; 3] = [95.047, 100.0, 108.883];

/// Linearize an 8-bit sRGB component into linear light on a 0..100 scale.
#[inline]
pub fn linearized(component: u8) -> f64 {
    let normalized = f64::from(component) / 255.0;
    if normalized <= 0.040449936 {
        normalized / 12.92 * 100.0
    } else {
        ((normalized + 0.055) / 1.055).powf(2.4) * 100.0
    }
}

/// Gamma-encode a linear component (0..100) into a rounded 8-bit value.
///
/// Out-of-range inputs are clamped.
#[inline]
pub fn delinearized(component: f64) -> u8 {
    let normalized = component / 100.0;
    let delinearized = if normalized <= 0.0031308 {
        normalized * 12.92
    } else {
        1.055 * normalized.powf(1.0 / 2.4) - 0.055
    };
    (delinearized * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Gamma-encode a linear component (0..100) without rounding, on a 0..255 scale.
#[inline]
pub fn true_delinearized(component: f64) -> f64 {
    let normalized = component / 100.0;
    let delinearized = if normalized <= 0.0031308 {
        normalized * 12.92
    } else {
        1.055 * normalized.powf(1.0 / 2.4) - 0.055
    };
    delinearized * 255.0
}

/// Linear RGB (0..100) of an ARGB color.
#[inline]
pub fn linrgb_from_argb(argb: Argb) -> [f64; 3] {
    [
        linearized(argb.red()),
        linearized(argb.green()),
        linearized(argb.blue()),
    ]
}

/// Opaque ARGB color from linear RGB (0..100).
#[inline]
pub fn argb_from_linrgb(linrgb: [f64; 3]) -> Argb {
    Argb::from_rgb(
        delinearized(linrgb[0]),
        delinearized(linrgb[1]),
        delinearized(linrgb[2]),
    )
}

/// CIE XYZ of an ARGB color.
pub fn xyz_from_argb(argb: Argb) -> [f64; 3] {
    matrix_multiply(linrgb_from_argb(argb), &SRGB_TO_XYZ)
}

/// Opaque ARGB color from CIE XYZ.
pub fn argb_from_xyz(x: f64, y: f64, z: f64) -> Argb {
    argb_from_linrgb(matrix_multiply([x, y, z], &XYZ_TO_SRGB))
}

/// Relative luminance Y (0..100) for an L\* value.
pub fn y_from_lstar(lstar: f64) -> f64 {
    100.0 * lab_invf((lstar + 16.0) / 116.0)
}

/// L\* for a relative luminance Y (0..100).
pub fn lstar_from_y(y: f64) -> f64 {
    lab_f(y / 100.0) * 116.0 - 16.0
}

/// L\* of an ARGB color.
pub fn lstar_from_argb(argb: Argb) -> f64 {
    let y = xyz_from_argb(argb)[1];
    116.0 * lab_f(y / 100.0) - 16.0
}

/// The achromatic ARGB color with the given L\*.
pub fn argb_from_lstar(lstar: f64) -> Argb {
    let component = delinearized(y_from_lstar(lstar));
    Argb::from_rgb(component, component, component)
}

pub(crate) fn lab_f(t: f64) -> f64 {
    let e = 216.0 / 24389.0;
    let kappa = 24389.0 / 27.0;
    if t > e {
        t.cbrt()
    } else {
        (kappa * t + 16.0) / 116.0
    }
}

pub(crate) fn lab_invf(ft: f64) -> f64 {
    let e = 216.0 / 24389.0;
    let kappa = 24389.0 / 27.0;
    let ft3 = ft * ft * ft;
    if ft3 > e {
        ft3
    } else {
        (116.0 * ft - 16.0) / kappa
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-6;

    #[test]
    fn test_linearized_endpoints() {
        assert_eq!(linearized(0), 0.0);
        assert!((linearized(255) - 100.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_delinearize_inverts_linearize() {
        for component in 0..=255u8 {
            assert_eq!(delinearized(linearized(component)), component);
        }
    }

    #[test]
    fn test_delinearized_clamps() {
        assert_eq!(delinearized(-5.0), 0);
        assert_eq!(delinearized(150.0), 255);
    }

    #[test]
    fn test_lstar_y_round_trip() {
        for lstar in [0.0, 0.5, 8.0, 18.4, 50.0, 87.7, 100.0] {
            let y = y_from_lstar(lstar);
            assert!((lstar_from_y(y) - lstar).abs() < TOLERANCE);
        }
    }

    #[test]
    fn test_white_xyz_is_white_point() {
        let xyz = xyz_from_argb(Argb::from_rgb(255, 255, 255));
        for i in 0..3 {
            assert!(
                (xyz[i] - WHITE_POINT_D65[i]).abs() < 0.01,
                "axis {}: {} vs {}",
                i,
                xyz[i],
                WHITE_POINT_D65[i]
            );
        }
    }

    #[test]
    fn test_xyz_round_trip() {
        for argb in [0xff000000u32, 0xffffffff, 0xff4285f4, 0xffea4335, 0xff34a853] {
            let argb = Argb(argb);
            let xyz = xyz_from_argb(argb);
            assert_eq!(argb_from_xyz(xyz[0], xyz[1], xyz[2]), argb);
        }
    }

    #[test]
    fn test_argb_from_lstar_is_gray() {
        let gray = argb_from_lstar(50.0);
        assert_eq!(gray.red(), gray.green());
        assert_eq!(gray.green(), gray.blue());
        assert!((lstar_from_argb(gray) - 50.0).abs() < 0.5);
    }
}
