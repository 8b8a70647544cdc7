//! CAM16 color appearance model
//!
//! CAM16 describes a color by how it appears rather than by the light that
//! produces it: hue angle, chroma (colorfulness relative to white),
//! lightness J, brightness Q, colorfulness M and saturation s. The
//! uniform-space coordinates J\*, a\*, b\* (CAM16-UCS) give a perceptual
//! distance metric.
//!
//! # References
//!
//! Li et al., "Comprehensive color solutions: CAM16, CAT16, and CAM16-UCS",
//! Color Research & Application 42 (2017)

use std::f64::consts::PI;

use super::viewing_conditions::ViewingConditions;
use crate::color::linear::xyz_from_argb;
use crate::color::Argb;
use crate::math::signum;

/// CIE XYZ to the CAM16 cone-response space.
pub const XYZ_TO_CAM16RGB: [[f64; 3]; 3] = [
    [0.401288, 0.650173, -0.051461],
    [-0.250268, 1.204414, 0.045854],
    [-0.002079, 0.048952, 0.953127],
];

/// CAM16 cone-response space back to CIE XYZ.
pub const CAM16RGB_TO_XYZ: [[f64; 3]; 3] = [
    [1.8620678, -1.0112547, 0.14918678],
    [0.38752654, 0.62144744, -0.00897398],
    [-0.01584150, -0.03412294, 1.0499644],
];

/// CAM16 appearance correlates of a color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cam16 {
    /// Hue angle in degrees, `[0.0, 360.0)`
    pub hue: f64,
    /// Chroma: colorfulness relative to the brightness of white
    pub chroma: f64,
    /// Lightness J
    pub j: f64,
    /// Brightness Q
    pub q: f64,
    /// Colorfulness M
    pub m: f64,
    /// Saturation s
    pub s: f64,
    /// CAM16-UCS J\*
    pub jstar: f64,
    /// CAM16-UCS a\*
    pub astar: f64,
    /// CAM16-UCS b\*
    pub bstar: f64,
}

impl Cam16 {
    /// CAM16 of an ARGB color under the standard viewing conditions.
    pub fn from_argb(argb: Argb) -> Self {
        Self::from_argb_in_viewing_conditions(argb, ViewingConditions::standard())
    }

    /// CAM16 of an ARGB color under the given viewing conditions.
    pub fn from_argb_in_viewing_conditions(argb: Argb, vc: &ViewingConditions) -> Self {
        let xyz = xyz_from_argb(argb);
        Self::from_xyz_in_viewing_conditions(xyz[0], xyz[1], xyz[2], vc)
    }

    /// CAM16 of a CIE XYZ color (Y = 0..100) under the given viewing conditions.
    pub fn from_xyz_in_viewing_conditions(x: f64, y: f64, z: f64, vc: &ViewingConditions) -> Self {
        // Transform XYZ to 'cone'/'rgb' responses
        let r_c = 0.401288 * x + 0.650173 * y - 0.051461 * z;
        let g_c = -0.250268 * x + 1.204414 * y + 0.045854 * z;
        let b_c = -0.002079 * x + 0.048952 * y + 0.953127 * z;

        // Discount illuminant
        let r_d = vc.rgb_d[0] * r_c;
        let g_d = vc.rgb_d[1] * g_c;
        let b_d = vc.rgb_d[2] * b_c;

        // Chromatic adaptation
        let r_af = (vc.fl * r_d.abs() / 100.0).powf(0.42);
        let g_af = (vc.fl * g_d.abs() / 100.0).powf(0.42);
        let b_af = (vc.fl * b_d.abs() / 100.0).powf(0.42);
        let r_a = signum(r_d) * 400.0 * r_af / (r_af + 27.13);
        let g_a = signum(g_d) * 400.0 * g_af / (g_af + 27.13);
        let b_a = signum(b_d) * 400.0 * b_af / (b_af + 27.13);

        // Redness-greenness
        let a = (11.0 * r_a + -12.0 * g_a + b_a) / 11.0;
        // Yellowness-blueness
        let b = (r_a + g_a - 2.0 * b_a) / 9.0;

        // Auxiliary components
        let u = (20.0 * r_a + 20.0 * g_a + 21.0 * b_a) / 20.0;
        let p2 = (40.0 * r_a + 20.0 * g_a + b_a) / 20.0;

        // Hue
        let atan_degrees = b.atan2(a).to_degrees();
        let hue = if atan_degrees < 0.0 {
            atan_degrees + 360.0
        } else if atan_degrees >= 360.0 {
            atan_degrees - 360.0
        } else {
            atan_degrees
        };
        let hue_radians = hue * PI / 180.0;

        // Achromatic response to color
        let ac = p2 * vc.nbb;

        // CAM16 lightness and brightness
        let j = 100.0 * (ac / vc.aw).powf(vc.c * vc.z);
        let q = (4.0 / vc.c) * (j / 100.0).sqrt() * (vc.aw + 4.0) * vc.fl_root;

        // CAM16 chroma, colorfulness, and saturation.
        let hue_prime = if hue < 20.14 { hue + 360.0 } else { hue };
        let e_hue = 0.25 * ((hue_prime * PI / 180.0 + 2.0).cos() + 3.8);
        let p1 = 50000.0 / 13.0 * e_hue * vc.nc * vc.ncb;
        let t = p1 * a.hypot(b) / (u + 0.305);
        let alpha = t.powf(0.9) * (1.64 - 0.29f64.powf(vc.n)).powf(0.73);
        let chroma = alpha * (j / 100.0).sqrt();
        let m = chroma * vc.fl_root;
        let s = 50.0 * ((alpha * vc.c) / (vc.aw + 4.0)).sqrt();

        // CAM16-UCS components
        let jstar = (1.0 + 100.0 * 0.007) * j / (1.0 + 0.007 * j);
        let mstar = 1.0 / 0.0228 * (1.0 + 0.0228 * m).ln();
        let astar = mstar * hue_radians.cos();
        let bstar = mstar * hue_radians.sin();

        Self {
            hue,
            chroma,
            j,
            q,
            m,
            s,
            jstar,
            astar,
            bstar,
        }
    }

    /// Perceptual distance in CAM16-UCS.
    pub fn distance(&self, other: &Cam16) -> f64 {
        let d_j = self.jstar - other.jstar;
        let d_a = self.astar - other.astar;
        let d_b = self.bstar - other.bstar;
        let d_e_prime = (d_j * d_j + d_a * d_a + d_b * d_b).sqrt();
        1.41 * d_e_prime.powf(0.63)
    }
}

impl From<Argb> for Cam16 {
    fn from(argb: Argb) -> Self {
        Self::from_argb(argb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrices_are_inverse() {
        for i in 0..3 {
            for j in 0..3 {
                let mut sum = 0.0;
                for k in 0..3 {
                    sum += XYZ_TO_CAM16RGB[i][k] * CAM16RGB_TO_XYZ[k][j];
                }
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((sum - expected).abs() < 1e-5, "[{}][{}] = {}", i, j, sum);
            }
        }
    }

    #[test]
    fn test_red() {
        let cam = Cam16::from_argb(Argb(0xffff0000));
        assert!((cam.hue - 27.408).abs() < 0.01, "hue {}", cam.hue);
        assert!((cam.chroma - 113.357).abs() < 0.01, "chroma {}", cam.chroma);
        assert!((cam.j - 46.445).abs() < 0.01, "j {}", cam.j);
    }

    #[test]
    fn test_blue() {
        let cam = Cam16::from_argb(Argb(0xff0000ff));
        assert!((cam.hue - 282.788).abs() < 0.01, "hue {}", cam.hue);
        assert!((cam.chroma - 87.230).abs() < 0.01, "chroma {}", cam.chroma);
    }

    #[test]
    fn test_white_is_achromatic() {
        let cam = Cam16::from_argb(Argb(0xffffffff));
        assert!((cam.j - 100.0).abs() < 0.01, "j {}", cam.j);
        assert!(cam.chroma < 3.0, "chroma {}", cam.chroma);
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let cam = Cam16::from_argb(Argb(0xff4285f4));
        assert_eq!(cam.distance(&cam), 0.0);
        let other = Cam16::from_argb(Argb(0xffea4335));
        assert!(cam.distance(&other) > 0.0);
    }
}
