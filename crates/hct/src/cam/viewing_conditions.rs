//! Viewing conditions for the CAM16 appearance model
//!
//! CAM16 predicts how a color looks under a given environment: the white
//! point, how bright the adapting field is, the lightness of the background
//! and the surround. The intermediate values derived from those inputs are
//! computed once here and reused by every conversion.

use std::f64::consts::PI;
use std::sync::OnceLock;

use super::cam16::XYZ_TO_CAM16RGB;
use crate::color::linear::{y_from_lstar, WHITE_POINT_D65};
use crate::math::lerp;

/// Precomputed CAM16 viewing environment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewingConditions {
    pub n: f64,
    pub aw: f64,
    pub nbb: f64,
    pub ncb: f64,
    pub c: f64,
    pub nc: f64,
    pub rgb_d: [f64; 3],
    pub fl: f64,
    pub fl_root: f64,
    pub z: f64,
}

impl ViewingConditions {
    /// Build viewing conditions from physical parameters.
    ///
    /// # Arguments
    /// * `white_point` - XYZ of the adapted white, Y = 100
    /// * `adapting_luminance` - luminance of the adapting field in cd/m²
    /// * `background_lstar` - L\* of the background (clamped to at least 0.1)
    /// * `surround` - 0.0 (dark) through 1.0 (dim) to 2.0 (average)
    /// * `discounting_illuminant` - whether the eye fully adapts to the illuminant
    pub fn make(
        white_point: [f64; 3],
        adapting_luminance: f64,
        background_lstar: f64,
        surround: f64,
        discounting_illuminant: bool,
    ) -> Self {
        let background_lstar = background_lstar.max(0.1);
        let matrix = XYZ_TO_CAM16RGB;
        let xyz = white_point;
        let r_w = xyz[0] * matrix[0][0] + xyz[1] * matrix[0][1] + xyz[2] * matrix[0][2];
        let g_w = xyz[0] * matrix[1][0] + xyz[1] * matrix[1][1] + xyz[2] * matrix[1][2];
        let b_w = xyz[0] * matrix[2][0] + xyz[1] * matrix[2][1] + xyz[2] * matrix[2][2];

        let f = 0.8 + surround / 10.0;
        let c = if f >= 0.9 {
            lerp(0.59, 0.69, (f - 0.9) * 10.0)
        } else {
            lerp(0.525, 0.59, (f - 0.8) * 10.0)
        };
        let d = if discounting_illuminant {
            1.0
        } else {
            f * (1.0 - (1.0 / 3.6) * ((-adapting_luminance - 42.0) / 92.0).exp())
        };
        let d = d.clamp(0.0, 1.0);
        let nc = f;
        let rgb_d = [
            d * (100.0 / r_w) + 1.0 - d,
            d * (100.0 / g_w) + 1.0 - d,
            d * (100.0 / b_w) + 1.0 - d,
        ];

        let k = 1.0 / (5.0 * adapting_luminance + 1.0);
        let k4 = k * k * k * k;
        let k4f = 1.0 - k4;
        let fl = k4 * adapting_luminance + 0.1 * k4f * k4f * (5.0 * adapting_luminance).cbrt();
        let n = y_from_lstar(background_lstar) / white_point[1];
        let z = 1.48 + n.sqrt();
        let nbb = 0.725 / n.powf(0.2);
        let ncb = nbb;

        let rgb_a_factors = [
            (fl * rgb_d[0] * r_w / 100.0).powf(0.42),
            (fl * rgb_d[1] * g_w / 100.0).powf(0.42),
            (fl * rgb_d[2] * b_w / 100.0).powf(0.42),
        ];
        let rgb_a = [
            400.0 * rgb_a_factors[0] / (rgb_a_factors[0] + 27.13),
            400.0 * rgb_a_factors[1] / (rgb_a_factors[1] + 27.13),
            400.0 * rgb_a_factors[2] / (rgb_a_factors[2] + 27.13),
        ];
        let aw = (2.0 * rgb_a[0] + rgb_a[1] + 0.05 * rgb_a[2]) * nbb;

        Self {
            n,
            aw,
            nbb,
            ncb,
            c,
            nc,
            rgb_d,
            fl,
            fl_root: fl.powf(0.25),
            z,
        }
    }

    /// sRGB-like viewing conditions: D65 white, a dim-to-average 200 lux
    /// surround, and a mid-gray (L\* 50) background.
    pub fn standard() -> &'static ViewingConditions {
        static STANDARD: OnceLock<ViewingConditions> = OnceLock::new();
        STANDARD.get_or_init(|| {
            Self::make(
                WHITE_POINT_D65,
                200.0 / PI * y_from_lstar(50.0) / 100.0,
                50.0,
                2.0,
                false,
            )
        })
    }
}

impl Default for ViewingConditions {
    fn default() -> Self {
        *Self::standard()
    }
}
