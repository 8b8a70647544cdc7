//! Warm/cool metric and hue-arc helpers.

use std::f64::consts::PI;

use hct::math::sanitize_degrees;
use hct::Hct;

/// Raw warm/cool value of a color.
///
/// Implements Ou, Woodcock and Wright's temperature formula in L\*a\*b\*
/// polar coordinates:
///
/// ```text
/// temperature = -0.5 + 0.02 * chroma^1.07 * cos(hue - 50°)
/// ```
///
/// Values below 0 are cool, above 0 warm. Grays sit at -0.5. The magnitude
/// grows with L\*a\*b\* chroma, so for sRGB colors the range is roughly
/// -9.66 to 8.61.
///
/// # References
///
/// - Li-Chen Ou, "Color emotion and color harmony", Handbook of Color
///   Psychology (2015), chapter 19
/// - Josef Albers, Interaction of Color, chapters 19 and 21
///
/// # Example
///
/// ```
/// use chromatemp::temperature::raw_temperature;
/// use hct::{Argb, Hct};
///
/// let orange = Hct::from_argb(Argb(0xffffa500));
/// let teal = Hct::from_argb(Argb(0xff00ffff));
/// assert!(raw_temperature(&orange) > 0.0);
/// assert!(raw_temperature(&teal) < 0.0);
/// ```
pub fn raw_temperature(color: &Hct) -> f64 {
    let lab = color.to_lab();
    let hue = sanitize_degrees(lab.b.atan2(lab.a) * 180.0 / PI);
    let chroma = (lab.a * lab.a + lab.b * lab.b).sqrt();
    -0.5 + 0.02 * chroma.powf(1.07) * (sanitize_degrees(hue - 50.0) * PI / 180.0).cos()
}

/// Whether `angle` lies on the clockwise arc from `a` to `b`, inclusive.
///
/// When `a >= b` the arc wraps through 0°.
///
/// # Example
///
/// ```
/// use chromatemp::temperature::is_between;
///
/// assert!(is_between(90.0, 45.0, 180.0));
/// assert!(is_between(10.0, 300.0, 60.0));
/// assert!(!is_between(200.0, 300.0, 60.0));
/// ```
pub fn is_between(angle: f64, a: f64, b: f64) -> bool {
    if a < b {
        a <= angle && angle <= b
    } else {
        a <= angle || angle <= b
    }
}
