//! Angular and numeric helpers shared by the color models.

/// Normalize an integer angle into `0..360`.
///
/// # Example
///
/// ```
/// use hct::math::sanitize_degrees_int;
///
/// assert_eq!(sanitize_degrees_int(360), 0);
/// assert_eq!(sanitize_degrees_int(-1), 359);
/// assert_eq!(sanitize_degrees_int(725), 5);
/// ```
#[inline]
pub fn sanitize_degrees_int(degrees: i32) -> i32 {
    degrees.rem_euclid(360)
}

/// Normalize a real angle into `[0.0, 360.0)`.
///
/// Tiny negative inputs such as `-1e-17` would round up to exactly `360.0`
/// after the remainder; those are folded back to `0.0` so the result never
/// leaves the half-open range.
///
/// # Example
///
/// ```
/// use hct::math::sanitize_degrees;
///
/// assert_eq!(sanitize_degrees(360.0), 0.0);
/// assert_eq!(sanitize_degrees(-90.0), 270.0);
/// assert_eq!(sanitize_degrees(-1e-17), 0.0);
/// ```
#[inline]
pub fn sanitize_degrees(degrees: f64) -> f64 {
    let sanitized = degrees.rem_euclid(360.0);
    if sanitized >= 360.0 {
        0.0
    } else {
        sanitized
    }
}

/// Sign of a number: -1.0, 0.0 or 1.0.
///
/// Unlike [`f64::signum`], zero maps to zero.
#[inline]
pub fn signum(num: f64) -> f64 {
    if num < 0.0 {
        -1.0
    } else if num == 0.0 {
        0.0
    } else {
        1.0
    }
}

/// Linear interpolation between `start` and `stop`.
#[inline]
pub fn lerp(start: f64, stop: f64, amount: f64) -> f64 {
    (1.0 - amount) * start + amount * stop
}

/// Shortest distance between two angles, in degrees (`0.0..=180.0`).
#[inline]
pub fn difference_degrees(a: f64, b: f64) -> f64 {
    180.0 - ((a - b).abs() - 180.0).abs()
}

/// Direction of the shortest rotation from `from` to `to`.
///
/// Returns 1.0 for counter-clockwise (increasing hue), -1.0 otherwise.
#[inline]
pub fn rotation_direction(from: f64, to: f64) -> f64 {
    let increasing_difference = sanitize_degrees(to - from);
    if increasing_difference <= 180.0 {
        1.0
    } else {
        -1.0
    }
}

/// Multiply a row vector by a 3x3 matrix, one output per matrix row.
#[inline]
pub fn matrix_multiply(row: [f64; 3], matrix: &[[f64; 3]; 3]) -> [f64; 3] {
    let mut out = [0.0; 3];
    for i in 0..3 {
        out[i] = row[0] * matrix[i][0] + row[1] * matrix[i][1] + row[2] * matrix[i][2];
    }
    out
}
