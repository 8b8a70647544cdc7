//! HCT to ARGB solver
//!
//! Finds the sRGB color with a requested CAM16 hue and chroma and a
//! requested L\*. There is no closed form, so the solver works in two
//! stages:
//!
//! 1. **Newton on J.** L\* fixes the luminance Y. Assuming the requested
//!    chroma is reachable, iterate on CAM16 lightness J until the linear RGB
//!    produced by inverting CAM16 has luminance Y. This converges in a few
//!    rounds for in-gamut requests.
//! 2. **Bisection on the gamut boundary.** When stage 1 leaves the sRGB
//!    cube, the requested chroma is too high. At fixed Y the sRGB cube
//!    slices to a convex polygon; walk its vertices to find the edge that
//!    contains the requested hue, then bisect along that edge, one 8-bit
//!    critical plane at a time, to the most chromatic color of that hue.
//!
//! All matrices below are specialized to the standard viewing conditions.

use std::f64::consts::PI;

use super::viewing_conditions::ViewingConditions;
use crate::color::linear::{argb_from_linrgb, argb_from_lstar, true_delinearized, y_from_lstar};
use crate::color::{Argb, CRITICAL_PLANES};
use crate::math::{matrix_multiply, sanitize_degrees, signum};

/// Linear RGB (0..100) to discounted, FL-scaled cone responses.
pub const SCALED_DISCOUNT_FROM_LINRGB: [[f64; 3]; 3] = [
    [
        0.001200833568784504,
        0.002389694492170889,
        0.0002795742885861124,
    ],
    [
        0.0005891086651375999,
        0.0029785502573438758,
        0.0003270666104008398,
    ],
    [
        0.00010146692491640572,
        0.0005364214359186694,
        0.0032979401770712076,
    ],
];

/// Inverse of [`SCALED_DISCOUNT_FROM_LINRGB`].
pub const LINRGB_FROM_SCALED_DISCOUNT: [[f64; 3]; 3] = [
    [1373.2198709594231, -1100.4251190754821, -7.278681089101213],
    [-271.815969077903, 559.6580465940733, -32.46047482791194],
    [1.9622899599665666, -57.173814538844006, 308.7233197812385],
];

/// Luminance weights of linear RGB.
pub const Y_FROM_LINRGB: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// Solve for the ARGB color closest to the requested hue, chroma and tone.
///
/// Hue is in degrees (any value, normalized internally), chroma is CAM16
/// chroma, tone is L\* in `0.0..=100.0`. When the chroma is unreachable
/// the result keeps the hue and tone and has the highest chroma sRGB
/// allows. Near-zero chroma and the tone extremes return grays.
///
/// # Example
///
/// ```
/// use hct::cam::solver::solve_to_argb;
/// use hct::Argb;
///
/// assert_eq!(solve_to_argb(0.0, 0.0, 100.0), Argb(0xffffffff));
/// assert_eq!(solve_to_argb(120.0, 50.0, 0.0), Argb(0xff000000));
/// ```
pub fn solve_to_argb(hue_degrees: f64, chroma: f64, lstar: f64) -> Argb {
    if chroma < 0.0001 || lstar < 0.0001 || lstar > 99.9999 {
        return argb_from_lstar(lstar);
    }
    let hue_degrees = sanitize_degrees(hue_degrees);
    let hue_radians = hue_degrees.to_radians();
    let y = y_from_lstar(lstar);
    if let Some(exact) = find_result_by_j(hue_radians, chroma, y) {
        return exact;
    }
    argb_from_linrgb(bisect_to_limit(y, hue_radians))
}

/// Stage 1: Newton iteration on J. `None` when the answer leaves the gamut.
fn find_result_by_j(hue_radians: f64, chroma: f64, y: f64) -> Option<Argb> {
    // Initial estimate of j.
    let mut j = y.sqrt() * 11.0;
    let vc = ViewingConditions::standard();
    let t_inner_coeff = 1.0 / (1.64 - 0.29f64.powf(vc.n)).powf(0.73);
    let e_hue = 0.25 * ((hue_radians + 2.0).cos() + 3.8);
    let p1 = e_hue * (50000.0 / 13.0) * vc.nc * vc.ncb;
    let h_sin = hue_radians.sin();
    let h_cos = hue_radians.cos();

    for iteration_round in 0..5 {
        let j_normalized = j / 100.0;
        let alpha = if chroma == 0.0 || j == 0.0 {
            0.0
        } else {
            chroma / j_normalized.sqrt()
        };
        let t = (alpha * t_inner_coeff).powf(1.0 / 0.9);
        let ac = vc.aw * j_normalized.powf(1.0 / vc.c / vc.z);
        let p2 = ac / vc.nbb;
        let gamma = 23.0 * (p2 + 0.305) * t / (23.0 * p1 + 11.0 * t * h_cos + 108.0 * t * h_sin);
        let a = gamma * h_cos;
        let b = gamma * h_sin;
        let r_a = (460.0 * p2 + 451.0 * a + 288.0 * b) / 1403.0;
        let g_a = (460.0 * p2 - 891.0 * a - 261.0 * b) / 1403.0;
        let b_a = (460.0 * p2 - 220.0 * a - 6300.0 * b) / 1403.0;
        let scaled = [
            inverse_chromatic_adaptation(r_a),
            inverse_chromatic_adaptation(g_a),
            inverse_chromatic_adaptation(b_a),
        ];
        let linrgb = matrix_multiply(scaled, &LINRGB_FROM_SCALED_DISCOUNT);

        if linrgb.iter().any(|&c| c < 0.0) {
            return None;
        }
        let fnj = Y_FROM_LINRGB[0] * linrgb[0]
            + Y_FROM_LINRGB[1] * linrgb[1]
            + Y_FROM_LINRGB[2] * linrgb[2];
        if fnj <= 0.0 {
            return None;
        }
        if iteration_round == 4 || (fnj - y).abs() < 0.002 {
            if linrgb.iter().any(|&c| c > 100.01) {
                return None;
            }
            return Some(argb_from_linrgb(linrgb));
        }
        // Iterates with Newton method,
        // Using 2 * fn(j) / j as the approximation of fn'(j)
        j -= (fnj - y) * j / (2.0 * fnj);
    }
    None
}

/// Stage 2: bisect along the gamut boundary at luminance `y`.
fn bisect_to_limit(y: f64, target_hue: f64) -> [f64; 3] {
    let [mut left, mut right] = bisect_to_segment(y, target_hue);
    let mut left_hue = hue_of(left);
    for axis in 0..3 {
        if left[axis] == right[axis] {
            continue;
        }
        let (mut l_plane, mut r_plane) = if left[axis] < right[axis] {
            (
                critical_plane_below(true_delinearized(left[axis])),
                critical_plane_above(true_delinearized(right[axis])),
            )
        } else {
            (
                critical_plane_above(true_delinearized(left[axis])),
                critical_plane_below(true_delinearized(right[axis])),
            )
        };
        for _ in 0..8 {
            if (r_plane - l_plane).abs() <= 1 {
                break;
            }
            let m_plane = ((l_plane + r_plane) as f64 / 2.0).floor() as i32;
            let mid_plane_coordinate = CRITICAL_PLANES[m_plane.clamp(0, 254) as usize];
            let mid = set_coordinate(left, mid_plane_coordinate, right, axis);
            let mid_hue = hue_of(mid);
            if are_in_cyclic_order(left_hue, target_hue, mid_hue) {
                right = mid;
                r_plane = m_plane;
            } else {
                left = mid;
                left_hue = mid_hue;
                l_plane = m_plane;
            }
        }
    }
    midpoint(left, right)
}

/// Find the polygon edge at luminance `y` whose endpoints bracket `target_hue`.
fn bisect_to_segment(y: f64, target_hue: f64) -> [[f64; 3]; 2] {
    let mut left = [-1.0; 3];
    let mut right = left;
    let mut left_hue = 0.0;
    let mut right_hue = 0.0;
    let mut initialized = false;
    let mut uncut = true;
    for n in 0..12 {
        let Some(mid) = nth_vertex(y, n) else {
            continue;
        };
        let mid_hue = hue_of(mid);
        if !initialized {
            left = mid;
            right = mid;
            left_hue = mid_hue;
            right_hue = mid_hue;
            initialized = true;
            continue;
        }
        if uncut || are_in_cyclic_order(left_hue, mid_hue, right_hue) {
            uncut = false;
            if are_in_cyclic_order(left_hue, target_hue, mid_hue) {
                right = mid;
                right_hue = mid_hue;
            } else {
                left = mid;
                left_hue = mid_hue;
            }
        }
    }
    [left, right]
}

/// The nth vertex of the polygon where the plane of luminance `y` cuts the
/// sRGB cube, or `None` when that edge of the cube misses the plane.
///
/// Vertices 0-3 lie on edges parallel to the red axis, 4-7 green, 8-11 blue.
fn nth_vertex(y: f64, n: usize) -> Option<[f64; 3]> {
    let [k_r, k_g, k_b] = Y_FROM_LINRGB;
    let coord_a = if n % 4 <= 1 { 0.0 } else { 100.0 };
    let coord_b = if n % 2 == 0 { 0.0 } else { 100.0 };
    let vertex = if n < 4 {
        let g = coord_a;
        let b = coord_b;
        let r = (y - g * k_g - b * k_b) / k_r;
        [r, g, b]
    } else if n < 8 {
        let b = coord_a;
        let r = coord_b;
        let g = (y - r * k_r - b * k_b) / k_g;
        [r, g, b]
    } else {
        let r = coord_a;
        let g = coord_b;
        let b = (y - r * k_r - g * k_g) / k_b;
        [r, g, b]
    };
    let solved = match n {
        0..=3 => vertex[0],
        4..=7 => vertex[1],
        _ => vertex[2],
    };
    is_bounded(solved).then_some(vertex)
}

/// CAM16 hue, in radians, of a linear RGB color under standard conditions.
fn hue_of(linrgb: [f64; 3]) -> f64 {
    let scaled_discount = matrix_multiply(linrgb, &SCALED_DISCOUNT_FROM_LINRGB);
    let r_a = chromatic_adaptation(scaled_discount[0]);
    let g_a = chromatic_adaptation(scaled_discount[1]);
    let b_a = chromatic_adaptation(scaled_discount[2]);
    // redness-greenness
    let a = (11.0 * r_a + -12.0 * g_a + b_a) / 11.0;
    // yellowness-blueness
    let b = (r_a + g_a - 2.0 * b_a) / 9.0;
    b.atan2(a)
}

fn chromatic_adaptation(component: f64) -> f64 {
    let af = component.abs().powf(0.42);
    signum(component) * 400.0 * af / (af + 27.13)
}

fn inverse_chromatic_adaptation(adapted: f64) -> f64 {
    let adapted_abs = adapted.abs();
    let base = (27.13 * adapted_abs / (400.0 - adapted_abs)).max(0.0);
    signum(adapted) * base.powf(1.0 / 0.42)
}

fn sanitize_radians(angle: f64) -> f64 {
    (angle + PI * 8.0) % (PI * 2.0)
}

/// Whether `a`, `b`, `c` appear in that order going counter-clockwise.
fn are_in_cyclic_order(a: f64, b: f64, c: f64) -> bool {
    let delta_a_b = sanitize_radians(b - a);
    let delta_a_c = sanitize_radians(c - a);
    delta_a_b < delta_a_c
}

fn is_bounded(x: f64) -> bool {
    (0.0..=100.0).contains(&x)
}

fn intercept(source: f64, mid: f64, target: f64) -> f64 {
    (mid - source) / (target - source)
}

fn lerp_point(source: [f64; 3], t: f64, target: [f64; 3]) -> [f64; 3] {
    [
        source[0] + (target[0] - source[0]) * t,
        source[1] + (target[1] - source[1]) * t,
        source[2] + (target[2] - source[2]) * t,
    ]
}

/// The point on segment `source`-`target` whose `axis` coordinate is `coordinate`.
fn set_coordinate(source: [f64; 3], coordinate: f64, target: [f64; 3], axis: usize) -> [f64; 3] {
    let t = intercept(source[axis], coordinate, target[axis]);
    lerp_point(source, t, target)
}

fn midpoint(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [(a[0] + b[0]) / 2.0, (a[1] + b[1]) / 2.0, (a[2] + b[2]) / 2.0]
}

fn critical_plane_below(x: f64) -> i32 {
    (x - 0.5).floor() as i32
}

fn critical_plane_above(x: f64) -> i32 {
    (x - 0.5).ceil() as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cam::cam16::XYZ_TO_CAM16RGB;
    use crate::cam::Cam16;
    use crate::color::linear::{lstar_from_argb, SRGB_TO_XYZ};

    #[test]
    fn test_scaled_discount_matches_standard_conditions() {
        let vc = ViewingConditions::standard();
        for i in 0..3 {
            for j in 0..3 {
                let mut sum = 0.0;
                for k in 0..3 {
                    sum += XYZ_TO_CAM16RGB[i][k] * SRGB_TO_XYZ[k][j];
                }
                let expected = sum * vc.rgb_d[i] * vc.fl / 100.0;
                let actual = SCALED_DISCOUNT_FROM_LINRGB[i][j];
                assert!(
                    ((actual - expected) / expected).abs() < 1e-3,
                    "[{}][{}]: {} vs {}",
                    i,
                    j,
                    actual,
                    expected
                );
            }
        }
    }

    #[test]
    fn test_scaled_discount_matrices_are_inverse() {
        for i in 0..3 {
            for j in 0..3 {
                let mut sum = 0.0;
                for k in 0..3 {
                    sum += LINRGB_FROM_SCALED_DISCOUNT[i][k] * SCALED_DISCOUNT_FROM_LINRGB[k][j];
                }
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((sum - expected).abs() < 1e-6, "[{}][{}] = {}", i, j, sum);
            }
        }
    }

    #[test]
    fn test_grays_for_zero_chroma_and_extreme_tones() {
        let gray = solve_to_argb(200.0, 0.0, 50.0);
        assert_eq!(gray.red(), gray.green());
        assert_eq!(gray.green(), gray.blue());
        assert_eq!(solve_to_argb(40.0, 80.0, 100.0), Argb(0xffffffff));
        assert_eq!(solve_to_argb(40.0, 80.0, 0.0), Argb(0xff000000));
    }

    #[test]
    fn test_in_gamut_request_is_exact() {
        for hue in (0..360).step_by(15) {
            let argb = solve_to_argb(f64::from(hue), 16.0, 50.0);
            let cam = Cam16::from_argb(argb);
            assert!(
                (lstar_from_argb(argb) - 50.0).abs() < 0.5,
                "tone for hue {}",
                hue
            );
            assert!((cam.chroma - 16.0).abs() < 1.0, "chroma for hue {}", hue);
            let hue_error = crate::math::difference_degrees(cam.hue, f64::from(hue));
            assert!(hue_error < 2.0, "hue {} solved to {}", hue, cam.hue);
        }
    }

    #[test]
    fn test_out_of_gamut_request_keeps_hue_and_tone() {
        // Nothing in sRGB reaches chroma 200
        for hue in (0..360).step_by(30) {
            let argb = solve_to_argb(f64::from(hue), 200.0, 60.0);
            let cam = Cam16::from_argb(argb);
            assert!((lstar_from_argb(argb) - 60.0).abs() < 0.6, "tone for hue {}", hue);
            assert!(cam.chroma < 200.0);
            let hue_error = crate::math::difference_degrees(cam.hue, f64::from(hue));
            assert!(hue_error < 3.0, "hue {} solved to {}", hue, cam.hue);
        }
    }

    #[test]
    fn test_nth_vertex_skips_missing_edges() {
        // At full luminance only the white corner is on the cube.
        let vertices: Vec<_> = (0..12).filter_map(|n| nth_vertex(100.0, n)).collect();
        assert!(!vertices.is_empty());
        for vertex in vertices {
            for c in vertex {
                assert!((c - 100.0).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_cyclic_order() {
        assert!(are_in_cyclic_order(0.0, 1.0, 2.0));
        assert!(!are_in_cyclic_order(0.0, 2.0, 1.0));
        assert!(are_in_cyclic_order(6.0, 0.5, 1.0));
    }
}
