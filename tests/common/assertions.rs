//! Assertion helpers for tests.

use chromatemp::TemperatureCache;
use hct::math::difference_degrees;
use hct::Hct;

/// Assert two floats are within `tolerance`
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "Expected {} +/- {}, got {}",
        expected,
        tolerance,
        actual
    );
}

/// Assert two hues are within `tolerance` degrees on the circle
pub fn assert_hue_close(actual: f64, expected: f64, tolerance: f64) {
    let difference = difference_degrees(actual, expected);
    assert!(
        difference <= tolerance,
        "Expected hue {} +/- {}, got {} ({} degrees away)",
        expected,
        tolerance,
        actual,
        difference
    );
}

/// Assert a relative temperature is inside [0, 1]
pub fn assert_relative_in_range(cache: &TemperatureCache, hct: &Hct) {
    let relative = cache.relative_temperature(hct);
    assert!(
        (0.0..=1.0).contains(&relative),
        "Relative temperature {} of {} outside [0, 1]",
        relative,
        hct.to_argb()
    );
}

/// Assert `colors` is `count` long with the cache input in the middle slot
pub fn assert_centered_on_input(cache: &TemperatureCache, colors: &[Hct], count: usize) {
    assert_eq!(colors.len(), count, "Expected {} analogous colors", count);
    assert_eq!(
        colors[(count - 1) / 2],
        cache.input(),
        "Expected input at index {}",
        (count - 1) / 2
    );
}
