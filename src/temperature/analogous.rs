//! Analogous colors: hues adjacent to the input, evenly spaced by
//! temperature rather than by hue angle.
//!
//! In art this is usually described as picking 5 colors from a color wheel
//! divided into 12 sections. Here the wheel's sections are cut where the
//! accumulated temperature change, walking clockwise from the input's hue,
//! crosses equal steps. Regions where temperature barely changes are
//! stretched over many degrees of hue; regions where it changes fast are
//! compressed.

use std::collections::VecDeque;

use hct::math::sanitize_degrees_int;
use hct::Hct;

use super::cache::TemperatureCache;
use crate::error::TemperatureError;

/// Number of colors returned by default, input included.
pub const DEFAULT_ANALOGOUS_COUNT: usize = 5;

/// Number of sections the color wheel is divided into by default.
pub const DEFAULT_ANALOGOUS_DIVISIONS: usize = 12;

impl TemperatureCache {
    /// A set of colors with differing hues, equidistant in temperature.
    ///
    /// Returns `count` colors with the input in the middle: `(count - 1) / 2`
    /// counter-clockwise neighbours before it and the rest clockwise after
    /// it. When `divisions < count` colors repeat.
    ///
    /// # Errors
    ///
    /// [`TemperatureError::InvalidArgument`] when `count` or `divisions` is 0.
    ///
    /// # Example
    ///
    /// ```
    /// use chromatemp::TemperatureCache;
    /// use hct::Hct;
    ///
    /// let input = Hct::from_hct(309.0, 78.1, 87.7);
    /// let cache = TemperatureCache::new(input);
    ///
    /// let colors = cache.analogous(5, 12).unwrap();
    /// assert_eq!(colors.len(), 5);
    /// assert_eq!(colors[2], input);
    /// ```
    pub fn analogous(&self, count: usize, divisions: usize) -> Result<Vec<Hct>, TemperatureError> {
        check_positive("count", count)?;
        let wheel = self.analogous_wheel(divisions)?;
        Ok(self.select_around_input(&wheel, count))
    }

    /// [`analogous`](Self::analogous) with 5 colors from 12 divisions.
    pub fn analogous_default(&self) -> Vec<Hct> {
        let wheel = self.build_wheel(DEFAULT_ANALOGOUS_DIVISIONS);
        self.select_around_input(&wheel, DEFAULT_ANALOGOUS_COUNT)
    }

    /// The color wheel cut into `divisions` sections of equal temperature
    /// change, starting at the sample nearest the input's hue.
    ///
    /// One hue may fill several consecutive sections when the temperature
    /// jumps by more than one step between adjacent hues. Black and white
    /// have no analogues at all, so their wheel is one color repeated.
    ///
    /// # Errors
    ///
    /// [`TemperatureError::InvalidArgument`] when `divisions` is 0.
    pub fn analogous_wheel(&self, divisions: usize) -> Result<Vec<Hct>, TemperatureError> {
        check_positive("divisions", divisions)?;
        Ok(self.build_wheel(divisions))
    }

    fn build_wheel(&self, divisions: usize) -> Vec<Hct> {
        let hcts = self.hcts_by_hue();
        let start_hue = self.input_hue_index();
        let start_relative = self.sample_relative_temperature(start_hue);

        // Temperature path length once around the wheel
        let mut last_temp = start_relative;
        let mut absolute_total_temp_delta = 0.0;
        for i in 0..360 {
            let hue = wheel_hue(start_hue, i);
            let temp = self.sample_relative_temperature(hue);
            absolute_total_temp_delta += (temp - last_temp).abs();
            last_temp = temp;
        }
        let temp_step = absolute_total_temp_delta / divisions as f64;

        let mut all_colors = Vec::with_capacity(divisions);
        all_colors.push(hcts[start_hue]);
        let mut hue_addend = 1;
        let mut total_temp_delta = 0.0;
        last_temp = start_relative;
        while all_colors.len() < divisions {
            let hue = wheel_hue(start_hue, hue_addend);
            let hct = hcts[hue];
            let temp = self.sample_relative_temperature(hue);
            total_temp_delta += (temp - last_temp).abs();

            let desired_total_temp_delta_for_index = all_colors.len() as f64 * temp_step;
            let mut index_satisfied = total_temp_delta >= desired_total_temp_delta_for_index;
            let mut index_addend = 1;
            // Keep adding this hue while its accumulated change covers the
            // next section too.
            while index_satisfied && all_colors.len() < divisions {
                all_colors.push(hct);
                let desired_total_temp_delta_for_index =
                    (all_colors.len() + index_addend) as f64 * temp_step;
                index_satisfied = total_temp_delta >= desired_total_temp_delta_for_index;
                index_addend += 1;
            }
            last_temp = temp;
            hue_addend += 1;

            if hue_addend > 360 {
                if all_colors.len() < divisions {
                    tracing::warn!(
                        filled = all_colors.len(),
                        divisions,
                        "Hue sweep ended before filling every division, repeating last color"
                    );
                }
                while all_colors.len() < divisions {
                    all_colors.push(hct);
                }
                break;
            }
        }

        tracing::debug!(
            divisions,
            start_hue,
            temp_step,
            "Divided color wheel by temperature"
        );
        all_colors
    }

    /// Pick `count` colors from `wheel` centered on the input.
    fn select_around_input(&self, wheel: &[Hct], count: usize) -> Vec<Hct> {
        let mut answers = VecDeque::with_capacity(count);
        answers.push_back(self.input());

        // First, rotate counter-clockwise.
        let increase_hue_count = (count - 1) / 2;
        for i in 1..=increase_hue_count {
            answers.push_front(wheel[wrap_index(-(i as isize), wheel.len())]);
        }

        // Second, rotate clockwise.
        let decrease_hue_count = count - increase_hue_count - 1;
        for i in 1..=decrease_hue_count {
            answers.push_back(wheel[wrap_index(i as isize, wheel.len())]);
        }

        answers.into()
    }
}

fn check_positive(name: &'static str, value: usize) -> Result<(), TemperatureError> {
    if value == 0 {
        return Err(TemperatureError::InvalidArgument { name, value });
    }
    Ok(())
}

/// Hue index `offset` degrees clockwise from `start`, wrapped into 0..360.
fn wheel_hue(start: usize, offset: usize) -> usize {
    sanitize_degrees_int((start + offset) as i32) as usize
}

/// Circular index into a list of `len` items.
///
/// Negative indices count back from the end; any multiple of `len` is
/// skipped, so -1, -1 - len and -1 - 2 * len all select the last item.
pub(crate) fn wrap_index(index: isize, len: usize) -> usize {
    index.rem_euclid(len as isize) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use hct::Argb;

    fn lavender() -> TemperatureCache {
        TemperatureCache::new(Hct::from_hct(309.0, 78.1, 87.7))
    }

    #[test]
    fn test_wrap_index() {
        assert_eq!(wrap_index(0, 4), 0);
        assert_eq!(wrap_index(3, 4), 3);
        assert_eq!(wrap_index(4, 4), 0);
        assert_eq!(wrap_index(9, 4), 1);
        assert_eq!(wrap_index(-1, 4), 3);
        assert_eq!(wrap_index(-4, 4), 0);
        assert_eq!(wrap_index(-5, 4), 3);
        assert_eq!(wrap_index(-9, 4), 3);
        assert_eq!(wrap_index(-3, 1), 0);
    }

    #[test]
    fn test_wheel_hue_wraps() {
        assert_eq!(wheel_hue(300, 59), 359);
        assert_eq!(wheel_hue(300, 60), 0);
        assert_eq!(wheel_hue(360, 0), 0);
        assert_eq!(wheel_hue(360, 360), 0);
    }

    #[test]
    fn test_wheel_starts_at_input_sample() {
        let cache = lavender();
        let wheel = cache.analogous_wheel(12).unwrap();
        assert_eq!(wheel.len(), 12);
        assert_eq!(wheel[0], cache.hcts_by_hue()[309]);
    }

    #[test]
    fn test_wheel_sections_are_ordered_clockwise() {
        let cache = lavender();
        let wheel = cache.analogous_wheel(12).unwrap();
        let hues: Vec<usize> = wheel
            .iter()
            .map(|hct| {
                cache
                    .hcts_by_hue()
                    .iter()
                    .position(|sample| sample == hct)
                    .unwrap()
            })
            .collect();
        let offsets: Vec<i32> = hues
            .iter()
            .map(|&hue| sanitize_degrees_int(hue as i32 - 309))
            .collect();
        for pair in offsets.windows(2) {
            assert!(pair[0] <= pair[1], "offsets {:?}", offsets);
        }
    }

    #[test]
    fn test_count_three_divisions_four_picks_last_section_first() {
        let cache = lavender();
        let wheel = cache.analogous_wheel(4).unwrap();
        let colors = cache.analogous(3, 4).unwrap();
        assert_eq!(colors.len(), 3);
        assert_eq!(colors[0], wheel[3]);
        assert_eq!(colors[1], cache.input());
        assert_eq!(colors[2], wheel[1]);
    }

    #[test]
    fn test_more_colors_than_divisions_repeat() {
        let cache = lavender();
        let wheel = cache.analogous_wheel(3).unwrap();
        let colors = cache.analogous(7, 3).unwrap();
        assert_eq!(colors.len(), 7);
        // counter-clockwise picks -3, -2, -1 then input then 1, 2, 3
        assert_eq!(
            colors,
            vec![
                wheel[0],
                wheel[1],
                wheel[2],
                cache.input(),
                wheel[1],
                wheel[2],
                wheel[0],
            ]
        );
    }

    #[test]
    fn test_single_color_is_input() {
        let cache = lavender();
        assert_eq!(cache.analogous(1, 12).unwrap(), vec![cache.input()]);
    }

    #[test]
    fn test_single_division_repeats_start_sample() {
        let cache = lavender();
        let start = cache.hcts_by_hue()[309];
        let colors = cache.analogous(3, 1).unwrap();
        assert_eq!(colors, vec![start, cache.input(), start]);
    }

    #[test]
    fn test_zero_arguments_are_rejected() {
        let cache = lavender();
        assert!(matches!(
            cache.analogous(0, 12),
            Err(TemperatureError::InvalidArgument { name: "count", .. })
        ));
        assert!(matches!(
            cache.analogous(5, 0),
            Err(TemperatureError::InvalidArgument {
                name: "divisions",
                ..
            })
        ));
        assert!(cache.analogous_wheel(0).is_err());
    }

    #[test]
    fn test_default_matches_explicit_defaults() {
        let cache = lavender();
        assert_eq!(
            cache.analogous_default(),
            cache
                .analogous(DEFAULT_ANALOGOUS_COUNT, DEFAULT_ANALOGOUS_DIVISIONS)
                .unwrap()
        );
    }

    #[test]
    fn test_white_has_no_analogues() {
        let white = Hct::from_argb(Argb(0xffffffff));
        let cache = TemperatureCache::new(white);
        let wheel = cache.analogous_wheel(12).unwrap();
        assert_eq!(wheel.len(), 12);
        for hct in &wheel {
            assert_eq!(hct.to_argb(), Argb(0xffffffff));
        }
    }
}
