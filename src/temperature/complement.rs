//! Temperature-based complement.

use hct::math::sanitize_degrees;
use hct::Hct;

use super::cache::{TemperatureCache, HUE_SAMPLE_COUNT};
use super::raw::is_between;

impl TemperatureCache {
    /// The color on the opposite side of the warm/cool split whose relative
    /// temperature is closest to `1 - input_relative_temperature`.
    ///
    /// Coldest and warmest hues cut the wheel into two arcs. The complement
    /// is searched on the arc that does not hold the input's hue, so a warm
    /// input gets a cool complement and vice versa. Unlike the 180° hue
    /// rotation, the answer balances the input's temperature.
    ///
    /// The result is computed once; later calls return the same color.
    /// When every sample has the same temperature (white, black) the
    /// sample at the input's hue is returned.
    pub fn complement(&self) -> Hct {
        *self.complement.get_or_init(|| self.find_complement())
    }

    fn find_complement(&self) -> Hct {
        let hcts = self.hcts_by_hue();
        let temps = self.temps_by_hue();
        let input_hue = self.input().hue();
        let mut answer = hcts[hue_index(input_hue)];

        let range = self.temperature_range();
        if range == 0.0 {
            tracing::debug!("Flat temperature range, complement is the input hue");
            return answer;
        }

        let coldest_hue = self.coldest().hue();
        let coldest_temp = self.coldest_temperature();
        let warmest_hue = self.warmest().hue();

        let start_hue_is_coldest_to_warmest = is_between(input_hue, coldest_hue, warmest_hue);
        let (start_hue, end_hue) = if start_hue_is_coldest_to_warmest {
            (warmest_hue, coldest_hue)
        } else {
            (coldest_hue, warmest_hue)
        };

        let complement_relative_temp = 1.0 - self.input_relative_temperature();
        let mut smallest_error = f64::INFINITY;

        for step in 0..=360 {
            let hue = sanitize_degrees(start_hue + f64::from(step));
            if !is_between(hue, start_hue, end_hue) {
                continue;
            }
            let index = hue_index(hue);
            let relative_temp = (temps[index] - coldest_temp) / range;
            let error = (complement_relative_temp - relative_temp).abs();
            if error < smallest_error {
                smallest_error = error;
                answer = hcts[index];
            }
        }

        tracing::debug!(
            input_hue,
            complement_hue = answer.hue(),
            target = complement_relative_temp,
            error = smallest_error,
            "Found complement"
        );
        answer
    }
}

/// Nearest hue sample for a hue in degrees.
fn hue_index(hue: f64) -> usize {
    (hue.round() as usize).min(HUE_SAMPLE_COUNT - 1)
}
