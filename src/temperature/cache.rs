//! The temperature cache: lazily computed, write-once views over the hue
//! wheel at the input color's chroma and tone.

use std::cell::OnceCell;

use hct::Hct;

use super::raw::raw_temperature;

/// Number of hue samples: integer hues 0 through 360 inclusive.
pub const HUE_SAMPLE_COUNT: usize = 361;

/// Raw temperatures, parallel to the hue samples, plus the input's.
#[derive(Debug)]
struct Temperatures {
    by_hue: Vec<f64>,
    input: f64,
}

/// Hue samples and the input sorted ascending by raw temperature.
#[derive(Debug)]
struct TemperatureOrder {
    hcts: Vec<Hct>,
    temperatures: Vec<f64>,
}

/// Color temperature relationships for one input color.
///
/// Every view is computed on first access and kept for the lifetime of the
/// cache. The input is immutable, so nothing is ever invalidated.
///
/// `TemperatureCache` is `!Sync`: share it within one thread, or build one
/// cache per thread.
///
/// # Example
///
/// ```
/// use chromatemp::TemperatureCache;
/// use hct::Hct;
///
/// let cache = TemperatureCache::new(Hct::from_hct(309.0, 78.1, 87.7));
///
/// assert_eq!(cache.hcts_by_hue().len(), 361);
/// assert_eq!(cache.hcts_by_temp().len(), 362);
/// assert_eq!(cache.relative_temperature(&cache.coldest()), 0.0);
/// assert_eq!(cache.relative_temperature(&cache.warmest()), 1.0);
/// ```
#[derive(Debug)]
pub struct TemperatureCache {
    input: Hct,
    hue_samples: OnceCell<Vec<Hct>>,
    temperatures: OnceCell<Temperatures>,
    by_temperature: OnceCell<TemperatureOrder>,
    pub(super) input_relative_temperature: OnceCell<f64>,
    pub(super) complement: OnceCell<Hct>,
}

impl TemperatureCache {
    /// Create an empty cache for `input`. Nothing is computed yet.
    pub fn new(input: Hct) -> Self {
        Self {
            input,
            hue_samples: OnceCell::new(),
            temperatures: OnceCell::new(),
            by_temperature: OnceCell::new(),
            input_relative_temperature: OnceCell::new(),
            complement: OnceCell::new(),
        }
    }

    /// The color this cache was built for.
    pub fn input(&self) -> Hct {
        self.input
    }

    /// Colors at every integer hue 0..=360 with the input's chroma and tone.
    ///
    /// Index `h` holds the color requested at hue `h`; index 360 duplicates
    /// index 0.
    pub fn hcts_by_hue(&self) -> &[Hct] {
        self.hue_samples.get_or_init(|| {
            let chroma = self.input.chroma();
            let tone = self.input.tone();
            let hcts: Vec<Hct> = (0..HUE_SAMPLE_COUNT)
                .map(|hue| Hct::from_hct(hue as f64, chroma, tone))
                .collect();
            tracing::debug!(samples = hcts.len(), chroma, tone, "Computed hue samples");
            hcts
        })
    }

    fn temperatures(&self) -> &Temperatures {
        self.temperatures.get_or_init(|| {
            let by_hue: Vec<f64> = self.hcts_by_hue().iter().map(raw_temperature).collect();
            let input = raw_temperature(&self.input);
            tracing::debug!(input_temperature = input, "Computed raw temperatures");
            Temperatures { by_hue, input }
        })
    }

    /// Raw temperatures of [`hcts_by_hue`](Self::hcts_by_hue), index for index.
    pub fn temps_by_hue(&self) -> &[f64] {
        &self.temperatures().by_hue
    }

    /// Raw temperature of the input color.
    pub fn input_temperature(&self) -> f64 {
        self.temperatures().input
    }

    fn by_temperature(&self) -> &TemperatureOrder {
        self.by_temperature.get_or_init(|| {
            let temperatures = self.temperatures();
            let mut pairs: Vec<(Hct, f64)> = self
                .hcts_by_hue()
                .iter()
                .copied()
                .zip(temperatures.by_hue.iter().copied())
                .chain(std::iter::once((self.input, temperatures.input)))
                .collect();
            // Stable: equal temperatures keep hue order, input last
            pairs.sort_by(|a, b| a.1.total_cmp(&b.1));
            let (hcts, temperatures): (Vec<Hct>, Vec<f64>) = pairs.into_iter().unzip();
            tracing::debug!(
                coldest = temperatures[0],
                warmest = temperatures[temperatures.len() - 1],
                "Sorted colors by temperature"
            );
            TemperatureOrder { hcts, temperatures }
        })
    }

    /// The hue samples and the input, coldest first.
    pub fn hcts_by_temp(&self) -> &[Hct] {
        &self.by_temperature().hcts
    }

    /// The warmest color of the slice (last of [`hcts_by_temp`](Self::hcts_by_temp)).
    pub fn warmest(&self) -> Hct {
        let order = self.by_temperature();
        order.hcts[order.hcts.len() - 1]
    }

    /// The coldest color of the slice (first of [`hcts_by_temp`](Self::hcts_by_temp)).
    pub fn coldest(&self) -> Hct {
        self.by_temperature().hcts[0]
    }

    pub(super) fn warmest_temperature(&self) -> f64 {
        let order = self.by_temperature();
        order.temperatures[order.temperatures.len() - 1]
    }

    pub(super) fn coldest_temperature(&self) -> f64 {
        self.by_temperature().temperatures[0]
    }

    /// Warmest minus coldest raw temperature. Zero when every sample has
    /// the same temperature.
    pub fn temperature_range(&self) -> f64 {
        self.warmest_temperature() - self.coldest_temperature()
    }

    /// Position of a raw temperature between coldest (0.0) and warmest (1.0).
    pub(super) fn relative_from_raw(&self, temperature: f64) -> f64 {
        let range = self.temperature_range();
        // At T100 only white exists, and chroma 0 is gray at every hue.
        if range == 0.0 {
            return 0.5;
        }
        (temperature - self.coldest_temperature()) / range
    }

    /// Temperature relative to all colors with the same chroma and tone.
    ///
    /// 0.0 is the coldest color, 1.0 the warmest. When every color of the
    /// slice has the same temperature the answer is 0.5 for any color.
    pub fn relative_temperature(&self, hct: &Hct) -> f64 {
        self.relative_from_raw(raw_temperature(hct))
    }

    /// Relative temperature of the input color.
    pub fn input_relative_temperature(&self) -> f64 {
        *self
            .input_relative_temperature
            .get_or_init(|| self.relative_from_raw(self.input_temperature()))
    }

    /// Hue index of the sample nearest the input's hue.
    pub(super) fn input_hue_index(&self) -> usize {
        (self.input.hue().round() as usize).min(HUE_SAMPLE_COUNT - 1)
    }

    /// Relative temperature of the sample at hue index `hue`.
    pub(super) fn sample_relative_temperature(&self, hue: usize) -> f64 {
        self.relative_from_raw(self.temps_by_hue()[hue])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hct::Argb;

    fn lavender() -> TemperatureCache {
        TemperatureCache::new(Hct::from_hct(309.0, 78.1, 87.7))
    }

    #[test]
    fn test_new_cache_is_empty() {
        let cache = lavender();
        assert!(cache.hue_samples.get().is_none());
        assert!(cache.temperatures.get().is_none());
        assert!(cache.by_temperature.get().is_none());
        assert!(cache.input_relative_temperature.get().is_none());
        assert!(cache.complement.get().is_none());
    }

    #[test]
    fn test_sorted_view_populates_its_dependencies() {
        let cache = lavender();
        cache.hcts_by_temp();
        assert!(cache.hue_samples.get().is_some());
        assert!(cache.temperatures.get().is_some());
        assert!(cache.input_relative_temperature.get().is_none());
    }

    #[test]
    fn test_hue_samples_are_computed_once() {
        let cache = lavender();
        let first = cache.hcts_by_hue().as_ptr();
        let second = cache.hcts_by_hue().as_ptr();
        assert_eq!(first, second);
    }

    #[test]
    fn test_temps_by_hue_parallel_to_samples() {
        let cache = lavender();
        let hcts = cache.hcts_by_hue();
        let temps = cache.temps_by_hue();
        assert_eq!(hcts.len(), temps.len());
        for (hct, temp) in hcts.iter().zip(temps) {
            assert_eq!(raw_temperature(hct), *temp);
        }
    }

    #[test]
    fn test_sorted_view_is_ascending_and_contains_input() {
        let cache = lavender();
        let sorted = cache.hcts_by_temp();
        assert_eq!(sorted.len(), HUE_SAMPLE_COUNT + 1);
        for pair in sorted.windows(2) {
            assert!(raw_temperature(&pair[0]) <= raw_temperature(&pair[1]));
        }
        assert!(sorted.contains(&cache.input()));
    }

    #[test]
    fn test_relative_temperature_of_extremes() {
        let cache = lavender();
        assert_eq!(cache.relative_temperature(&cache.coldest()), 0.0);
        assert_eq!(cache.relative_temperature(&cache.warmest()), 1.0);
    }

    #[test]
    fn test_zero_range_is_one_half() {
        // Tone 100 resolves to white at every hue
        let cache = TemperatureCache::new(Hct::from_argb(Argb(0xffffffff)));
        assert_eq!(cache.temperature_range(), 0.0);
        assert_eq!(cache.relative_temperature(&cache.coldest()), 0.5);
        assert_eq!(cache.relative_temperature(&cache.warmest()), 0.5);
        assert_eq!(cache.input_relative_temperature(), 0.5);
    }

    #[test]
    fn test_input_hue_index_rounds() {
        let cache = lavender();
        assert_eq!(cache.input_hue_index(), 309);
    }
}
