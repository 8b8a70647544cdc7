//! Color temperature relationships in HCT.
//!
//! A [`TemperatureCache`] holds one input color and lazily derives:
//!
//! - the hue wheel at the input's chroma and tone ([`TemperatureCache::hcts_by_hue`])
//! - those colors sorted by warmth ([`TemperatureCache::hcts_by_temp`])
//! - warmest/coldest and relative temperature in `[0, 1]`
//! - analogous colors spaced by temperature ([`TemperatureCache::analogous`])
//! - a temperature-balanced complement ([`TemperatureCache::complement`])
//!
//! Temperature uses the warm/cool formula of [`raw_temperature`].

mod analogous;
mod cache;
mod complement;
mod raw;

pub use analogous::{DEFAULT_ANALOGOUS_COUNT, DEFAULT_ANALOGOUS_DIVISIONS};
pub use cache::{TemperatureCache, HUE_SAMPLE_COUNT};
pub use raw::{is_between, raw_temperature};
