//! Chromatemp - warm and cool colors in HCT
//!
//! Color temperature relationships for a single input color: the warmest
//! and coldest colors at its chroma and tone, relative temperature,
//! analogous colors spaced by temperature and a temperature-balanced
//! complement. Color science lives in the `hct` crate.

pub mod error;
pub mod models;
pub mod temperature;

pub use temperature::TemperatureCache;
