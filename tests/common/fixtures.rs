//! Test fixtures and constants.

use chromatemp::TemperatureCache;
use hct::{Argb, Hct};

/// Input colors for different scenarios
pub mod colors {
    /// Light, moderately chromatic purple
    pub const LAVENDER: (f64, f64, f64) = (309.0, 78.1, 87.7);

    /// sRGB primaries and friends
    pub const RED: u32 = 0xffff0000;
    pub const BLUE: u32 = 0xff0000ff;
    pub const ORANGE: u32 = 0xffffa500;
    pub const CYAN: u32 = 0xff00ffff;

    /// Every hue collapses to the same color
    pub const WHITE: u32 = 0xffffffff;
    pub const BLACK: u32 = 0xff000000;
}

/// Light purple, requested as hct(309, 78.1, 87.7)
pub fn lavender() -> Hct {
    let (hue, chroma, tone) = colors::LAVENDER;
    Hct::from_hct(hue, chroma, tone)
}

pub fn hct_of(argb: u32) -> Hct {
    Hct::from_argb(Argb(argb))
}

pub fn cache_of(argb: u32) -> TemperatureCache {
    TemperatureCache::new(hct_of(argb))
}

pub fn lavender_cache() -> TemperatureCache {
    TemperatureCache::new(lavender())
}

/// Chromatic inputs spread around the wheel and across tones
pub fn chromatic_inputs() -> Vec<Hct> {
    vec![
        lavender(),
        hct_of(colors::RED),
        hct_of(colors::BLUE),
        hct_of(colors::ORANGE),
        hct_of(colors::CYAN),
        Hct::from_hct(150.0, 40.0, 30.0),
        Hct::from_hct(20.0, 16.0, 70.0),
    ]
}

/// Write a config file into a fresh temporary directory
pub fn write_config(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("chromatemp.yaml");
    std::fs::write(&path, contents).expect("write config");
    (dir, path)
}
