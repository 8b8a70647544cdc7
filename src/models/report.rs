use serde::Serialize;
use std::fmt;

use hct::Hct;

use crate::error::{ReportError, TemperatureError};
use crate::temperature::{raw_temperature, TemperatureCache, HUE_SAMPLE_COUNT};

/// One color with its temperature relative to the cache's slice.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ColorEntry {
    pub hex: String,
    pub argb: u32,
    pub hue: f64,
    pub chroma: f64,
    pub tone: f64,
    /// Raw warm/cool value
    pub temperature: f64,
    /// 0.0 coldest to 1.0 warmest
    pub relative_temperature: f64,
}

impl ColorEntry {
    pub fn new(cache: &TemperatureCache, hct: &Hct) -> Self {
        let argb = hct.to_argb();
        Self {
            hex: argb.to_hex(),
            argb: argb.0,
            hue: hct.hue(),
            chroma: hct.chroma(),
            tone: hct.tone(),
            temperature: raw_temperature(hct),
            relative_temperature: cache.relative_temperature(hct),
        }
    }
}

impl fmt::Display for ColorEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}  H{:>6.1} C{:>5.1} T{:>5.1}  temp {:>7.3}  rel {:.3}",
            self.hex, self.hue, self.chroma, self.tone, self.temperature, self.relative_temperature
        )
    }
}

/// Everything the cache knows about one input color.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TemperatureReport {
    pub input: ColorEntry,
    pub coldest: ColorEntry,
    pub warmest: ColorEntry,
    pub input_relative_temperature: f64,
    pub complement: ColorEntry,
    pub analogous: Vec<ColorEntry>,
}

impl TemperatureReport {
    /// Build the full report, with `count` analogous colors out of `divisions`.
    pub fn build(
        cache: &TemperatureCache,
        count: usize,
        divisions: usize,
    ) -> Result<Self, ReportError> {
        let analogous = cache
            .analogous(count, divisions)?
            .iter()
            .map(|hct| ColorEntry::new(cache, hct))
            .collect();

        Ok(Self {
            input: ColorEntry::new(cache, &cache.input()),
            coldest: ColorEntry::new(cache, &cache.coldest()),
            warmest: ColorEntry::new(cache, &cache.warmest()),
            input_relative_temperature: cache.input_relative_temperature(),
            complement: ColorEntry::new(cache, &cache.complement()),
            analogous,
        })
    }

    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for TemperatureReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "input       {}", self.input)?;
        writeln!(f, "coldest     {}", self.coldest)?;
        writeln!(f, "warmest     {}", self.warmest)?;
        writeln!(f, "complement  {}", self.complement)?;
        writeln!(f, "analogous")?;
        for entry in &self.analogous {
            writeln!(f, "  {}", entry)?;
        }
        Ok(())
    }
}

/// One row of the hue/temperature table.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SampleRow {
    /// Requested hue, which is also the sample index
    pub sample_hue: usize,
    #[serde(flatten)]
    pub color: ColorEntry,
}

impl fmt::Display for SampleRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>3}  {}", self.sample_hue, self.color)
    }
}

/// Every `step`-th hue sample with its temperatures.
pub fn sample_table(cache: &TemperatureCache, step: usize) -> Result<Vec<SampleRow>, TemperatureError> {
    if step == 0 {
        return Err(TemperatureError::InvalidArgument {
            name: "step",
            value: step,
        });
    }

    let hcts = cache.hcts_by_hue();
    Ok((0..HUE_SAMPLE_COUNT - 1)
        .step_by(step)
        .map(|hue| SampleRow {
            sample_hue: hue,
            color: ColorEntry::new(cache, &hcts[hue]),
        })
        .collect())
}
