pub mod color_spec;
pub mod config;
pub mod report;

pub use color_spec::parse_color;
pub use config::{AnalogousConfig, AppConfig, OutputFormat, CONFIG_ENV_VAR};
pub use report::{sample_table, ColorEntry, SampleRow, TemperatureReport};
