use thiserror::Error;

#[derive(Debug, Error)]
pub enum TemperatureError {
    #[error("Invalid argument: {name} must be at least 1, got {value}")]
    InvalidArgument { name: &'static str, value: usize },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Error)]
pub enum ColorSpecError {
    #[error("Empty color specification")]
    Empty,

    #[error("Invalid hex color: {0}")]
    Hex(#[from] hct::ParseColorError),

    #[error("Invalid HCT color: {0}")]
    Hct(String),
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Temperature error: {0}")]
    Temperature(#[from] TemperatureError),

    #[error("JSON encode error: {0}")]
    Json(#[from] serde_json::Error),
}
