//! Parsing of color arguments.
//!
//! Accepted forms:
//! - hex: `#RRGGBB`, `RRGGBB`, `#RGB`, `RGB`
//! - HCT: `hct(H, C, T)`, case-insensitive, commas or whitespace between values

use hct::Hct;

use crate::error::ColorSpecError;

/// Parse a color argument into HCT.
///
/// # Example
///
/// ```
/// use chromatemp::models::parse_color;
///
/// let red = parse_color("#ff0000").unwrap();
/// assert_eq!(red.to_argb().to_hex(), "#ff0000");
///
/// let lavender = parse_color("hct(309, 78.1, 87.7)").unwrap();
/// assert!((lavender.tone() - 87.7).abs() < 0.5);
/// ```
pub fn parse_color(input: &str) -> Result<Hct, ColorSpecError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ColorSpecError::Empty);
    }

    match strip_hct_call(input) {
        Some(args) => parse_hct_args(args),
        None => Ok(input.parse::<Hct>()?),
    }
}

/// Body of `hct(...)`, or None if `input` is not an hct call.
fn strip_hct_call(input: &str) -> Option<&str> {
    let prefix = input.get(..4)?;
    if !prefix.eq_ignore_ascii_case("hct(") {
        return None;
    }
    Some(input[4..].strip_suffix(')').unwrap_or(&input[4..]))
}

fn parse_hct_args(args: &str) -> Result<Hct, ColorSpecError> {
    let values = args
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<f64>()
                .map_err(|e| ColorSpecError::Hct(format!("{part:?}: {e}")))
        })
        .collect::<Result<Vec<f64>, _>>()?;

    let [hue, chroma, tone] = values[..] else {
        return Err(ColorSpecError::Hct(format!(
            "expected 3 values (hue, chroma, tone), got {}",
            values.len()
        )));
    };

    if !(hue.is_finite() && chroma.is_finite() && tone.is_finite()) {
        return Err(ColorSpecError::Hct("values must be finite".to_string()));
    }
    if chroma < 0.0 {
        return Err(ColorSpecError::Hct(format!(
            "chroma must not be negative, got {chroma}"
        )));
    }
    if !(0.0..=100.0).contains(&tone) {
        return Err(ColorSpecError::Hct(format!(
            "tone must be between 0 and 100, got {tone}"
        )));
    }

    Ok(Hct::from_hct(hue, chroma, tone))
}
