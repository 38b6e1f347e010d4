//! Free-text input normalizers, one per answer unit.
//!
//! All parsers trim, lowercase, and accept a locale decimal comma. A failed
//! parse is reported as an error so callers can treat it as a plain
//! non-match; nothing here panics or reaches the user.

use thiserror::Error;

/// Errors produced while normalizing user input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputError {
    #[error("empty input")]
    Empty,

    #[error("not a number: {0}")]
    NotANumber(String),
}

/// Trims, lowercases, and converts a decimal comma to a dot.
fn cleaned(raw: &str) -> Result<String, InputError> {
    let text = raw.trim().to_lowercase().replace(',', ".");
    if text.is_empty() {
        return Err(InputError::Empty);
    }
    Ok(text)
}

fn parse_f64(text: &str) -> Result<f64, InputError> {
    text.parse()
        .map_err(|_| InputError::NotANumber(text.to_string()))
}

fn parse_u32(text: &str) -> Result<u32, InputError> {
    text.parse()
        .map_err(|_| InputError::NotANumber(text.to_string()))
}

/// Parses an aperture like `f/5.6`, `f5.6`, or `5,6` to its f-number.
///
/// # Errors
///
/// Returns `InputError` when the input is empty or not a number.
pub fn aperture(raw: &str) -> Result<f64, InputError> {
    let text = cleaned(raw)?;
    let text = text
        .strip_prefix("f/")
        .or_else(|| text.strip_prefix('f'))
        .unwrap_or(&text)
        .trim();
    parse_f64(text)
}

/// Parses an ISO sensitivity like `800` or `ISO 800`.
///
/// # Errors
///
/// Returns `InputError` when the input is empty or not a whole number.
pub fn iso(raw: &str) -> Result<u32, InputError> {
    let text = cleaned(raw)?;
    let text = text.strip_prefix("iso").unwrap_or(&text).trim();
    parse_u32(text)
}

/// Canonicalizes a shutter speed to its dial text.
///
/// Strips a trailing `sec`/`s`, and maps the one-second inputs `1` and `1.0`
/// to the dial notation `1"`. Fraction inputs like `1/125` pass through
/// unchanged.
///
/// # Errors
///
/// Returns `InputError::Empty` when nothing remains after stripping units.
pub fn shutter(raw: &str) -> Result<String, InputError> {
    let text = cleaned(raw)?;
    let text = text
        .strip_suffix("sec")
        .or_else(|| text.strip_suffix('s'))
        .unwrap_or(&text)
        .trim();
    if text.is_empty() {
        return Err(InputError::Empty);
    }
    if text == "1" || text == "1.0" {
        return Ok("1\"".to_string());
    }
    Ok(text.to_string())
}

/// Parses an intensity to a percentage.
///
/// Accepts a plain percentage (`25`, `25%`), a fraction (`1/4`), and the 0–1
/// fractional shorthand (`0.25`); all three examples normalize to `25.0`.
///
/// # Errors
///
/// Returns `InputError` for empty input, an unparsable number, or a fraction
/// with a zero denominator.
pub fn percent(raw: &str) -> Result<f64, InputError> {
    let text = cleaned(raw)?;
    let explicit_percent = text.ends_with('%');
    let text = text.strip_suffix('%').unwrap_or(&text).trim();
    if text.is_empty() {
        return Err(InputError::Empty);
    }

    if let Some((numerator, denominator)) = text.split_once('/') {
        let numerator = parse_f64(numerator.trim())?;
        let denominator = parse_f64(denominator.trim())?;
        if denominator == 0.0 {
            return Err(InputError::NotANumber(text.to_string()));
        }
        return Ok(numerator / denominator * 100.0);
    }

    let value = parse_f64(text)?;
    // A bare value in (0, 1] reads as a fraction of full intensity; an
    // explicit percent sign means what it says, so "1%" stays 1%.
    if !explicit_percent && value > 0.0 && value <= 1.0 {
        return Ok(value * 100.0);
    }
    Ok(value)
}

/// Parses a distance in meters, with an optional `m`/`meter`/`meters` unit.
///
/// # Errors
///
/// Returns `InputError` when the input is empty or not a number.
pub fn distance(raw: &str) -> Result<f64, InputError> {
    let text = cleaned(raw)?;
    let text = text
        .strip_suffix("meters")
        .or_else(|| text.strip_suffix("meter"))
        .or_else(|| text.strip_suffix('m'))
        .unwrap_or(&text)
        .trim();
    parse_f64(text)
}
