use crate::error::PaceError;

/// Placeholder rendered for values that cannot be displayed
pub const PLACEHOLDER: &str = "--";

/// Parse a colon-delimited time ("SS", "MM:SS" or "H:MM:SS") into seconds.
///
/// Parts are not normalised: "90:00" is 90 minutes and "1:75" is 135 seconds.
/// Negative parts are accepted here; the calculator rejects non-positive totals.
pub fn parse_time_to_seconds(input: &str) -> Result<f64, PaceError> {
    let invalid = || PaceError::InvalidTime {
        input: input.to_string(),
    };

    let cleaned = input.trim();
    if cleaned.is_empty() {
        return Err(invalid());
    }

    let mut parts = Vec::with_capacity(3);
    for part in cleaned.split(':') {
        let part = part.trim();
        if part.is_empty() {
            return Err(invalid());
        }
        let value = part.parse::<f64>().map_err(|_| invalid())?;
        if !value.is_finite() {
            return Err(invalid());
        }
        parts.push(value);
    }

    match parts.as_slice() {
        [secs] => Ok(*secs),
        [mins, secs] => Ok(mins * 60.0 + secs),
        [hours, mins, secs] => Ok(hours * 3600.0 + mins * 60.0 + secs),
        _ => Err(invalid()),
    }
}

/// Format seconds as "M:SS", rounded to the nearest second.
///
/// Minutes are not wrapped into hours, so 3725 seconds renders as "62:05".
pub fn format_seconds(total_seconds: f64) -> String {
    if !total_seconds.is_finite() {
        return PLACEHOLDER.to_string();
    }

    let rounded = total_seconds.round() as i64;
    let minutes = rounded.div_euclid(60);
    let seconds = rounded.rem_euclid(60);

    format!("{}:{:02}", minutes, seconds)
}

/// Format seconds as "HH:MM:SS", rounded to the nearest second
pub fn format_hms(total_seconds: f64) -> String {
    if !total_seconds.is_finite() {
        return PLACEHOLDER.to_string();
    }

    let rounded = total_seconds.round() as i64;
    let hours = rounded.div_euclid(3600);
    let minutes = rounded.rem_euclid(3600) / 60;
    let seconds = rounded.rem_euclid(60);

    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}
