//! Conversion between signed second counts and `H:M:S[.mmm]` text
//!
//! Hours are never clamped to a day, so a 25 hour span renders as `25:00:00`.
//! The sign is handled apart from the magnitude: any negative, nonzero input
//! is prefixed with `-`, even when the rendered digits are all zero.

use crate::error::{Error, Result};

/// Largest millisecond count that an `f64` still represents exactly (2^53).
const MAX_EXACT_MS: f64 = 9_007_199_254_740_992.0;

/// Render `seconds` as `HH:MM:SS`, or `HH:MM:SS.mmm` when `include_ms` is set.
///
/// Without milliseconds the fractional part is truncated. With milliseconds the
/// magnitude is rounded to the nearest millisecond first, so `59.9996` carries
/// into `00:01:00.000`. Only `NaN` and infinities are rejected; hours grow as
/// wide as the value needs.
///
/// ```
/// use stdl::seconds_to_hms;
///
/// assert_eq!(seconds_to_hms(3661.5, true).unwrap(), "01:01:01.500");
/// assert_eq!(seconds_to_hms(90321.789, false).unwrap(), "25:05:21");
/// assert_eq!(seconds_to_hms(-0.5, true).unwrap(), "-00:00:00.500");
/// ```
pub fn seconds_to_hms(seconds: f64, include_ms: bool) -> Result<String> {
    if !seconds.is_finite() {
        return Err(Error::format(format!("{seconds} is not a finite number")));
    }

    let sign = if seconds < 0.0 { "-" } else { "" };
    let magnitude = seconds.abs();
    let total_ms = if include_ms {
        (magnitude * 1000.0).round()
    } else {
        magnitude.trunc() * 1000.0
    };
    if total_ms > MAX_EXACT_MS {
        return Ok(format_wide(sign, magnitude, include_ms));
    }

    let total_ms = total_ms as u64;
    let total_secs = total_ms / 1000;
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let secs = total_secs % 60;

    let mut out = format!("{sign}{hours:02}:{minutes:02}:{secs:02}");
    if include_ms {
        out.push_str(&format!(".{:03}", total_ms % 1000));
    }
    Ok(out)
}

/// Split a magnitude too large for an integer millisecond count.
///
/// `trunc` and `%` are exact on `f64`. Past 2^53 ms any fraction is a multiple
/// of at least 2^-9 s, so rounding it to milliseconds stays below 1000.
fn format_wide(sign: &str, magnitude: f64, include_ms: bool) -> String {
    let whole = magnitude.trunc();
    let hours = (whole / 3600.0).floor();
    let minutes = ((whole % 3600.0) / 60.0).floor();
    let secs = whole % 60.0;

    let mut out = format!("{sign}{hours:02.0}:{minutes:02.0}:{secs:02.0}");
    if include_ms {
        let millis = ((magnitude - whole) * 1000.0).round();
        out.push_str(&format!(".{millis:03.0}"));
    }
    out
}

/// Parse `H:M:S`, `M:S` or a bare second count back into seconds.
///
/// Fields need no zero padding (`"2:3"` is 123 seconds). Minutes and seconds
/// must be below 60; only hours or a bare second count are unbounded. When
/// `include_ms` is set the seconds field may carry up to three fractional
/// digits, right-padded to milliseconds, so `".1"` is 100 ms. A leading `-`
/// negates the result.
pub fn hms_to_seconds(text: &str, include_ms: bool) -> Result<f64> {
    let invalid = |reason: &str| Error::format(format!("'{text}': {reason}"));

    let (negative, body) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    if body.is_empty() {
        return Err(invalid("empty"));
    }

    let parts: Vec<&str> = body.split(':').collect();
    if parts.len() > 3 {
        return Err(invalid("more than three ':' separated fields"));
    }

    let (last, fraction) = match parts[parts.len() - 1].split_once('.') {
        Some(_) if !include_ms => return Err(invalid("fractional seconds are not enabled")),
        Some((whole, frac)) => (whole, Some(frac)),
        None => (parts[parts.len() - 1], None),
    };

    let mut fields = Vec::with_capacity(parts.len());
    for part in &parts[..parts.len() - 1] {
        fields.push(parse_field(part).ok_or_else(|| invalid("fields must be digits"))?);
    }
    fields.push(parse_field(last).ok_or_else(|| invalid("fields must be digits"))?);

    let millis = match fraction {
        Some(frac) => parse_millis(frac).ok_or_else(|| invalid("bad fractional seconds"))?,
        None => 0,
    };

    let (hours, minutes, secs) = match fields.as_slice() {
        [s] => (0.0, 0.0, *s),
        [m, s] => (0.0, *m, *s),
        [h, m, s] => (*h, *m, *s),
        _ => return Err(invalid("unrecognised layout")),
    };
    if fields.len() >= 2 && (minutes >= 60.0 || secs >= 60.0) {
        return Err(invalid("minutes and seconds must be below 60"));
    }

    let total = hours * 3600.0 + minutes * 60.0 + secs + millis as f64 / 1000.0;
    if !total.is_finite() {
        return Err(invalid("too large to represent"));
    }
    Ok(if negative { -total } else { total })
}

/// Parse either `H:M:S[.mmm]` text or a humantime span such as `"1h 30m"`.
///
/// A leading `-` negates either form.
pub fn parse_human_duration(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    if let Ok(seconds) = hms_to_seconds(trimmed, true) {
        return Ok(seconds);
    }

    let (negative, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest.trim_start()),
        None => (false, trimmed),
    };
    let span = humantime::parse_duration(body)
        .map_err(|e| Error::format(format!("'{text}': {e}")))?;
    let seconds = span.as_secs_f64();
    Ok(if negative { -seconds } else { seconds })
}

/// Digits only. Read as `f64` so hours and bare second counts have no ceiling.
fn parse_field(field: &str) -> Option<f64> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

fn parse_millis(frac: &str) -> Option<u64> {
    if frac.is_empty() || frac.len() > 3 || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    format!("{frac:0<3}").parse().ok()
}
