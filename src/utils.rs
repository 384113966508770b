//! Field level parsing. Nothing in here fails:
//! numbers fall back to `NaN`, timestamps to `None`.
use hifitime::Unit;

use crate::{
    constants::TWO_DIGIT_YEAR_PIVOT,
    prelude::{Duration, Epoch},
};

/// Parses a number, `NaN` when it does not parse (empty field included).
pub fn parse_float(s: &str) -> f64 {
    s.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// Numeric field at `index`, `NaN` when missing or invalid.
pub fn float(fields: &[String], index: usize) -> f64 {
    optional_float(fields, index).unwrap_or(f64::NAN)
}

/// Numeric field at `index`. `None` when the field is not carried
/// (empty, or sentence too short), `Some(NaN)` when it is carried but invalid.
pub fn optional_float(fields: &[String], index: usize) -> Option<f64> {
    fields
        .get(index)
        .filter(|s| !s.trim().is_empty())
        .map(|s| parse_float(s))
}

/// Text field at `index`, empty when missing.
pub fn text(fields: &[String], index: usize) -> &str {
    fields.get(index).map(String::as_str).unwrap_or_default()
}

/// Text field at `index`, `None` when missing or empty.
pub fn optional_text(fields: &[String], index: usize) -> Option<String> {
    fields
        .get(index)
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
}

/// Converts a `(d)ddmm.mmmm` coordinate and its hemisphere to signed decimal degrees.
/// `negative` is the hemisphere letter that flips the sign (`S` or `W`).
pub fn coordinate(value: &str, hemisphere: &str, negative: &str) -> f64 {
    let raw = parse_float(value);
    let degrees = (raw / 100.0).trunc();
    let minutes = raw - degrees * 100.0;
    let ddeg = degrees + minutes / 60.0;
    if hemisphere.trim() == negative {
        -ddeg
    } else {
        ddeg
    }
}

/// Latitude in decimal degrees, from the value and hemisphere fields at `index`, `index +1`
pub fn latitude(fields: &[String], index: usize) -> f64 {
    coordinate(text(fields, index), text(fields, index + 1), "S")
}

/// Longitude in decimal degrees, from the value and hemisphere fields at `index`, `index +1`
pub fn longitude(fields: &[String], index: usize) -> f64 {
    coordinate(text(fields, index), text(fields, index + 1), "W")
}

/// Splits `hhmmss(.sss)` into hours, minutes, seconds and nanoseconds.
fn hms(s: &str) -> Option<(u8, u8, u8, u32)> {
    let (hms, frac) = s.trim().split_once('.').unwrap_or((s.trim(), ""));

    if hms.len() != 6 || !hms.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if frac.len() > 9 || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let hours = hms[0..2].parse::<u8>().ok()?;
    let minutes = hms[2..4].parse::<u8>().ok()?;
    let seconds = hms[4..6].parse::<u8>().ok()?;

    if hours > 23 || minutes > 59 || seconds > 60 {
        return None;
    }

    let nanos = if frac.is_empty() {
        0
    } else {
        format!("{:0<9}", frac).parse::<u32>().ok()?
    };

    Some((hours, minutes, seconds, nanos))
}

/// Time of day (elapsed since UTC midnight) from a `hhmmss(.sss)` field.
pub fn time_of_day(s: &str) -> Option<Duration> {
    let (hours, minutes, seconds, nanos) = hms(s)?;
    Some(
        Unit::Hour * hours as i64
            + Unit::Minute * minutes as i64
            + Unit::Second * seconds as i64
            + Unit::Nanosecond * nanos as i64,
    )
}

/// UTC [Epoch] from calendar fields and a `hhmmss(.sss)` time field.
pub fn epoch(year: i32, month: u8, day: u8, time: &str) -> Option<Epoch> {
    // 4 digit years only
    if !(1000..=9999).contains(&year) {
        return None;
    }
    let (hours, minutes, seconds, nanos) = hms(time)?;
    Epoch::maybe_from_gregorian_utc(year, month, day, hours, minutes, seconds, nanos).ok()
}

/// UTC [Epoch] from a `ddmmyy` date field and a `hhmmss(.sss)` time field.
pub fn datetime(date: &str, time: &str) -> Option<Epoch> {
    let date = date.trim();
    if date.len() != 6 || !date.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let day = date[0..2].parse::<u8>().ok()?;
    let month = date[2..4].parse::<u8>().ok()?;
    let year = date[4..6].parse::<i32>().ok()?;

    let year = if year < TWO_DIGIT_YEAR_PIVOT {
        2000 + year
    } else {
        1900 + year
    };

    epoch(year, month, day, time)
}
