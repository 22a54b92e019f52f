//! 12-hour clock strings ("05:50 AM") to fractional hours since midnight.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClockParseError {
    #[error("expected \"H:MM AM|PM\", got {0:?}")]
    Shape(String),
    #[error("hour out of range in {0:?}")]
    Hour(String),
    #[error("minute out of range in {0:?}")]
    Minute(String),
    #[error("unknown period marker in {0:?}")]
    Period(String),
}

/// Parse `H:MM AM|PM` into hours since midnight, in `[0, 24)`.
///
/// `12:xx AM` maps to hour 0 and `12:xx PM` stays 12, so
/// `"12:30 AM"` → 0.5 and `"12:00 PM"` → 12.0.
pub fn parse_clock(s: &str) -> Result<f64, ClockParseError> {
    let mut parts = s.split_whitespace();
    let (Some(time), Some(period), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(ClockParseError::Shape(s.to_string()));
    };

    let (hh, mm) = time.split_once(':').ok_or_else(|| ClockParseError::Shape(s.to_string()))?;
    let hh: u32 = hh.parse().map_err(|_| ClockParseError::Shape(s.to_string()))?;
    let mm: u32 = mm.parse().map_err(|_| ClockParseError::Shape(s.to_string()))?;

    if !(1..=12).contains(&hh) {
        return Err(ClockParseError::Hour(s.to_string()));
    }
    if mm > 59 {
        return Err(ClockParseError::Minute(s.to_string()));
    }

    let hh = match period {
        "AM" => {
            if hh == 12 {
                0
            } else {
                hh
            }
        }
        "PM" => {
            if hh == 12 {
                12
            } else {
                hh + 12
            }
        }
        _ => return Err(ClockParseError::Period(s.to_string())),
    };

    Ok(f64::from(hh) + f64::from(mm) / 60.0)
}

/// Lenient wrapper for chart code: on any parse failure, log a warning and
/// fall back to midnight instead of aborting the run.
pub fn hours_or_midnight(s: &str) -> f64 {
    match parse_clock(s) {
        Ok(hours) => hours,
        Err(err) => {
            log::warn!("unparseable clock time {s:?} ({err}), defaulting to midnight");
            0.0
        }
    }
}
