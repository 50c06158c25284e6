//! Release years from the free-form dates the catalogs hand out.

// Use 3rd party
use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime};
use log::warn;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ReleaseYear {
    pub year: i32,
    /// The date did not parse and `year` is a substitute.
    pub was_fallback: bool,
}

impl ReleaseYear {
    pub fn parsed(year: i32) -> Self {
        Self {
            year,
            was_fallback: false,
        }
    }

    pub fn fallback(year: i32) -> Self {
        Self {
            year,
            was_fallback: true,
        }
    }
}

pub fn current_year() -> i32 {
    Local::now().year()
}

/// Year of `raw`, falling back to the current year.
///
/// A round must never fail because of a bad date, so unparseable input is
/// replaced silently. The substitution is still visible through
/// [`ReleaseYear::was_fallback`] and a warning in the log.
pub fn extract_year(raw: &str) -> ReleaseYear {
    extract_year_or(raw, current_year())
}

pub fn extract_year_or(raw: &str, fallback_year: i32) -> ReleaseYear {
    match parse_year(raw) {
        Some(year) => ReleaseYear::parsed(year),
        None => {
            warn!("unparseable release date {:?}, using {}", raw, fallback_year);
            ReleaseYear::fallback(fallback_year)
        }
    }
}

fn parse_year(raw: &str) -> Option<i32> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    // iTunes: 2013-04-19T12:00:00Z
    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return Some(date.year());
    }
    if let Ok(date) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(date.year());
    }
    // Deezer: 2001-03-07
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.year());
    }
    if raw.len() == 7 {
        if let Ok(date) = NaiveDate::parse_from_str(&format!("{}-01", raw), "%Y-%m-%d") {
            return Some(date.year());
        }
    }
    if raw.len() == 4 && raw.bytes().all(|b| b.is_ascii_digit()) {
        return raw.parse().ok();
    }
    None
}
