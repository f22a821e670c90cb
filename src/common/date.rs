//! Excel date serial conversions.
//!
//! Spreadsheets store dates as day counts with the time of day as the
//! fractional part. Workbooks use either the 1900 system (base 1899-12-30,
//! which absorbs the Lotus leap-year bug for every date after 1900-03-01) or
//! the 1904 system (base 1904-01-01).

use chrono::{Duration, NaiveDate, NaiveDateTime};

pub(crate) const SECONDS_PER_DAY: f64 = 86_400.0;

/// Date system declared by the workbook (`<workbookPr date1904="1"/>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateSystem {
    /// Windows default, serial 1 = 1900-01-01
    #[default]
    Excel1900,
    /// Legacy Mac default, serial 0 = 1904-01-01
    Excel1904,
}

impl DateSystem {
    fn base(self) -> Option<NaiveDate> {
        match self {
            Self::Excel1900 => NaiveDate::from_ymd_opt(1899, 12, 30),
            Self::Excel1904 => NaiveDate::from_ymd_opt(1904, 1, 1),
        }
    }
}

/// Convert a serial number to a date, discarding the time of day.
pub fn serial_to_date(serial: f64, system: DateSystem) -> Option<NaiveDate> {
    if !serial.is_finite() {
        return None;
    }
    let days = serial.floor() as i64;
    system.base()?.checked_add_signed(Duration::try_days(days)?)
}

/// Convert a date to its serial number.
pub fn date_to_serial(date: NaiveDate, system: DateSystem) -> Option<f64> {
    Some((date - system.base()?).num_days() as f64)
}

/// Parse a textual date or datetime, returning only the date part.
///
/// Accepts ISO 8601 dates (`2023-04-05`), ISO datetimes with `T` or space
/// separators, and US-style `04/05/2023`.
pub fn parse_date_text(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if let Ok(d) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(d);
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, fmt) {
            return Some(dt.date());
        }
    }
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(text) {
        return Some(dt.naive_local().date());
    }
    if let Ok(d) = NaiveDate::parse_from_str(text, "%m/%d/%Y") {
        return Some(d);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serial_to_date_discards_time() {
        // 45000.75 is 2023-03-15 18:00
        let d = serial_to_date(45000.75, DateSystem::Excel1900).unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2023, 3, 15).unwrap());
    }

    #[test]
    fn test_1904_system_offset() {
        let d1900 = serial_to_date(45000.0, DateSystem::Excel1900).unwrap();
        let d1904 = serial_to_date(45000.0 - 1462.0, DateSystem::Excel1904).unwrap();
        assert_eq!(d1900, d1904);
    }

    #[test]
    fn test_date_serial_roundtrip_anchor() {
        let d = NaiveDate::from_ymd_opt(2023, 3, 15).unwrap();
        assert_eq!(date_to_serial(d, DateSystem::Excel1900), Some(45000.0));
    }

    #[test]
    fn test_parse_date_text_forms() {
        let expected = NaiveDate::from_ymd_opt(2023, 4, 5).unwrap();
        assert_eq!(parse_date_text("2023-04-05"), Some(expected));
        assert_eq!(parse_date_text("2023-04-05T13:45:10"), Some(expected));
        assert_eq!(parse_date_text("2023-04-05 08:00:00.250"), Some(expected));
        assert_eq!(parse_date_text("04/05/2023"), Some(expected));
        assert_eq!(parse_date_text("yesterday"), None);
    }

    #[test]
    fn test_non_finite_serial_rejected() {
        assert_eq!(serial_to_date(f64::NAN, DateSystem::Excel1900), None);
    }
}
