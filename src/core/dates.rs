// src/core/dates.rs
use chrono::{Days, NaiveDate, NaiveDateTime};

/// Numbers above this are treated as spreadsheet serial dates.
pub const SERIAL_DATE_THRESHOLD: f64 = 25569.0;

/// Spreadsheet day zero. Serial 1 is 1899-12-31 under this anchor,
/// which absorbs the 1900 leap-year bug for every date after February 1900.
pub fn serial_epoch() -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(1899, 12, 30)
}

/// Convert a serial day count to a calendar date. The time of day is dropped.
pub fn serial_to_date(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() || serial < 0.0 {
        return None;
    }
    let days = serial.floor() as u64;
    serial_epoch()?.checked_add_days(Days::new(days))
}

/// Serial with its time-of-day fraction, rounded to the second.
pub fn serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    let date = serial_to_date(serial)?;
    let secs = ((serial - serial.floor()) * 86_400.0).round() as u32;
    let time = chrono::NaiveTime::from_num_seconds_from_midnight_opt(secs.min(86_399), 0)?;
    Some(date.and_time(time))
}

pub fn format_date(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

pub fn format_datetime(dt: &NaiveDateTime) -> String {
    if dt.time() == chrono::NaiveTime::MIN {
        format_date(dt.date())
    } else {
        dt.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

/// Render a number that sits next to a date label.
/// Large values are serials; small ones are kept verbatim.
pub fn number_as_date_text(n: f64) -> String {
    if n > SERIAL_DATE_THRESHOLD {
        if let Some(d) = serial_to_date(n) {
            return format_date(d);
        }
    }
    crate::core::sanitize::format_number(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serial_45000_is_march_15_2023() {
        let d = serial_to_date(45000.0).unwrap();
        assert_eq!(format_date(d), "2023-03-15");
    }

    #[test]
    fn fractional_serial_keeps_the_day() {
        let d = serial_to_date(45000.75).unwrap();
        assert_eq!(format_date(d), "2023-03-15");
    }

    #[test]
    fn serial_datetime_keeps_the_time() {
        let dt = serial_to_datetime(45000.5).unwrap();
        assert_eq!(format_datetime(&dt), "2023-03-15 12:00:00");
        assert_eq!(format_datetime(&serial_to_datetime(45000.0).unwrap()), "2023-03-15");
    }

    #[test]
    fn threshold_is_exclusive() {
        assert_eq!(number_as_date_text(25569.0), "25569");
        assert_eq!(number_as_date_text(25570.0), "1970-01-02");
        assert_eq!(number_as_date_text(12.5), "12.5");
    }

    #[test]
    fn negative_and_nan_are_rejected() {
        assert!(serial_to_date(-1.0).is_none());
        assert!(serial_to_date(f64::NAN).is_none());
    }
}
