use std::fmt;

use chrono::{NaiveDate, Utc};
use serde::Serialize;

/// Calendar date as the native date input speaks it (`YYYY-MM-DD`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ServiceDate(NaiveDate);

impl ServiceDate {
    pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Parses the value of an `<input type="date">`.
    pub fn parse(ymd: &str) -> Option<Self> {
        let ymd = ymd.trim();
        // chrono's %Y takes a sign and short years; the input never sends those
        if ymd.len() != 10 || !ymd.bytes().next().is_some_and(|b| b.is_ascii_digit()) {
            return None;
        }
        NaiveDate::parse_from_str(ymd, "%Y-%m-%d").ok().map(Self)
    }

    /// Like [`ServiceDate::parse`], but also `None` for dates before `earliest`.
    pub fn parse_not_before(ymd: &str, earliest: ServiceDate) -> Option<Self> {
        Self::parse(ymd).filter(|d| *d >= earliest)
    }

    /// Today in the browser's local timezone.
    pub fn today() -> Self {
        let d = js_sys::Date::new_0();
        Self::new(d.get_full_year() as i32, d.get_month() + 1, d.get_date())
            .unwrap_or_else(|| Self(Utc::now().date_naive()))
    }
}

impl fmt::Display for ServiceDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_format() {
        let d = ServiceDate::parse("2024-02-15").unwrap();
        assert_eq!(d, ServiceDate::new(2024, 2, 15).unwrap());
        assert_eq!(d.to_string(), "2024-02-15");
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(ServiceDate::parse("").is_none());
        assert!(ServiceDate::parse("2024-2-15").is_none());
        assert!(ServiceDate::parse("2024/02/15").is_none());
        assert!(ServiceDate::parse("2024-13-01").is_none());
        assert!(ServiceDate::parse("2023-02-29").is_none());
        assert!(ServiceDate::parse("2024-04-31").is_none());
    }

    #[test]
    fn test_rejects_signed_year() {
        assert!(ServiceDate::parse("+024-02-15").is_none());
        assert!(ServiceDate::parse("-024-02-15").is_none());
    }

    #[test]
    fn test_leap_day() {
        assert!(ServiceDate::parse("2024-02-29").is_some());
        assert!(ServiceDate::parse("1900-02-29").is_none());
        assert!(ServiceDate::parse("2000-02-29").is_some());
    }

    #[test]
    fn test_chronological_order() {
        let a = ServiceDate::parse("2023-12-31").unwrap();
        let b = ServiceDate::parse("2024-01-01").unwrap();
        let c = ServiceDate::parse("2024-01-02").unwrap();
        assert!(a < b && b < c);
    }

    #[test]
    fn test_parse_not_before() {
        let earliest = ServiceDate::parse("2026-10-18").unwrap();
        assert_eq!(ServiceDate::parse_not_before("2026-10-17", earliest), None);
        assert_eq!(ServiceDate::parse_not_before("2026-10-18", earliest), Some(earliest));
        assert!(ServiceDate::parse_not_before("2026-10-19", earliest).is_some());
        assert_eq!(ServiceDate::parse_not_before("", earliest), None);
    }

    #[test]
    fn test_serializes_as_string() {
        let d = ServiceDate::new(2026, 10, 18).unwrap();
        assert_eq!(serde_json::to_string(&d).unwrap(), "\"2026-10-18\"");
    }
}
