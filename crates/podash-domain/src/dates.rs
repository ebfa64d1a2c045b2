//! Export-date parsing
//!
//! The export-date row is free text and the entry style drifted over time:
//! day-first, month-first and ISO all occur. Formats are tried in a fixed
//! order and the first hit wins, so ambiguous dates like `03/04/2025`
//! resolve day-first.

use chrono::NaiveDate;

const FORMATS: &[&str] = &[
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%m/%d/%Y",
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d/%m/%y",
];

/// Parse an export-date cell. `None` when no known format matches;
/// callers keep the raw text for display either way.
pub fn parse_export_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    for fmt in FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Some(date);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_first() {
        let date = parse_export_date("15/01/2024").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }

    #[test]
    fn test_iso() {
        let date = parse_export_date("2024-01-15").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }

    #[test]
    fn test_month_first_when_day_first_impossible() {
        // 01/25/2024 cannot be day-first, falls through to %m/%d/%Y
        let date = parse_export_date("01/25/2024").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 25).unwrap());
    }

    #[test]
    fn test_ambiguous_resolves_day_first() {
        let date = parse_export_date("03/04/2025").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 4, 3).unwrap());
    }

    #[test]
    fn test_garbage_is_none() {
        assert!(parse_export_date("").is_none());
        assert!(parse_export_date("early May").is_none());
        assert!(parse_export_date("TBD").is_none());
    }
}
