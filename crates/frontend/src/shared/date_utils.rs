//! Date formatting for tables and date inputs.
//!
//! The backend sends ISO dates (`2024-03-15`) and datetimes
//! (`2024-03-15T14:02:26Z`); the UI shows them as `15/03/2024`.

use chrono::NaiveDate;

/// ISO datetime to `DD/MM/YYYY HH:MM`.
/// Example: "2024-03-15T14:02:26.123Z" -> "15/03/2024 14:02"
pub fn format_datetime(datetime_str: &str) -> String {
    let normalized = datetime_str.replacen(' ', "T", 1);
    if let Some((date_part, time_part)) = normalized.split_once('T') {
        if let Some(date) = parse_iso_date(date_part) {
            let hhmm: String = time_part.chars().take(5).collect();
            return format!("{} {}", format_naive_date(date), hhmm);
        }
    }
    datetime_str.to_string()
}

/// ISO date (or datetime) to `DD/MM/YYYY`
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split(['T', ' ']).next().unwrap_or(date_str);
    match parse_iso_date(date_part) {
        Some(date) => format_naive_date(date),
        None => date_str.to_string(),
    }
}

pub fn format_naive_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Table cell for an optional date ("—" when missing)
pub fn format_optional_date(date: Option<NaiveDate>) -> String {
    date.map(format_naive_date).unwrap_or_else(|| "—".to_string())
}

fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Value for `<input type="date">`
pub fn to_input_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Parse the value of `<input type="date">`; blank or invalid means "not set"
pub fn from_input_value(value: &str) -> Option<NaiveDate> {
    parse_iso_date(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15T14:02:26.123Z"), "15/03/2024 14:02");
        assert_eq!(format_datetime("2024-12-31 23:59:59"), "31/12/2024 23:59");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15/03/2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15/03/2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
    }

    #[test]
    fn test_input_value() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29);
        assert_eq!(to_input_value(date), "2024-02-29");
        assert_eq!(from_input_value("2024-02-29"), date);
        assert_eq!(from_input_value(""), None);
        assert_eq!(to_input_value(None), "");
        assert_eq!(format_optional_date(None), "—");
    }
}
