//! Utilities for date formatting
//!
//! Sales dates arrive as day-month-year text ("05-03-2024"). The components
//! are reordered explicitly before building the date so the value is never
//! read month-first.

use chrono::NaiveDate;

/// Shown instead of a date that cannot be read
pub const INVALID_DATE: &str = "Invalid date";

/// Parse a day-month-year date separated by '-', '/' or '.'.
/// ISO "YYYY-MM-DD" input is recognised by its four-digit first part.
pub fn parse_day_month_year(date_str: &str) -> Option<NaiveDate> {
    let date_part = date_str.trim().split('T').next()?;
    let parts: Vec<&str> = date_part.split(['-', '/', '.']).collect();
    let [first, second, third] = parts.as_slice() else {
        return None;
    };

    let (day, month, year) = if first.len() == 4 {
        (third, second, first)
    } else {
        (first, second, third)
    };

    let day: u32 = day.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    let year: i32 = year.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Format a sale date for the table
/// Example: "05-03-2024" -> "March 5, 2024"
pub fn format_sale_date(date_str: Option<&str>) -> String {
    date_str
        .and_then(parse_day_month_year)
        .map(|date| date.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|| INVALID_DATE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_comes_first() {
        let date = parse_day_month_year("05-03-2024").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert_eq!(format_sale_date(Some("05-03-2024")), "March 5, 2024");
    }

    #[test]
    fn test_other_separators() {
        assert_eq!(format_sale_date(Some("31/12/2023")), "December 31, 2023");
        assert_eq!(format_sale_date(Some("1.2.2022")), "February 1, 2022");
    }

    #[test]
    fn test_iso_input() {
        assert_eq!(format_sale_date(Some("2024-03-05")), "March 5, 2024");
        assert_eq!(
            format_sale_date(Some("2024-03-05T10:00:00Z")),
            "March 5, 2024"
        );
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_sale_date(None), INVALID_DATE);
        assert_eq!(format_sale_date(Some("")), INVALID_DATE);
        assert_eq!(format_sale_date(Some("invalid")), INVALID_DATE);
        assert_eq!(format_sale_date(Some("31-02-2024")), INVALID_DATE);
        assert_eq!(format_sale_date(Some("05-13-2024")), INVALID_DATE);
    }
}
