use chrono::NaiveDate;

/// The browser's current local calendar date
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    date_from_parts(now.get_full_year() as i32, now.get_month() + 1, now.get_date()).unwrap_or_default()
}

pub fn date_from_parts(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Value of an `<input type="date">`; empty or malformed input is `None`
pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_from_parts() {
        assert_eq!(date_from_parts(2024, 2, 29), NaiveDate::from_ymd_opt(2024, 2, 29));
        assert_eq!(date_from_parts(2023, 2, 29), None);
        assert_eq!(date_from_parts(2024, 13, 1), None);
    }

    #[test]
    fn test_parse_input_date() {
        assert_eq!(parse_input_date("2024-05-01"), NaiveDate::from_ymd_opt(2024, 5, 1));
        assert_eq!(parse_input_date(""), None);
        assert_eq!(parse_input_date("05/01/2024"), None);
    }
}
