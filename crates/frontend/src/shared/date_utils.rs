//! Date helpers for the browser
use chrono::NaiveDate;

/// Today's date in the browser's local time zone
pub fn today() -> Option<NaiveDate> {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
}

/// "2024-03-15" or "2024-03-15T14:02:26Z" -> "15 Mar 2024"; anything else is returned unchanged
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%d %b %Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15 Mar 2024");
        assert_eq!(format_date("2024-03-15T14:02:26Z"), "15 Mar 2024");
        assert_eq!(format_date("soon"), "soon");
    }
}
