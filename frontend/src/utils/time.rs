use chrono::{Local, NaiveDate};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// ISO value for `<input type="date">` defaults.
pub fn today_iso() -> String {
    today().format("%Y-%m-%d").to_string()
}

pub fn parse_date_input(value: &str, error_message: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| error_message.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn today_iso_is_a_valid_date_input_value() {
        let value = today_iso();
        assert!(parse_date_input(&value, "bad").is_ok());
    }

    #[test]
    fn parse_date_input_rejects_malformed_values() {
        assert_eq!(
            parse_date_input("08/07/2026", "Date must be in YYYY-MM-DD format."),
            Err("Date must be in YYYY-MM-DD format.".to_string())
        );
        let parsed = parse_date_input(" 2026-08-07 ", "bad").unwrap();
        assert_eq!(parsed, NaiveDate::from_ymd_opt(2026, 8, 7).unwrap());
    }
}
