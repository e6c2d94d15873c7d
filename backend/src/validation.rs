//! Request validation for the Tally API
//!
//! Small helpers with clear, field-specific error messages. Handlers apply
//! them in presence, format, membership order; the first failure wins.

use crate::error::{ApiResult, AppError};
use crate::period::Month;

/// String validation helpers
pub mod string {
    use super::*;

    /// Validate required non-empty string
    pub fn required(value: &Option<String>, field: &str) -> ApiResult<String> {
        match value {
            Some(s) if !s.trim().is_empty() => Ok(s.trim().to_string()),
            Some(_) => Err(AppError::validation(format!("{} cannot be empty", field))),
            None => Err(AppError::validation(format!("{} is required", field))),
        }
    }

    /// Trimmed value of an optional string, with empty treated as absent
    pub fn optional(value: &Option<String>) -> Option<&str> {
        value
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// Numeric validation helpers
pub mod number {
    use super::*;

    /// Validate a month number in 1..=12
    pub fn month(value: &str) -> ApiResult<u32> {
        value
            .parse::<u32>()
            .ok()
            .filter(|m| (1..=12).contains(m))
            .ok_or_else(|| AppError::validation("month must be an integer between 1 and 12"))
    }

    /// Validate a year number
    pub fn year(value: &str) -> ApiResult<i32> {
        value
            .parse::<i32>()
            .map_err(|_| AppError::validation("year must be an integer"))
    }

    /// Validate an optional integer filter (empty treated as absent)
    pub fn optional_int(value: &Option<String>, field: &str) -> ApiResult<Option<i64>> {
        match super::string::optional(value) {
            None => Ok(None),
            Some(s) => s
                .parse::<i64>()
                .map(Some)
                .map_err(|_| AppError::validation(format!("{} must be an integer", field))),
        }
    }
}

/// Calendar period validation
pub mod period {
    use super::*;

    /// Parse a `YYYY-MM` string into a [`Month`]
    pub fn parse(value: &str, field: &str) -> ApiResult<Month> {
        Month::parse(value).ok_or_else(|| {
            AppError::validation(format!("Invalid {} format: expected YYYY-MM", field))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_string() {
        assert_eq!(
            string::required(&Some(" 2024-03 ".to_string()), "date").unwrap(),
            "2024-03"
        );

        let err = string::required(&None, "start_date").unwrap_err();
        assert_eq!(err.message(), "start_date is required");

        let err = string::required(&Some("   ".to_string()), "end_date").unwrap_err();
        assert_eq!(err.message(), "end_date cannot be empty");
    }

    #[test]
    fn test_month_number() {
        assert_eq!(number::month("1").unwrap(), 1);
        assert_eq!(number::month("12").unwrap(), 12);

        for bad in ["0", "13", "-3", "march", "1.5", ""] {
            let err = number::month(bad).unwrap_err();
            assert_eq!(err.message(), "month must be an integer between 1 and 12");
        }
    }

    #[test]
    fn test_year_number() {
        assert_eq!(number::year("2024").unwrap(), 2024);
        assert!(number::year("twenty24").is_err());
    }

    #[test]
    fn test_optional_int() {
        assert_eq!(number::optional_int(&None, "user_id").unwrap(), None);
        assert_eq!(
            number::optional_int(&Some("".to_string()), "user_id").unwrap(),
            None
        );
        assert_eq!(
            number::optional_int(&Some("7".to_string()), "user_id").unwrap(),
            Some(7)
        );

        let err = number::optional_int(&Some("seven".to_string()), "user_id").unwrap_err();
        assert_eq!(err.message(), "user_id must be an integer");
    }

    #[test]
    fn test_period_parse_message_names_the_field() {
        let err = period::parse("2024-13", "date").unwrap_err();
        assert_eq!(err.message(), "Invalid date format: expected YYYY-MM");

        let err = period::parse("junk", "start_date").unwrap_err();
        assert_eq!(err.message(), "Invalid start_date format: expected YYYY-MM");
    }
}
