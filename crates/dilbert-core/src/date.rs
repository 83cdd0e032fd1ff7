//! Strip date validation.
//!
//! The date must be exactly `YYYY-MM-DD`: four-digit year, two-digit month
//! and day, literal hyphens, nothing around it. chrono alone accepts
//! `2021-1-5` and short years, so the shape is checked first.

use std::fmt;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::error::StripError;

/// Date layout understood by the strip site, in chrono syntax.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

static DATE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date shape regex"));

/// A validated strip date. Keeps the text exactly as given, since that text
/// is what goes into the page URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripDate {
    text: String,
}

impl StripDate {
    /// Parses a single `YYYY-MM-DD` value.
    pub fn parse(s: &str) -> Result<Self, StripError> {
        if !DATE_SHAPE.is_match(s) {
            return Err(StripError::InvalidDate);
        }
        // Rejects impossible days such as 2021-02-30.
        NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| StripError::InvalidDate)?;
        Ok(Self {
            text: s.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for StripDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Validates the full process argument list (program name first) and
/// returns the single date argument.
///
/// No range check is made: dates before the strip existed or in the future
/// pass, and the site decides.
pub fn validate_date<S: AsRef<str>>(args: &[S]) -> Result<StripDate, StripError> {
    match args {
        [_, date] => StripDate::parse(date.as_ref()),
        _ => Err(StripError::ArgCount),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn kind_of(args: &[&str]) -> ErrorKind {
        validate_date(args).unwrap_err().kind()
    }

    #[test]
    fn accepts_single_valid_date() {
        let d = validate_date(&["dilbert", "2021-06-15"]).unwrap();
        assert_eq!(d.as_str(), "2021-06-15");
        assert_eq!(d.to_string(), "2021-06-15");
    }

    #[test]
    fn rejects_wrong_argument_count() {
        assert_eq!(kind_of(&[]), ErrorKind::ArgCount);
        assert_eq!(kind_of(&["dilbert"]), ErrorKind::ArgCount);
        assert_eq!(
            kind_of(&["dilbert", "2021-06-15", "2021-06-16"]),
            ErrorKind::ArgCount
        );
    }

    #[test]
    fn argument_count_checked_before_format() {
        assert_eq!(kind_of(&["dilbert", "hello", "world"]), ErrorKind::ArgCount);
    }

    #[test]
    fn rejects_malformed_dates() {
        for bad in [
            "2021-13-40",
            "hello",
            "21-01-01",
            "not-a-date",
            "2021-1-05",
            "2021-01-5",
            " 2021-01-05",
            "2021-01-05 ",
            "2021/01/05",
            "+2021-01-05",
            "12021-01-05",
            "",
        ] {
            assert_eq!(kind_of(&["dilbert", bad]), ErrorKind::InvalidDate, "{bad:?}");
        }
    }

    #[test]
    fn rejects_impossible_calendar_days() {
        assert_eq!(kind_of(&["dilbert", "2021-02-30"]), ErrorKind::InvalidDate);
        assert_eq!(kind_of(&["dilbert", "2021-02-29"]), ErrorKind::InvalidDate);
        assert!(validate_date(&["dilbert", "2020-02-29"]).is_ok());
    }

    #[test]
    fn no_business_range_check() {
        assert!(validate_date(&["dilbert", "1900-01-01"]).is_ok());
        assert!(validate_date(&["dilbert", "2999-12-31"]).is_ok());
    }

    #[test]
    fn works_with_owned_strings() {
        let args: Vec<String> = vec!["dilbert".into(), "2020-01-01".into()];
        assert!(validate_date(&args).is_ok());
    }
}
