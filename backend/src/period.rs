//! Calendar month handling for report date ranges.
//!
//! Both endpoints resolve their inputs to a half-open `[start, end)` range
//! of whole calendar months before any query is built.

use chrono::NaiveDate;

use crate::error::AppError;

/// A calendar month. Construction guarantees the month number is valid and
/// the year is representable as a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Month {
    pub year: i32,
    pub month: u32,
}

impl Month {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    /// Parse a `YYYY-MM` string: four digit year, two digit month in 01..12.
    pub fn parse(value: &str) -> Option<Self> {
        let (year, month) = value.split_once('-')?;
        if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        if month.len() != 2 || !month.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        Self::new(year.parse().ok()?, month.parse().ok()?)
    }

    /// First day of this month.
    pub fn first_day(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap()
    }

    /// The following calendar month. December rolls over into January of
    /// the next year.
    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }
}

/// Half-open `[start, end)` date range covering whole calendar months.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Range covering exactly one calendar month.
    pub fn month(month: Month) -> Self {
        Self {
            start: month.first_day(),
            end: month.next().first_day(),
        }
    }

    /// Range covering `from`'s month through `to`'s month inclusive. The
    /// upper bound is the first day of the month after `to`.
    pub fn spanning(from: Month, to: Month) -> Result<Self, AppError> {
        if from > to {
            return Err(AppError::validation(
                "start_date must precede or equal end_date",
            ));
        }

        Ok(Self {
            start: from.first_day(),
            end: to.next().first_day(),
        })
    }
}
