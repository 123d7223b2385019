use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum NutritionError {
    #[error("invalid date range: start {start} is after end {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
}
