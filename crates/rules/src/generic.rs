//! Variant-independent checks: name, budget, dates.
//!
//! These apply to every campaign regardless of variant. Date-against-
//! today checks take an explicit reference date so that validation stays
//! deterministic; the transport layer supplies the clock at submission
//! time.

use adforge_core::{ErrorCode, Field, ValidationError};
use chrono::NaiveDate;

use crate::fields::{char_len, is_blank};

pub const MAX_NAME_LENGTH: usize = 255;

pub fn check_name(name: &str, enforce_required: bool) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    if enforce_required && is_blank(name) {
        errors.push(ValidationError::new(
            Field::Name,
            ErrorCode::MinCount,
            "Campaign name is required",
        ));
    }
    if char_len(name) > MAX_NAME_LENGTH {
        errors.push(ValidationError::new(
            Field::Name,
            ErrorCode::MaxLength,
            format!("Campaign name exceeds {MAX_NAME_LENGTH} characters"),
        ));
    }
    errors
}

pub fn check_budget(daily_budget_micros: i64) -> Vec<ValidationError> {
    if daily_budget_micros < 1 {
        vec![ValidationError::new(
            Field::DailyBudget,
            ErrorCode::BudgetTooLow,
            "Daily budget must be greater than 0",
        )]
    } else {
        Vec::new()
    }
}

/// The end date, when present, must not precede the start date.
pub fn check_date_order(start: NaiveDate, end: Option<NaiveDate>) -> Vec<ValidationError> {
    match end {
        Some(end) if end < start => vec![ValidationError::new(
            Field::EndDate,
            ErrorCode::DateOrder,
            "End date must be after start date",
        )],
        _ => Vec::new(),
    }
}

/// Submission-time helper: a date may not lie before the supplied
/// reference day. Not called by the engine itself.
pub fn date_not_past(field: Field, date: NaiveDate, today: NaiveDate) -> Option<ValidationError> {
    if date < today {
        Some(ValidationError::new(
            field,
            ErrorCode::DateInPast,
            format!("{} cannot be in the past", field.display_name()),
        ))
    } else {
        None
    }
}
