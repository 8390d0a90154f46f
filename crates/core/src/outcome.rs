//! Validation outcome types.
//!
//! Every validation failure is reported as data so a caller can render
//! the complete set of violations at once; nothing here panics or
//! short-circuits.

use serde::{Deserialize, Serialize};

/// Typed identifier for each campaign field the validator can flag.
/// Field access is never keyed by name strings; adding or removing a
/// field is a compile-checked change.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    DailyBudget,
    StartDate,
    EndDate,
    Headlines,
    LongHeadline,
    Descriptions,
    BusinessName,
    Keywords,
    Images,
    FinalUrl,
    VideoUrl,
    MerchantCenterId,
    BiddingStrategy,
    TargetCpa,
    TargetRoas,
}

impl Field {
    pub fn display_name(&self) -> &'static str {
        match self {
            Field::Name => "campaign name",
            Field::DailyBudget => "daily budget",
            Field::StartDate => "start date",
            Field::EndDate => "end date",
            Field::Headlines => "headlines",
            Field::LongHeadline => "long headline",
            Field::Descriptions => "descriptions",
            Field::BusinessName => "business name",
            Field::Keywords => "keywords",
            Field::Images => "images",
            Field::FinalUrl => "final URL",
            Field::VideoUrl => "video URL",
            Field::MerchantCenterId => "Merchant Center ID",
            Field::BiddingStrategy => "bidding strategy",
            Field::TargetCpa => "target CPA",
            Field::TargetRoas => "target ROAS",
        }
    }
}

/// Machine-checkable violation codes, stable across message rewording.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    MinCount,
    MaxCount,
    MaxLength,
    DuplicateKeyword,
    ShortDescriptionMissing,
    ImageRequired,
    StrategyNotAllowed,
    TargetRequired,
    TargetInvalid,
    UrlRequired,
    UrlInvalid,
    BudgetTooLow,
    DateOrder,
    DateInPast,
}

/// One violation: which field, optionally which list entry, why.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationError {
    pub field: Field,
    /// Zero-based index into a list field, when the violation concerns a
    /// single entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    pub code: ErrorCode,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: Field, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            field,
            index: None,
            code,
            message: message.into(),
        }
    }

    pub fn at_index(field: Field, index: usize, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            field,
            index: Some(index),
            code,
            message: message.into(),
        }
    }
}

/// The result of validating one candidate campaign. Warnings never affect
/// `valid`; a non-automatable variant can still be a valid draft.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<String>,
}

impl ValidationOutcome {
    pub fn from_parts(errors: Vec<ValidationError>, warnings: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    pub fn has_code(&self, code: ErrorCode) -> bool {
        self.errors.iter().any(|e| e.code == code)
    }

    pub fn errors_for(&self, field: Field) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter().filter(move |e| e.field == field)
    }

    pub fn count_code(&self, code: ErrorCode) -> usize {
        self.errors.iter().filter(|e| e.code == code).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_tracks_error_list() {
        let ok = ValidationOutcome::from_parts(vec![], vec!["heads up".to_string()]);
        assert!(ok.valid);

        let bad = ValidationOutcome::from_parts(
            vec![ValidationError::new(
                Field::Headlines,
                ErrorCode::MinCount,
                "need more headlines",
            )],
            vec![],
        );
        assert!(!bad.valid);
        assert!(bad.has_code(ErrorCode::MinCount));
        assert_eq!(bad.errors_for(Field::Headlines).count(), 1);
    }

    #[test]
    fn codes_serialize_screaming_snake() {
        let json = serde_json::to_string(&ErrorCode::ShortDescriptionMissing).unwrap();
        assert_eq!(json, "\"SHORT_DESCRIPTION_MISSING\"");
        let json = serde_json::to_string(&ErrorCode::DuplicateKeyword).unwrap();
        assert_eq!(json, "\"DUPLICATE_KEYWORD\"");
    }
}
