//! Cross-field invariants.
//!
//! Checks that span multiple fields or multiple entries of one field.
//! Each runs only when the variant's rule record declares the relevant
//! flag, so a variant that never uses a rule can never trip it.

use std::collections::HashSet;

use adforge_core::{CandidateCampaign, ErrorCode, Field, TargetKind, ValidationError};

use crate::fields::{char_len, is_blank};
use crate::table::VariantRules;

/// At least one non-blank description must fit the short limit.
/// Gated by the descriptions spec; only Performance Max declares it.
/// Runs only when there is at least one non-blank description, since an
/// empty list is already a minimum-count violation.
pub fn short_description(
    candidate: &CandidateCampaign,
    rules: &VariantRules,
    enforce_required: bool,
) -> Vec<ValidationError> {
    let Some(short_max) = rules.descriptions.short_max_length else {
        return Vec::new();
    };
    if !enforce_required {
        return Vec::new();
    }

    let non_blank: Vec<&String> = candidate
        .descriptions
        .iter()
        .filter(|d| !is_blank(d))
        .collect();
    if non_blank.is_empty() {
        return Vec::new();
    }

    if non_blank.iter().any(|d| char_len(d) <= short_max) {
        return Vec::new();
    }

    vec![ValidationError::new(
        Field::Descriptions,
        ErrorCode::ShortDescriptionMissing,
        format!(
            "{} requires at least one description of {} characters or fewer (short description requirement)",
            candidate.variant.display_name(),
            short_max
        ),
    )]
}

/// Keywords must be unique after trimming and case-folding. Later
/// occurrences are flagged, never the first, so N copies of a keyword
/// yield N-1 errors. The fold is Unicode's default, locale-independent.
pub fn keyword_uniqueness(
    candidate: &CandidateCampaign,
    rules: &VariantRules,
) -> Vec<ValidationError> {
    if !rules.keywords.unique {
        return Vec::new();
    }

    let mut errors = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for (i, keyword) in candidate.keywords.iter().enumerate() {
        if is_blank(keyword) {
            continue;
        }
        let normalized = keyword.trim().to_lowercase();
        if !seen.insert(normalized) {
            errors.push(ValidationError::at_index(
                Field::Keywords,
                i,
                ErrorCode::DuplicateKeyword,
                format!("Duplicate keyword detected: '{keyword}'"),
            ));
        }
    }

    errors
}

/// Variants that declare image slots need at least one marketing slot
/// (landscape or square) filled; a logo alone is not enough.
pub fn marketing_image_present(
    candidate: &CandidateCampaign,
    rules: &VariantRules,
    enforce_required: bool,
) -> Vec<ValidationError> {
    if rules.image_slots.is_empty() || !enforce_required {
        return Vec::new();
    }

    let any_marketing = rules
        .image_slots
        .iter()
        .filter(|spec| spec.marketing)
        .any(|spec| candidate.images.filled(spec.slot));
    if any_marketing {
        return Vec::new();
    }

    vec![ValidationError::new(
        Field::Images,
        ErrorCode::ImageRequired,
        format!(
            "{} campaigns require at least one marketing image (landscape or square)",
            candidate.variant.display_name()
        ),
    )]
}

/// A selected strategy must be permitted for the variant. No selection
/// is not an error; the default is implied but never filled in here.
pub fn strategy_allowed(
    candidate: &CandidateCampaign,
    rules: &VariantRules,
) -> Vec<ValidationError> {
    let Some(strategy) = candidate.bidding_strategy else {
        return Vec::new();
    };
    if rules.allows_strategy(strategy) {
        return Vec::new();
    }

    let permitted: Vec<&str> = rules.strategies.iter().map(|s| s.as_str()).collect();
    vec![ValidationError::new(
        Field::BiddingStrategy,
        ErrorCode::StrategyNotAllowed,
        format!(
            "Bidding strategy {} is not valid for {} campaigns. Valid options: {}",
            strategy.as_str(),
            candidate.variant.display_name(),
            permitted.join(", ")
        ),
    )]
}

/// Strategies with a target kind demand the matching numeric target,
/// present and positive. Over-specifying an unused target is accepted.
pub fn target_required(
    candidate: &CandidateCampaign,
    enforce_required: bool,
) -> Vec<ValidationError> {
    if !enforce_required {
        return Vec::new();
    }
    let Some(strategy) = candidate.bidding_strategy else {
        return Vec::new();
    };

    match strategy.requires_target() {
        TargetKind::Cpa => {
            if candidate.target_cpa_micros.map(|v| v > 0).unwrap_or(false) {
                Vec::new()
            } else {
                vec![ValidationError::new(
                    Field::TargetCpa,
                    ErrorCode::TargetRequired,
                    format!(
                        "Target CPA value is required for the {} bidding strategy",
                        strategy.as_str()
                    ),
                )]
            }
        }
        TargetKind::Roas => {
            if candidate
                .target_roas
                .map(|v| v.is_finite() && v > 0.0)
                .unwrap_or(false)
            {
                Vec::new()
            } else {
                vec![ValidationError::new(
                    Field::TargetRoas,
                    ErrorCode::TargetRequired,
                    format!(
                        "Target ROAS value is required for the {} bidding strategy",
                        strategy.as_str()
                    ),
                )]
            }
        }
        TargetKind::None => Vec::new(),
    }
}
