//! Per-field-kind evaluators.
//!
//! Each check is a pure function from a value and its spec to a list of
//! violations. Blank entries (empty or whitespace-only) are treated as
//! absent: they never satisfy a minimum and are skipped for length
//! checks, so a form cannot be padded with empty strings.

use adforge_core::{
    CampaignVariant, ErrorCode, Field, ImageAssets, ValidationError,
};

use crate::table::{ImageSlotSpec, ListFieldSpec, SingleFieldSpec, UrlFieldSpec};

pub(crate) fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Character count in Unicode scalar values, not bytes.
pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn entry_label(field: Field) -> &'static str {
    match field {
        Field::Headlines => "Headline",
        Field::Descriptions => "Description",
        Field::Keywords => "Keyword",
        _ => "Entry",
    }
}

/// Bounded text list: minimum/maximum cardinality plus a per-entry
/// length limit.
pub fn check_text_list(
    variant: CampaignVariant,
    field: Field,
    values: &[String],
    spec: &ListFieldSpec,
    enforce_required: bool,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let non_blank_count = values.iter().filter(|v| !is_blank(v)).count();

    if enforce_required && spec.required && non_blank_count < spec.min_count {
        let mut message = format!(
            "{} campaigns require at least {} {}",
            variant.display_name(),
            spec.min_count,
            field.display_name()
        );
        if let Some(note) = spec.min_note {
            message.push_str(&format!(" ({note})"));
        }
        errors.push(ValidationError::new(field, ErrorCode::MinCount, message));
    }

    if non_blank_count > spec.max_count {
        errors.push(ValidationError::new(
            field,
            ErrorCode::MaxCount,
            format!(
                "{} campaigns allow at most {} {}",
                variant.display_name(),
                spec.max_count,
                field.display_name()
            ),
        ));
    }

    for (i, value) in values.iter().enumerate() {
        if is_blank(value) {
            continue;
        }
        if char_len(value) > spec.max_length {
            errors.push(ValidationError::at_index(
                field,
                i,
                ErrorCode::MaxLength,
                format!(
                    "{} {} exceeds {} characters",
                    entry_label(field),
                    i + 1,
                    spec.max_length
                ),
            ));
        }
    }

    errors
}

/// Single text field: the list semantics scalarized.
pub fn check_single_text(
    variant: CampaignVariant,
    field: Field,
    value: Option<&str>,
    spec: &SingleFieldSpec,
    enforce_required: bool,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let present = value.map(|v| !is_blank(v)).unwrap_or(false);

    if enforce_required && spec.required && !present {
        errors.push(ValidationError::new(
            field,
            ErrorCode::MinCount,
            format!(
                "{} campaigns require a {}",
                variant.display_name(),
                field.display_name()
            ),
        ));
    }

    if let Some(v) = value {
        if !is_blank(v) && char_len(v) > spec.max_length {
            errors.push(ValidationError::new(
                field,
                ErrorCode::MaxLength,
                format!(
                    "{} exceeds {} characters",
                    field.display_name(),
                    spec.max_length
                ),
            ));
        }
    }

    errors
}

/// A URL is acceptable when it parses as an absolute http(s) URL.
pub(crate) fn is_valid_url(value: &str) -> bool {
    match url::Url::parse(value) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

pub fn check_url_field(
    variant: CampaignVariant,
    field: Field,
    value: Option<&str>,
    spec: &UrlFieldSpec,
    enforce_required: bool,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let present = value.map(|v| !is_blank(v)).unwrap_or(false);

    if enforce_required && spec.required && !present {
        errors.push(ValidationError::new(
            field,
            ErrorCode::UrlRequired,
            format!(
                "{} campaigns require a {}",
                variant.display_name(),
                field.display_name()
            ),
        ));
    }

    if let Some(v) = value {
        if !is_blank(v) && !is_valid_url(v) {
            errors.push(ValidationError::new(
                field,
                ErrorCode::UrlInvalid,
                format!("Invalid URL format: {v}"),
            ));
        }
    }

    errors
}

/// URL well-formedness for each filled image slot. Dimension policy is
/// deliberately not checked here; pixel measurement belongs to the
/// image-audit layer.
pub fn check_image_urls(images: &ImageAssets, slots: &[ImageSlotSpec]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for spec in slots {
        if let Some(u) = images.url(spec.slot) {
            if !is_blank(u) && !is_valid_url(u) {
                errors.push(ValidationError::new(
                    Field::Images,
                    ErrorCode::UrlInvalid,
                    format!(
                        "{} image URL has invalid format: {}",
                        spec.slot.display_name(),
                        u
                    ),
                ));
            }
        }
    }
    errors
}

/// A CPA target, when present, must be a positive amount of micros.
pub fn check_cpa_target(value: Option<i64>) -> Vec<ValidationError> {
    match value {
        Some(v) if v <= 0 => vec![ValidationError::new(
            Field::TargetCpa,
            ErrorCode::TargetInvalid,
            "Target CPA must be greater than 0",
        )],
        _ => Vec::new(),
    }
}

/// A ROAS target, when present, must be a finite positive multiplier.
pub fn check_roas_target(value: Option<f64>) -> Vec<ValidationError> {
    match value {
        Some(v) if !v.is_finite() || v <= 0.0 => vec![ValidationError::new(
            Field::TargetRoas,
            ErrorCode::TargetInvalid,
            "Target ROAS must be a positive number",
        )],
        _ => Vec::new(),
    }
}
