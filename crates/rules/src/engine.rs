//! Validation engine.
//!
//! Resolves the candidate's variant rules, runs every applicable field
//! evaluator and cross-field invariant, and returns the complete set of
//! violations as data. Two entry points share the same machinery:
//! `validate_for_publish` enforces full required-ness, `validate_draft`
//! relaxes presence checks so a half-edited form can still be saved.

use adforge_core::{CandidateCampaign, Field, ValidationOutcome};
use tracing::debug;

use crate::table::rules_for;
use crate::{fields, generic, invariants};

/// Stateless validator over the static rule table. Safe to share across
/// threads; every call is a pure function of its input.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationEngine;

impl ValidationEngine {
    pub fn new() -> Self {
        Self
    }

    /// Full validation for the automated publish path: every required
    /// field and asset must be present.
    pub fn validate_for_publish(&self, candidate: &CandidateCampaign) -> ValidationOutcome {
        self.run(candidate, true)
    }

    /// Draft validation: presence requirements are relaxed, content
    /// checks (counts, lengths, duplicates, formats) still apply.
    pub fn validate_draft(&self, candidate: &CandidateCampaign) -> ValidationOutcome {
        self.run(candidate, false)
    }

    fn run(&self, candidate: &CandidateCampaign, enforce_required: bool) -> ValidationOutcome {
        let rules = rules_for(candidate.variant);
        let mut errors = Vec::new();

        // Variant-independent fields first.
        errors.extend(generic::check_name(&candidate.name, enforce_required));
        errors.extend(generic::check_budget(candidate.daily_budget_micros));
        errors.extend(generic::check_date_order(
            candidate.start_date,
            candidate.end_date,
        ));

        // Variant-specific fields in declaration order. A field the
        // variant does not declare is skipped outright, never evaluated
        // against a vacuous spec.
        if rules.headlines.shown() {
            errors.extend(fields::check_text_list(
                candidate.variant,
                Field::Headlines,
                &candidate.headlines,
                &rules.headlines,
                enforce_required,
            ));
        }
        if rules.long_headline.shown() {
            errors.extend(fields::check_single_text(
                candidate.variant,
                Field::LongHeadline,
                candidate.long_headline.as_deref(),
                &rules.long_headline,
                enforce_required,
            ));
        }
        if rules.descriptions.shown() {
            errors.extend(fields::check_text_list(
                candidate.variant,
                Field::Descriptions,
                &candidate.descriptions,
                &rules.descriptions,
                enforce_required,
            ));
        }
        if rules.business_name.shown() {
            errors.extend(fields::check_single_text(
                candidate.variant,
                Field::BusinessName,
                candidate.business_name.as_deref(),
                &rules.business_name,
                enforce_required,
            ));
        }
        if rules.keywords.shown() {
            errors.extend(fields::check_text_list(
                candidate.variant,
                Field::Keywords,
                &candidate.keywords,
                &rules.keywords,
                enforce_required,
            ));
        }
        if !rules.image_slots.is_empty() {
            errors.extend(fields::check_image_urls(&candidate.images, rules.image_slots));
        }
        if rules.final_url.shown() {
            errors.extend(fields::check_url_field(
                candidate.variant,
                Field::FinalUrl,
                candidate.final_url.as_deref(),
                &rules.final_url,
                enforce_required,
            ));
        }
        if rules.video_url.shown() {
            errors.extend(fields::check_url_field(
                candidate.variant,
                Field::VideoUrl,
                candidate.video_url.as_deref(),
                &rules.video_url,
                enforce_required,
            ));
        }
        if rules.merchant_center_id.shown() {
            errors.extend(fields::check_single_text(
                candidate.variant,
                Field::MerchantCenterId,
                candidate.merchant_center_id.as_deref(),
                &rules.merchant_center_id,
                enforce_required,
            ));
        }
        errors.extend(fields::check_cpa_target(candidate.target_cpa_micros));
        errors.extend(fields::check_roas_target(candidate.target_roas));

        // Cross-field invariants in fixed order; nothing short-circuits.
        errors.extend(invariants::short_description(candidate, rules, enforce_required));
        errors.extend(invariants::keyword_uniqueness(candidate, rules));
        errors.extend(invariants::marketing_image_present(
            candidate,
            rules,
            enforce_required,
        ));
        errors.extend(invariants::strategy_allowed(candidate, rules));
        errors.extend(invariants::target_required(candidate, enforce_required));

        let mut warnings = Vec::new();
        if !rules.automated_publish {
            if let Some(caveat) = rules.publish_caveat {
                warnings.push(caveat.to_string());
            }
        }

        metrics::counter!("adforge.validation.runs").increment(1);
        if !errors.is_empty() {
            metrics::counter!("adforge.validation.invalid").increment(1);
        }
        debug!(
            variant = candidate.variant.display_name(),
            publish = enforce_required,
            errors = errors.len(),
            warnings = warnings.len(),
            "Campaign validated"
        );

        ValidationOutcome::from_parts(errors, warnings)
    }
}
