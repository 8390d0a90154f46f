//! Pre-publish gate.
//!
//! The rule engine only says whether a candidate is a valid campaign;
//! whether it may proceed to the external ad platform is decided here.
//! A variant without automated publish support is blocked at the gate
//! even when the campaign itself is valid.

use adforge_core::{CampaignVariant, ValidationOutcome};
use adforge_rules::VariantQuery;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

/// The gate's verdict for one campaign.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishDecision {
    pub campaign_id: Uuid,
    pub variant: CampaignVariant,
    pub allowed: bool,
    /// Reasons the publish is refused; empty when allowed.
    pub blockers: Vec<String>,
    /// Non-blocking notes carried through from validation.
    pub warnings: Vec<String>,
    pub decided_at: DateTime<Utc>,
}

pub struct PublishGate;

impl PublishGate {
    /// Decide whether a validated campaign may be sent to the platform
    /// client. Refuses on any validation error and on variants the
    /// automated path cannot create.
    pub fn decide(
        campaign_id: Uuid,
        variant: CampaignVariant,
        outcome: &ValidationOutcome,
    ) -> PublishDecision {
        let mut blockers: Vec<String> = outcome.errors.iter().map(|e| e.message.clone()).collect();

        let (automated, caveat) = VariantQuery::automated_publish(variant);
        if !automated {
            blockers.push(
                caveat
                    .map(str::to_string)
                    .unwrap_or_else(|| "This campaign variant cannot be published automatically".to_string()),
            );
        }

        let allowed = blockers.is_empty();
        info!(
            campaign_id = %campaign_id,
            variant = variant.display_name(),
            allowed,
            blockers = blockers.len(),
            "Publish gate decision"
        );

        PublishDecision {
            campaign_id,
            variant,
            allowed,
            blockers,
            warnings: outcome.warnings.clone(),
            decided_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adforge_core::{ErrorCode, Field, ValidationError};

    fn clean_outcome() -> ValidationOutcome {
        ValidationOutcome::from_parts(vec![], vec![])
    }

    #[test]
    fn valid_automatable_campaign_passes_the_gate() {
        let decision = PublishGate::decide(
            Uuid::new_v4(),
            CampaignVariant::Search,
            &clean_outcome(),
        );
        assert!(decision.allowed);
        assert!(decision.blockers.is_empty());
    }

    #[test]
    fn validation_errors_block_publishing() {
        let outcome = ValidationOutcome::from_parts(
            vec![ValidationError::new(
                Field::Keywords,
                ErrorCode::MinCount,
                "Search campaigns require at least 1 keywords",
            )],
            vec![],
        );
        let decision = PublishGate::decide(Uuid::new_v4(), CampaignVariant::Search, &outcome);
        assert!(!decision.allowed);
        assert_eq!(decision.blockers.len(), 1);
    }

    #[test]
    fn decision_serializes_for_api_responses() {
        let decision = PublishGate::decide(
            Uuid::new_v4(),
            CampaignVariant::Search,
            &clean_outcome(),
        );
        let json = serde_json::to_value(&decision).unwrap();
        assert_eq!(json["allowed"], true);
        assert_eq!(json["variant"], "SEARCH");
    }

    #[test]
    fn video_is_blocked_even_when_valid() {
        let outcome = ValidationOutcome::from_parts(
            vec![],
            vec!["Video campaigns cannot be created through the automated publish path. \
                  Use the ad platform's own interface or scripts instead."
                .to_string()],
        );
        let decision = PublishGate::decide(Uuid::new_v4(), CampaignVariant::Video, &outcome);
        assert!(!decision.allowed);
        assert!(decision.blockers[0].contains("automated publish"));
        // The validation warning is carried through alongside.
        assert_eq!(decision.warnings.len(), 1);
    }
}
