//! Read-only facade over the rule table for form-building consumers.

use adforge_core::bidding::BiddingStrategy;
use adforge_core::{CampaignVariant, Field};

use crate::table::{rules_for, ImageSlotSpec, VariantRules};

/// Convenience lookups for consumers that render a campaign form or run
/// a pre-publish check. Pure projections of the rule table.
pub struct VariantQuery;

impl VariantQuery {
    pub fn rules(variant: CampaignVariant) -> &'static VariantRules {
        rules_for(variant)
    }

    /// Whether the given field appears on this variant's form.
    pub fn shows(variant: CampaignVariant, field: Field) -> bool {
        rules_for(variant).shows(field)
    }

    /// The strategy implied when the user selects none.
    pub fn default_strategy(variant: CampaignVariant) -> BiddingStrategy {
        rules_for(variant).default_strategy()
    }

    /// Permitted strategies in display order, default first.
    pub fn strategies(variant: CampaignVariant) -> &'static [BiddingStrategy] {
        rules_for(variant).strategies
    }

    /// Whether the variant can go through the automated publish path,
    /// and the caveat to surface when it cannot.
    pub fn automated_publish(variant: CampaignVariant) -> (bool, Option<&'static str>) {
        let rules = rules_for(variant);
        (rules.automated_publish, rules.publish_caveat)
    }

    /// The image slots this variant declares, with their dimension
    /// policies.
    pub fn declared_slots(variant: CampaignVariant) -> &'static [ImageSlotSpec] {
        rules_for(variant).image_slots
    }
}
