//! Per-variant rule table.
//!
//! One static `VariantRules` record per campaign variant, resolved through
//! an exhaustive match so a lookup can never miss. Numbers follow the ad
//! platform's campaign requirements (API v22).

use adforge_core::bidding::BiddingStrategy as Bid;
use adforge_core::{CampaignVariant, Field, ImageSlot};
use serde::Serialize;

/// Policy for a list-like text field (headlines, descriptions, keywords).
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ListFieldSpec {
    pub min_count: usize,
    pub max_count: usize,
    /// Per-entry limit in Unicode scalar values, not bytes.
    pub max_length: usize,
    pub required: bool,
    /// Descriptions only: at least one entry must be at most this long.
    pub short_max_length: Option<usize>,
    /// Keywords only: entries must be unique after normalization.
    pub unique: bool,
    /// Appended to the minimum-count message, e.g. the responsive search
    /// ads requirement.
    pub min_note: Option<&'static str>,
}

impl ListFieldSpec {
    pub const fn bounded(min_count: usize, max_count: usize, max_length: usize) -> Self {
        Self {
            min_count,
            max_count,
            max_length,
            required: min_count > 0,
            short_max_length: None,
            unique: false,
            min_note: None,
        }
    }

    /// The field does not exist for this variant.
    pub const fn hidden() -> Self {
        Self {
            min_count: 0,
            max_count: 0,
            max_length: 0,
            required: false,
            short_max_length: None,
            unique: false,
            min_note: None,
        }
    }

    pub const fn with_short(mut self, short_max_length: usize) -> Self {
        self.short_max_length = Some(short_max_length);
        self
    }

    pub const fn unique_entries(mut self) -> Self {
        self.unique = true;
        self
    }

    pub const fn noted(mut self, note: &'static str) -> Self {
        self.min_note = Some(note);
        self
    }

    pub fn shown(&self) -> bool {
        self.max_count > 0
    }
}

/// Policy for a single text field (long headline, business name,
/// merchant-center ID).
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SingleFieldSpec {
    pub required: bool,
    pub max_length: usize,
}

impl SingleFieldSpec {
    pub const fn required(max_length: usize) -> Self {
        Self {
            required: true,
            max_length,
        }
    }

    pub const fn hidden() -> Self {
        Self {
            required: false,
            max_length: 0,
        }
    }

    pub fn shown(&self) -> bool {
        self.max_length > 0
    }
}

/// Policy for a URL field (final URL, video URL).
#[derive(Debug, Clone, Copy, Serialize)]
pub struct UrlFieldSpec {
    pub required: bool,
}

impl UrlFieldSpec {
    pub const fn required() -> Self {
        Self { required: true }
    }

    pub const fn hidden() -> Self {
        Self { required: false }
    }

    pub fn shown(&self) -> bool {
        self.required
    }
}

/// Dimension policy for one image slot. The dimensions themselves come
/// from the image-measurement collaborator; this record only states what
/// they must satisfy.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ImageSlotSpec {
    pub slot: ImageSlot,
    /// Landscape and square are marketing images; a logo alone does not
    /// satisfy the at-least-one-image invariant.
    pub marketing: bool,
    pub ratio: f64,
    pub ratio_tolerance: f64,
    pub min_width: u32,
    pub min_height: u32,
}

impl ImageSlotSpec {
    pub fn description(&self) -> String {
        format!(
            "{} ({:.2}:1), minimum {}x{} pixels",
            self.slot.display_name(),
            self.ratio,
            self.min_width,
            self.min_height
        )
    }
}

pub const LANDSCAPE_SLOT: ImageSlotSpec = ImageSlotSpec {
    slot: ImageSlot::Landscape,
    marketing: true,
    ratio: 1.91,
    ratio_tolerance: 0.02,
    min_width: 600,
    min_height: 314,
};

pub const SQUARE_SLOT: ImageSlotSpec = ImageSlotSpec {
    slot: ImageSlot::Square,
    marketing: true,
    ratio: 1.0,
    ratio_tolerance: 0.02,
    min_width: 300,
    min_height: 300,
};

pub const LOGO_SLOT: ImageSlotSpec = ImageSlotSpec {
    slot: ImageSlot::Logo,
    marketing: false,
    ratio: 1.0,
    ratio_tolerance: 0.02,
    min_width: 128,
    min_height: 128,
};

static STANDARD_SLOTS: [ImageSlotSpec; 3] = [LANDSCAPE_SLOT, SQUARE_SLOT, LOGO_SLOT];
static NO_SLOTS: [ImageSlotSpec; 0] = [];

/// All slot policies, for slot suggestion and form hints.
pub fn standard_slots() -> &'static [ImageSlotSpec] {
    &STANDARD_SLOTS
}

/// The complete rule record for one campaign variant.
#[derive(Debug, Clone, Serialize)]
pub struct VariantRules {
    pub variant: CampaignVariant,
    pub headlines: ListFieldSpec,
    pub long_headline: SingleFieldSpec,
    pub descriptions: ListFieldSpec,
    pub keywords: ListFieldSpec,
    pub business_name: SingleFieldSpec,
    pub merchant_center_id: SingleFieldSpec,
    pub final_url: UrlFieldSpec,
    pub video_url: UrlFieldSpec,
    pub image_slots: &'static [ImageSlotSpec],
    /// Permitted bidding strategies, first is the default.
    pub strategies: &'static [Bid],
    pub automated_publish: bool,
    pub publish_caveat: Option<&'static str>,
}

impl VariantRules {
    pub fn default_strategy(&self) -> Bid {
        // Every table entry lists at least one strategy by construction.
        self.strategies[0]
    }

    pub fn allows_strategy(&self, strategy: Bid) -> bool {
        self.strategies.contains(&strategy)
    }

    pub fn slot_spec(&self, slot: ImageSlot) -> Option<&ImageSlotSpec> {
        self.image_slots.iter().find(|s| s.slot == slot)
    }

    /// Whether a field is part of this variant's form at all.
    pub fn shows(&self, field: Field) -> bool {
        match field {
            Field::Name | Field::DailyBudget | Field::StartDate | Field::EndDate => true,
            Field::BiddingStrategy => true,
            Field::Headlines => self.headlines.shown(),
            Field::LongHeadline => self.long_headline.shown(),
            Field::Descriptions => self.descriptions.shown(),
            Field::BusinessName => self.business_name.shown(),
            Field::Keywords => self.keywords.shown(),
            Field::Images => !self.image_slots.is_empty(),
            Field::FinalUrl => self.final_url.shown(),
            Field::VideoUrl => self.video_url.shown(),
            Field::MerchantCenterId => self.merchant_center_id.shown(),
            Field::TargetCpa => self
                .strategies
                .iter()
                .any(|s| s.requires_target() == adforge_core::TargetKind::Cpa),
            Field::TargetRoas => self
                .strategies
                .iter()
                .any(|s| s.requires_target() == adforge_core::TargetKind::Roas),
        }
    }
}

static DEMAND_GEN: VariantRules = VariantRules {
    variant: CampaignVariant::DemandGen,
    headlines: ListFieldSpec::bounded(1, 5, 40),
    long_headline: SingleFieldSpec::hidden(),
    descriptions: ListFieldSpec::bounded(1, 5, 90),
    keywords: ListFieldSpec::hidden(),
    business_name: SingleFieldSpec::required(25),
    merchant_center_id: SingleFieldSpec::hidden(),
    final_url: UrlFieldSpec::required(),
    video_url: UrlFieldSpec::hidden(),
    image_slots: &STANDARD_SLOTS,
    strategies: &[
        Bid::MaximizeConversions,
        Bid::TargetCpa,
        Bid::MaximizeClicks,
        Bid::TargetCpc,
    ],
    automated_publish: true,
    publish_caveat: None,
};

static PERFORMANCE_MAX: VariantRules = VariantRules {
    variant: CampaignVariant::PerformanceMax,
    headlines: ListFieldSpec::bounded(3, 15, 30),
    long_headline: SingleFieldSpec::required(90),
    descriptions: ListFieldSpec::bounded(2, 5, 90).with_short(60),
    keywords: ListFieldSpec::hidden(),
    business_name: SingleFieldSpec::required(25),
    merchant_center_id: SingleFieldSpec::hidden(),
    final_url: UrlFieldSpec::required(),
    video_url: UrlFieldSpec::hidden(),
    image_slots: &STANDARD_SLOTS,
    strategies: &[Bid::MaximizeConversions, Bid::MaximizeConversionValue],
    automated_publish: true,
    publish_caveat: None,
};

static SEARCH: VariantRules = VariantRules {
    variant: CampaignVariant::Search,
    headlines: ListFieldSpec::bounded(3, 15, 30).noted("responsive search ads minimum requirement"),
    long_headline: SingleFieldSpec::hidden(),
    descriptions: ListFieldSpec::bounded(2, 4, 90).noted("responsive search ads minimum requirement"),
    keywords: ListFieldSpec::bounded(1, 10_000, 80).unique_entries(),
    business_name: SingleFieldSpec::hidden(),
    merchant_center_id: SingleFieldSpec::hidden(),
    final_url: UrlFieldSpec::required(),
    video_url: UrlFieldSpec::hidden(),
    image_slots: &NO_SLOTS,
    strategies: &[
        Bid::ManualCpc,
        Bid::MaximizeClicks,
        Bid::TargetCpa,
        Bid::MaximizeConversions,
    ],
    automated_publish: true,
    publish_caveat: None,
};

static DISPLAY: VariantRules = VariantRules {
    variant: CampaignVariant::Display,
    headlines: ListFieldSpec::bounded(1, 5, 30),
    long_headline: SingleFieldSpec::required(90),
    descriptions: ListFieldSpec::bounded(1, 5, 90),
    keywords: ListFieldSpec::hidden(),
    business_name: SingleFieldSpec::required(25),
    merchant_center_id: SingleFieldSpec::hidden(),
    final_url: UrlFieldSpec::required(),
    video_url: UrlFieldSpec::hidden(),
    image_slots: &STANDARD_SLOTS,
    strategies: &[
        Bid::ManualCpc,
        Bid::ManualCpm,
        Bid::MaximizeConversions,
        Bid::TargetCpa,
    ],
    automated_publish: true,
    publish_caveat: None,
};

static VIDEO: VariantRules = VariantRules {
    variant: CampaignVariant::Video,
    headlines: ListFieldSpec::bounded(0, 5, 30),
    long_headline: SingleFieldSpec::hidden(),
    descriptions: ListFieldSpec::bounded(0, 5, 90),
    keywords: ListFieldSpec::hidden(),
    business_name: SingleFieldSpec::hidden(),
    merchant_center_id: SingleFieldSpec::hidden(),
    final_url: UrlFieldSpec::hidden(),
    video_url: UrlFieldSpec::required(),
    image_slots: &NO_SLOTS,
    strategies: &[Bid::TargetCpm, Bid::MaximizeConversions, Bid::TargetCpa],
    automated_publish: false,
    publish_caveat: Some(
        "Video campaigns cannot be created through the automated publish path. \
         Use the ad platform's own interface or scripts instead.",
    ),
};

static SHOPPING: VariantRules = VariantRules {
    variant: CampaignVariant::Shopping,
    headlines: ListFieldSpec::hidden(),
    long_headline: SingleFieldSpec::hidden(),
    descriptions: ListFieldSpec::hidden(),
    keywords: ListFieldSpec::hidden(),
    business_name: SingleFieldSpec::hidden(),
    merchant_center_id: SingleFieldSpec::required(100),
    final_url: UrlFieldSpec::hidden(),
    video_url: UrlFieldSpec::hidden(),
    image_slots: &NO_SLOTS,
    strategies: &[Bid::MaximizeClicks, Bid::TargetRoas, Bid::ManualCpc],
    automated_publish: true,
    publish_caveat: None,
};

/// Total lookup: every variant resolves, enforced by the exhaustive match.
pub fn rules_for(variant: CampaignVariant) -> &'static VariantRules {
    match variant {
        CampaignVariant::DemandGen => &DEMAND_GEN,
        CampaignVariant::Search => &SEARCH,
        CampaignVariant::Display => &DISPLAY,
        CampaignVariant::Video => &VIDEO,
        CampaignVariant::Shopping => &SHOPPING,
        CampaignVariant::PerformanceMax => &PERFORMANCE_MAX,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_resolves_and_default_is_permitted() {
        for variant in CampaignVariant::ALL {
            let rules = rules_for(variant);
            assert_eq!(rules.variant, variant);
            assert!(!rules.strategies.is_empty());
            assert!(rules.allows_strategy(rules.default_strategy()));
        }
    }

    #[test]
    fn list_specs_are_internally_consistent() {
        for variant in CampaignVariant::ALL {
            let rules = rules_for(variant);
            for spec in [&rules.headlines, &rules.descriptions, &rules.keywords] {
                assert!(spec.min_count <= spec.max_count);
                if spec.max_count == 0 {
                    assert!(!spec.required, "{variant:?}: hidden field marked required");
                }
            }
        }
    }

    #[test]
    fn only_video_lacks_automated_publish() {
        for variant in CampaignVariant::ALL {
            let rules = rules_for(variant);
            if variant == CampaignVariant::Video {
                assert!(!rules.automated_publish);
                assert!(rules.publish_caveat.is_some());
            } else {
                assert!(rules.automated_publish);
                assert!(rules.publish_caveat.is_none());
            }
        }
    }

    #[test]
    fn field_visibility_follows_specs() {
        use adforge_core::Field;

        assert!(!rules_for(CampaignVariant::Shopping).shows(Field::Headlines));
        assert!(!rules_for(CampaignVariant::Search).shows(Field::Images));
        assert!(rules_for(CampaignVariant::Display).shows(Field::LongHeadline));
        assert!(rules_for(CampaignVariant::Search).shows(Field::Keywords));
        assert!(rules_for(CampaignVariant::Video).shows(Field::VideoUrl));
        assert!(!rules_for(CampaignVariant::PerformanceMax).shows(Field::TargetCpa));
        assert!(rules_for(CampaignVariant::Shopping).shows(Field::TargetRoas));
        assert!(!rules_for(CampaignVariant::DemandGen).shows(Field::TargetRoas));
    }

    #[test]
    fn rules_serialize_for_form_consumers() {
        let json = serde_json::to_value(rules_for(CampaignVariant::Search)).unwrap();
        assert_eq!(json["variant"], "SEARCH");
        assert_eq!(json["headlines"]["min_count"], 3);
        assert_eq!(json["strategies"][0], "manual_cpc");
    }

    #[test]
    fn marketing_slots_exclude_logo() {
        let rules = rules_for(CampaignVariant::DemandGen);
        let marketing: Vec<_> = rules
            .image_slots
            .iter()
            .filter(|s| s.marketing)
            .map(|s| s.slot)
            .collect();
        assert_eq!(
            marketing,
            vec![adforge_core::ImageSlot::Landscape, adforge_core::ImageSlot::Square]
        );
    }
}
