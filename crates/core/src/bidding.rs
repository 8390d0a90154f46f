//! Bidding strategy catalog.
//!
//! Nine strategies following the ad platform's bidding model. Which of
//! them a campaign may select depends on its variant; that mapping lives
//! in the per-variant rule table, not here.

use serde::{Deserialize, Serialize};

/// The numeric target a bidding strategy demands, if any.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TargetKind {
    None,
    Cpa,
    Roas,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BiddingStrategy {
    MaximizeConversions,
    MaximizeConversionValue,
    MaximizeClicks,
    TargetCpa,
    TargetRoas,
    TargetCpc,
    ManualCpc,
    ManualCpm,
    TargetCpm,
}

impl BiddingStrategy {
    pub const ALL: [BiddingStrategy; 9] = [
        BiddingStrategy::MaximizeConversions,
        BiddingStrategy::MaximizeConversionValue,
        BiddingStrategy::MaximizeClicks,
        BiddingStrategy::TargetCpa,
        BiddingStrategy::TargetRoas,
        BiddingStrategy::TargetCpc,
        BiddingStrategy::ManualCpc,
        BiddingStrategy::ManualCpm,
        BiddingStrategy::TargetCpm,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            BiddingStrategy::MaximizeConversions => "Maximize Conversions",
            BiddingStrategy::MaximizeConversionValue => "Maximize Conversion Value",
            BiddingStrategy::MaximizeClicks => "Maximize Clicks",
            BiddingStrategy::TargetCpa => "Target CPA",
            BiddingStrategy::TargetRoas => "Target ROAS",
            BiddingStrategy::TargetCpc => "Target CPC",
            BiddingStrategy::ManualCpc => "Manual CPC",
            BiddingStrategy::ManualCpm => "Manual CPM",
            BiddingStrategy::TargetCpm => "Target CPM",
        }
    }

    /// Wire identifier, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            BiddingStrategy::MaximizeConversions => "maximize_conversions",
            BiddingStrategy::MaximizeConversionValue => "maximize_conversion_value",
            BiddingStrategy::MaximizeClicks => "maximize_clicks",
            BiddingStrategy::TargetCpa => "target_cpa",
            BiddingStrategy::TargetRoas => "target_roas",
            BiddingStrategy::TargetCpc => "target_cpc",
            BiddingStrategy::ManualCpc => "manual_cpc",
            BiddingStrategy::ManualCpm => "manual_cpm",
            BiddingStrategy::TargetCpm => "target_cpm",
        }
    }

    /// Which numeric target this strategy requires when selected.
    pub fn requires_target(&self) -> TargetKind {
        match self {
            BiddingStrategy::TargetCpa => TargetKind::Cpa,
            BiddingStrategy::TargetRoas => TargetKind::Roas,
            _ => TargetKind::None,
        }
    }
}
