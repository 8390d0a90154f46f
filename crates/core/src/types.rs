//! Campaign data model shared across the workspace.

use crate::bidding::BiddingStrategy;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The campaign variants the ad platform supports. Each variant carries its
/// own field requirements, size limits, and permitted bidding strategies.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CampaignVariant {
    DemandGen,
    Search,
    Display,
    Video,
    Shopping,
    PerformanceMax,
}

impl CampaignVariant {
    pub const ALL: [CampaignVariant; 6] = [
        CampaignVariant::DemandGen,
        CampaignVariant::Search,
        CampaignVariant::Display,
        CampaignVariant::Video,
        CampaignVariant::Shopping,
        CampaignVariant::PerformanceMax,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            CampaignVariant::DemandGen => "Demand Gen",
            CampaignVariant::Search => "Search",
            CampaignVariant::Display => "Display",
            CampaignVariant::Video => "Video",
            CampaignVariant::Shopping => "Shopping",
            CampaignVariant::PerformanceMax => "Performance Max",
        }
    }
}

/// Campaign objective, independent of variant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CampaignObjective {
    Sales,
    Leads,
    WebsiteTraffic,
}

/// The three image asset slots a variant may declare.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ImageSlot {
    Landscape,
    Square,
    Logo,
}

impl ImageSlot {
    pub fn display_name(&self) -> &'static str {
        match self {
            ImageSlot::Landscape => "Landscape",
            ImageSlot::Square => "Square",
            ImageSlot::Logo => "Logo",
        }
    }
}

/// Image asset URLs, one optional URL per slot.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageAssets {
    pub landscape_url: Option<String>,
    pub square_url: Option<String>,
    pub logo_url: Option<String>,
}

impl ImageAssets {
    pub fn url(&self, slot: ImageSlot) -> Option<&str> {
        match slot {
            ImageSlot::Landscape => self.landscape_url.as_deref(),
            ImageSlot::Square => self.square_url.as_deref(),
            ImageSlot::Logo => self.logo_url.as_deref(),
        }
    }

    /// Whether the slot holds a non-blank URL.
    pub fn filled(&self, slot: ImageSlot) -> bool {
        self.url(slot).map(|u| !u.trim().is_empty()).unwrap_or(false)
    }
}

/// Pixel dimensions reported by an image measurer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

impl ImageDimensions {
    pub fn aspect_ratio(&self) -> f64 {
        if self.height == 0 {
            return 0.0;
        }
        self.width as f64 / self.height as f64
    }
}

/// A campaign as submitted for validation. Parsing raw request data into
/// this shape is the transport layer's job; the rule engine only decides
/// whether the candidate satisfies its variant's requirements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateCampaign {
    pub name: String,
    pub objective: CampaignObjective,
    pub variant: CampaignVariant,

    /// Daily budget in micros (1 USD = 1,000,000).
    pub daily_budget_micros: i64,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,

    #[serde(default)]
    pub bidding_strategy: Option<BiddingStrategy>,
    /// Target CPA in micros.
    #[serde(default)]
    pub target_cpa_micros: Option<i64>,
    /// Target ROAS multiplier (2.0 = 200%).
    #[serde(default)]
    pub target_roas: Option<f64>,

    #[serde(default)]
    pub headlines: Vec<String>,
    #[serde(default)]
    pub long_headline: Option<String>,
    #[serde(default)]
    pub descriptions: Vec<String>,
    #[serde(default)]
    pub business_name: Option<String>,
    #[serde(default)]
    pub images: ImageAssets,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub final_url: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub merchant_center_id: Option<String>,
}
