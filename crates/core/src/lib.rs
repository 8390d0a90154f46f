pub mod bidding;
pub mod outcome;
pub mod types;

pub use bidding::{BiddingStrategy, TargetKind};
pub use outcome::{ErrorCode, Field, ValidationError, ValidationOutcome};
pub use types::{
    CampaignObjective, CampaignVariant, CandidateCampaign, ImageAssets, ImageDimensions, ImageSlot,
};
