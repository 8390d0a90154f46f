//! Ad-platform error code catalog.
//!
//! Maps the error identifiers the ad platform's API returns on a failed
//! publish to user-facing messages, a severity, and a retryability flag,
//! so the transport layer can render something better than a raw proto
//! error. Pure data; no parsing of platform payloads happens here.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorSeverity {
    Critical,
    Error,
    Warning,
    Info,
}

/// The platform error identifiers worth mapping for campaign publishes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlatformErrorCode {
    // Asset errors
    RequiredFieldMissing,
    NotEnoughHeadlineAsset,
    NotEnoughDescriptionAsset,
    AssetTextTooLong,
    DuplicateAsset,
    // Keyword errors
    CriterionAlreadyExists,
    KeywordTextTooLong,
    TooManyKeywords,
    // Image errors
    AspectRatioNotAllowed,
    ImageTooSmall,
    ImageTooLarge,
    InvalidImageFormat,
    // Campaign errors
    CampaignTypeNotCompatible,
    CannotCreateVideoCampaign,
    BudgetAmountTooLow,
    InvalidDateRange,
    StartDateInPast,
    // Bidding errors
    BiddingStrategyNotSupported,
    TargetCpaRequired,
    TargetRoasRequired,
    // Ad errors
    FinalUrlRequired,
    InvalidUrl,
    // Shopping errors
    MerchantCenterNotLinked,
    MerchantCenterIdRequired,
    // Auth errors
    AuthenticationError,
    AuthorizationError,
    CustomerNotFound,
    // Rate limiting and transient errors
    RateLimitExceeded,
    InternalError,
    TransientError,
    ResourceExhausted,
    DeadlineExceeded,
}

impl PlatformErrorCode {
    pub const ALL: [PlatformErrorCode; 32] = [
        PlatformErrorCode::RequiredFieldMissing,
        PlatformErrorCode::NotEnoughHeadlineAsset,
        PlatformErrorCode::NotEnoughDescriptionAsset,
        PlatformErrorCode::AssetTextTooLong,
        PlatformErrorCode::DuplicateAsset,
        PlatformErrorCode::CriterionAlreadyExists,
        PlatformErrorCode::KeywordTextTooLong,
        PlatformErrorCode::TooManyKeywords,
        PlatformErrorCode::AspectRatioNotAllowed,
        PlatformErrorCode::ImageTooSmall,
        PlatformErrorCode::ImageTooLarge,
        PlatformErrorCode::InvalidImageFormat,
        PlatformErrorCode::CampaignTypeNotCompatible,
        PlatformErrorCode::CannotCreateVideoCampaign,
        PlatformErrorCode::BudgetAmountTooLow,
        PlatformErrorCode::InvalidDateRange,
        PlatformErrorCode::StartDateInPast,
        PlatformErrorCode::BiddingStrategyNotSupported,
        PlatformErrorCode::TargetCpaRequired,
        PlatformErrorCode::TargetRoasRequired,
        PlatformErrorCode::FinalUrlRequired,
        PlatformErrorCode::InvalidUrl,
        PlatformErrorCode::MerchantCenterNotLinked,
        PlatformErrorCode::MerchantCenterIdRequired,
        PlatformErrorCode::AuthenticationError,
        PlatformErrorCode::AuthorizationError,
        PlatformErrorCode::CustomerNotFound,
        PlatformErrorCode::RateLimitExceeded,
        PlatformErrorCode::InternalError,
        PlatformErrorCode::TransientError,
        PlatformErrorCode::ResourceExhausted,
        PlatformErrorCode::DeadlineExceeded,
    ];

    /// The identifier as the platform spells it.
    pub fn as_code(&self) -> &'static str {
        match self {
            PlatformErrorCode::RequiredFieldMissing => "REQUIRED_FIELD_MISSING",
            PlatformErrorCode::NotEnoughHeadlineAsset => "NOT_ENOUGH_HEADLINE_ASSET",
            PlatformErrorCode::NotEnoughDescriptionAsset => "NOT_ENOUGH_DESCRIPTION_ASSET",
            PlatformErrorCode::AssetTextTooLong => "ASSET_TEXT_TOO_LONG",
            PlatformErrorCode::DuplicateAsset => "DUPLICATE_ASSET",
            PlatformErrorCode::CriterionAlreadyExists => "CRITERION_ALREADY_EXISTS",
            PlatformErrorCode::KeywordTextTooLong => "KEYWORD_TEXT_TOO_LONG",
            PlatformErrorCode::TooManyKeywords => "TOO_MANY_KEYWORDS",
            PlatformErrorCode::AspectRatioNotAllowed => "ASPECT_RATIO_NOT_ALLOWED",
            PlatformErrorCode::ImageTooSmall => "IMAGE_TOO_SMALL",
            PlatformErrorCode::ImageTooLarge => "IMAGE_TOO_LARGE",
            PlatformErrorCode::InvalidImageFormat => "INVALID_IMAGE_FORMAT",
            PlatformErrorCode::CampaignTypeNotCompatible => "CAMPAIGN_TYPE_NOT_COMPATIBLE",
            PlatformErrorCode::CannotCreateVideoCampaign => "CANNOT_CREATE_VIDEO_CAMPAIGN",
            PlatformErrorCode::BudgetAmountTooLow => "BUDGET_AMOUNT_TOO_LOW",
            PlatformErrorCode::InvalidDateRange => "INVALID_DATE_RANGE",
            PlatformErrorCode::StartDateInPast => "START_DATE_IN_PAST",
            PlatformErrorCode::BiddingStrategyNotSupported => "BIDDING_STRATEGY_NOT_SUPPORTED",
            PlatformErrorCode::TargetCpaRequired => "TARGET_CPA_REQUIRED",
            PlatformErrorCode::TargetRoasRequired => "TARGET_ROAS_REQUIRED",
            PlatformErrorCode::FinalUrlRequired => "FINAL_URL_REQUIRED",
            PlatformErrorCode::InvalidUrl => "INVALID_URL",
            PlatformErrorCode::MerchantCenterNotLinked => "MERCHANT_CENTER_NOT_LINKED",
            PlatformErrorCode::MerchantCenterIdRequired => "MERCHANT_CENTER_ID_REQUIRED",
            PlatformErrorCode::AuthenticationError => "AUTHENTICATION_ERROR",
            PlatformErrorCode::AuthorizationError => "AUTHORIZATION_ERROR",
            PlatformErrorCode::CustomerNotFound => "CUSTOMER_NOT_FOUND",
            PlatformErrorCode::RateLimitExceeded => "RATE_LIMIT_EXCEEDED",
            PlatformErrorCode::InternalError => "INTERNAL_ERROR",
            PlatformErrorCode::TransientError => "TRANSIENT_ERROR",
            PlatformErrorCode::ResourceExhausted => "RESOURCE_EXHAUSTED",
            PlatformErrorCode::DeadlineExceeded => "DEADLINE_EXCEEDED",
        }
    }

    pub fn user_message(&self) -> &'static str {
        match self {
            PlatformErrorCode::RequiredFieldMissing => "A required field is missing",
            PlatformErrorCode::NotEnoughHeadlineAsset => "More headlines are required for this campaign type",
            PlatformErrorCode::NotEnoughDescriptionAsset => "More descriptions are required for this campaign type",
            PlatformErrorCode::AssetTextTooLong => "Asset text exceeds the maximum length",
            PlatformErrorCode::DuplicateAsset => "This asset already exists in the account",
            PlatformErrorCode::CriterionAlreadyExists => "This keyword already exists in the ad group",
            PlatformErrorCode::KeywordTextTooLong => "Keyword exceeds the maximum length of 80 characters",
            PlatformErrorCode::TooManyKeywords => "Too many keywords in ad group",
            PlatformErrorCode::AspectRatioNotAllowed => "Image aspect ratio is not allowed for this slot",
            PlatformErrorCode::ImageTooSmall => "Image dimensions are below the required minimum",
            PlatformErrorCode::ImageTooLarge => "Image file size exceeds the maximum allowed",
            PlatformErrorCode::InvalidImageFormat => "Invalid image format. Supported formats: JPEG, PNG, GIF",
            PlatformErrorCode::CampaignTypeNotCompatible => "Campaign type is not compatible with the selected settings",
            PlatformErrorCode::CannotCreateVideoCampaign => "Video campaigns cannot be created through the automated path. Use the ad platform's own interface",
            PlatformErrorCode::BudgetAmountTooLow => "Daily budget is below the platform minimum",
            PlatformErrorCode::InvalidDateRange => "Invalid date range. End date must be after start date",
            PlatformErrorCode::StartDateInPast => "Start date cannot be in the past",
            PlatformErrorCode::BiddingStrategyNotSupported => "The bidding strategy is not supported for this campaign type",
            PlatformErrorCode::TargetCpaRequired => "Target CPA value is required for the target_cpa bidding strategy",
            PlatformErrorCode::TargetRoasRequired => "Target ROAS value is required for the target_roas bidding strategy",
            PlatformErrorCode::FinalUrlRequired => "Final URL is required for this campaign type",
            PlatformErrorCode::InvalidUrl => "Invalid URL format",
            PlatformErrorCode::MerchantCenterNotLinked => "Merchant Center account is not linked",
            PlatformErrorCode::MerchantCenterIdRequired => "Merchant Center ID is required for Shopping campaigns",
            PlatformErrorCode::AuthenticationError => "Authentication failed. Please check your credentials",
            PlatformErrorCode::AuthorizationError => "You do not have permission to perform this action",
            PlatformErrorCode::CustomerNotFound => "Ad platform customer account not found",
            PlatformErrorCode::RateLimitExceeded => "API rate limit exceeded. Please try again later",
            PlatformErrorCode::InternalError => "An internal error occurred. Please try again",
            PlatformErrorCode::TransientError => "A temporary error occurred. Please try again",
            PlatformErrorCode::ResourceExhausted => "API quota exhausted. Please try again later",
            PlatformErrorCode::DeadlineExceeded => "Request timed out. Please try again",
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PlatformErrorCode::AuthenticationError
            | PlatformErrorCode::AuthorizationError
            | PlatformErrorCode::CustomerNotFound => ErrorSeverity::Critical,
            PlatformErrorCode::DuplicateAsset | PlatformErrorCode::CriterionAlreadyExists => {
                ErrorSeverity::Warning
            }
            PlatformErrorCode::RateLimitExceeded => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }

    /// Whether a publish attempt that failed with this code is worth
    /// retrying as-is.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            PlatformErrorCode::InternalError
                | PlatformErrorCode::TransientError
                | PlatformErrorCode::ResourceExhausted
                | PlatformErrorCode::DeadlineExceeded
                | PlatformErrorCode::RateLimitExceeded
        )
    }

    /// Resolve a raw platform identifier: exact match first, then a
    /// substring match in either direction (platform protos sometimes
    /// prefix the family name).
    pub fn from_code(raw: &str) -> Option<PlatformErrorCode> {
        if let Some(exact) = Self::ALL.iter().find(|c| c.as_code() == raw) {
            return Some(*exact);
        }
        Self::ALL
            .iter()
            .find(|c| raw.contains(c.as_code()) || c.as_code().contains(raw))
            .copied()
    }
}

/// User message for a raw platform code, falling back to a generic line
/// when the code is unknown.
pub fn user_message_for(raw: &str) -> String {
    match PlatformErrorCode::from_code(raw) {
        Some(code) => code.user_message().to_string(),
        None => format!("An unexpected error occurred: {raw}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_code_resolution() {
        assert_eq!(
            PlatformErrorCode::from_code("TARGET_CPA_REQUIRED"),
            Some(PlatformErrorCode::TargetCpaRequired)
        );
    }

    #[test]
    fn substring_code_resolution() {
        assert_eq!(
            PlatformErrorCode::from_code("AssetError.NOT_ENOUGH_HEADLINE_ASSET"),
            Some(PlatformErrorCode::NotEnoughHeadlineAsset)
        );
    }

    #[test]
    fn unknown_code_falls_back() {
        assert!(PlatformErrorCode::from_code("SOMETHING_NOVEL").is_none());
        let message = user_message_for("SOMETHING_NOVEL");
        assert!(message.contains("SOMETHING_NOVEL"));
    }

    #[test]
    fn retryable_set_is_transient_only() {
        assert!(PlatformErrorCode::RateLimitExceeded.is_retryable());
        assert!(PlatformErrorCode::TransientError.is_retryable());
        assert!(!PlatformErrorCode::TargetCpaRequired.is_retryable());
        assert!(!PlatformErrorCode::AuthenticationError.is_retryable());
    }

    #[test]
    fn severity_families() {
        assert_eq!(
            PlatformErrorCode::AuthenticationError.severity(),
            ErrorSeverity::Critical
        );
        assert_eq!(
            PlatformErrorCode::DuplicateAsset.severity(),
            ErrorSeverity::Warning
        );
        assert_eq!(
            PlatformErrorCode::InvalidUrl.severity(),
            ErrorSeverity::Error
        );
    }
}
