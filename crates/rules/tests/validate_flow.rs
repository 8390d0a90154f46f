//! Integration test for the full campaign validation flow.

use adforge_core::{
    BiddingStrategy, CampaignObjective, CampaignVariant, CandidateCampaign, ErrorCode, Field,
    ImageAssets,
};
use adforge_rules::ValidationEngine;
use chrono::NaiveDate;

/// Construct a complete, publishable Performance Max candidate.
fn sample_pmax_campaign() -> CandidateCampaign {
    CandidateCampaign {
        name: "Holiday Gifting Push".to_string(),
        objective: CampaignObjective::Sales,
        variant: CampaignVariant::PerformanceMax,
        daily_budget_micros: 50_000_000,
        start_date: NaiveDate::from_ymd_opt(2026, 11, 1).unwrap(),
        end_date: Some(NaiveDate::from_ymd_opt(2026, 12, 31).unwrap()),
        bidding_strategy: Some(BiddingStrategy::MaximizeConversions),
        target_cpa_micros: None,
        target_roas: None,
        headlines: vec![
            "Gifts they will love".to_string(),
            "Holiday deals are here".to_string(),
            "Wrap it up early".to_string(),
        ],
        long_headline: Some("Find something special for everyone on your holiday list".to_string()),
        descriptions: vec![
            "Curated gift picks for every budget".to_string(),
            "Order by December 20 for guaranteed holiday delivery, with free returns through January"
                .to_string(),
        ],
        business_name: Some("Example Goods Co".to_string()),
        images: ImageAssets {
            landscape_url: Some("https://cdn.example.com/holiday/hero-1200x628.jpg".to_string()),
            square_url: Some("https://cdn.example.com/holiday/square-600.jpg".to_string()),
            logo_url: Some("https://cdn.example.com/brand/logo-256.png".to_string()),
        },
        keywords: Vec::new(),
        final_url: Some("https://shop.example.com/holiday".to_string()),
        video_url: None,
        merchant_center_id: None,
    }
}

#[test]
fn complete_pmax_campaign_publishes_cleanly() {
    let outcome = ValidationEngine::new().validate_for_publish(&sample_pmax_campaign());
    assert!(outcome.valid, "unexpected errors: {:?}", outcome.errors);
    assert!(outcome.warnings.is_empty());
}

#[test]
fn short_description_requirement_applies_to_pmax_only() {
    let mut c = sample_pmax_campaign();
    c.descriptions = vec![
        "This first description keeps going until it is comfortably past sixty characters"
            .to_string(),
        "The second description is also written long enough to exceed the short entry limit"
            .to_string(),
    ];
    let outcome = ValidationEngine::new().validate_for_publish(&c);
    assert!(!outcome.valid);
    assert_eq!(outcome.count_code(ErrorCode::ShortDescriptionMissing), 1);
}

#[test]
fn broken_campaign_reports_every_field_at_once() {
    let mut c = sample_pmax_campaign();
    c.headlines = vec!["Only one".to_string()];
    c.long_headline = None;
    c.business_name = None;
    c.images = ImageAssets::default();
    c.final_url = Some("shop.example.com/holiday".to_string());

    let outcome = ValidationEngine::new().validate_for_publish(&c);
    assert!(!outcome.valid);

    // One pass surfaces all of them; no fix-and-resubmit loop.
    let flagged: Vec<Field> = outcome.errors.iter().map(|e| e.field).collect();
    assert!(flagged.contains(&Field::Headlines));
    assert!(flagged.contains(&Field::LongHeadline));
    assert!(flagged.contains(&Field::BusinessName));
    assert!(flagged.contains(&Field::Images));
    assert!(flagged.contains(&Field::FinalUrl));
}

#[test]
fn draft_of_broken_campaign_still_saves() {
    let mut c = sample_pmax_campaign();
    c.headlines.clear();
    c.long_headline = None;
    c.business_name = None;
    c.images = ImageAssets::default();
    c.final_url = None;

    let outcome = ValidationEngine::new().validate_draft(&c);
    assert!(outcome.valid, "unexpected errors: {:?}", outcome.errors);
}

#[test]
fn variant_switch_revalidates_under_new_rules() {
    // A candidate valid as Performance Max is not automatically valid
    // as Search; the caller re-derives fields after a variant change.
    let mut c = sample_pmax_campaign();
    c.variant = CampaignVariant::Search;

    let outcome = ValidationEngine::new().validate_for_publish(&c);
    assert!(!outcome.valid);
    // Search demands keywords the Performance Max form never collected.
    assert!(outcome
        .errors_for(Field::Keywords)
        .any(|e| e.code == ErrorCode::MinCount));
}
