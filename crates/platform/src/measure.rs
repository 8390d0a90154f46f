//! Image measurement boundary.
//!
//! The rule table states what each image slot must look like; actually
//! fetching bytes and decoding dimensions is an external capability
//! behind the `ImageMeasurer` trait. The auditor walks a candidate's
//! filled slots, asks the measurer for dimensions, and applies the slot
//! policy.

use adforge_core::{CandidateCampaign, ImageDimensions, ImageSlot};
use adforge_rules::images::check_dimensions;
use adforge_rules::rules_for;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum MeasureError {
    #[error("image unavailable: {0}")]
    Unavailable(String),

    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Narrow collaborator interface: turn an image URL into pixel
/// dimensions. Implementations live outside this repository (HTTP
/// fetcher, object-store reader, test stub).
pub trait ImageMeasurer {
    fn measure(&self, url: &str) -> Result<ImageDimensions, MeasureError>;
}

/// Audit result for one filled slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotAudit {
    pub slot: ImageSlot,
    pub url: String,
    pub dimensions: Option<ImageDimensions>,
    pub errors: Vec<String>,
}

/// Audit result across all of a candidate's filled slots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageAuditReport {
    pub valid: bool,
    pub slots: Vec<SlotAudit>,
}

pub struct ImageAuditor<M> {
    measurer: M,
}

impl<M: ImageMeasurer> ImageAuditor<M> {
    pub fn new(measurer: M) -> Self {
        Self { measurer }
    }

    /// Measure every filled, declared slot and apply its dimension
    /// policy. Slots the variant does not declare are ignored, as are
    /// empty slots; presence requirements belong to the rule engine.
    pub fn audit(&self, candidate: &CandidateCampaign) -> ImageAuditReport {
        let rules = rules_for(candidate.variant);
        let mut slots = Vec::new();

        for spec in rules.image_slots {
            let Some(url) = candidate.images.url(spec.slot) else {
                continue;
            };
            if url.trim().is_empty() {
                continue;
            }

            let audit = match self.measurer.measure(url) {
                Ok(dims) => SlotAudit {
                    slot: spec.slot,
                    url: url.to_string(),
                    dimensions: Some(dims),
                    errors: check_dimensions(dims, spec)
                        .into_iter()
                        .map(|e| format!("{}: {}", spec.slot.display_name(), e))
                        .collect(),
                },
                Err(err) => {
                    warn!(slot = spec.slot.display_name(), url, error = %err, "Image measurement failed");
                    SlotAudit {
                        slot: spec.slot,
                        url: url.to_string(),
                        dimensions: None,
                        errors: vec![format!(
                            "{}: could not verify image: {}",
                            spec.slot.display_name(),
                            err
                        )],
                    }
                }
            };
            slots.push(audit);
        }

        let valid = slots.iter().all(|s| s.errors.is_empty());
        ImageAuditReport { valid, slots }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adforge_core::{CampaignObjective, CampaignVariant, ImageAssets};
    use chrono::NaiveDate;
    use std::collections::HashMap;

    /// Test stub keyed by URL.
    struct StubMeasurer {
        sizes: HashMap<String, ImageDimensions>,
    }

    impl ImageMeasurer for StubMeasurer {
        fn measure(&self, url: &str) -> Result<ImageDimensions, MeasureError> {
            self.sizes
                .get(url)
                .copied()
                .ok_or_else(|| MeasureError::Unavailable(url.to_string()))
        }
    }

    fn display_candidate(images: ImageAssets) -> CandidateCampaign {
        CandidateCampaign {
            name: "Display push".to_string(),
            objective: CampaignObjective::WebsiteTraffic,
            variant: CampaignVariant::Display,
            daily_budget_micros: 10_000_000,
            start_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            end_date: None,
            bidding_strategy: None,
            target_cpa_micros: None,
            target_roas: None,
            headlines: vec!["Visit us".to_string()],
            long_headline: Some("A longer headline for display placements".to_string()),
            descriptions: vec!["See the full range".to_string()],
            business_name: Some("Example Goods".to_string()),
            images,
            keywords: Vec::new(),
            final_url: Some("https://example.com".to_string()),
            video_url: None,
            merchant_center_id: None,
        }
    }

    #[test]
    fn conforming_images_pass_the_audit() {
        let candidate = display_candidate(ImageAssets {
            landscape_url: Some("https://cdn.example.com/wide.jpg".to_string()),
            square_url: None,
            logo_url: Some("https://cdn.example.com/logo.png".to_string()),
        });
        let auditor = ImageAuditor::new(StubMeasurer {
            sizes: HashMap::from([
                (
                    "https://cdn.example.com/wide.jpg".to_string(),
                    ImageDimensions {
                        width: 1200,
                        height: 628,
                    },
                ),
                (
                    "https://cdn.example.com/logo.png".to_string(),
                    ImageDimensions {
                        width: 256,
                        height: 256,
                    },
                ),
            ]),
        });

        let report = auditor.audit(&candidate);
        assert!(report.valid);
        assert_eq!(report.slots.len(), 2);
    }

    #[test]
    fn wrong_ratio_fails_with_slot_prefix() {
        let candidate = display_candidate(ImageAssets {
            landscape_url: Some("https://cdn.example.com/tall.jpg".to_string()),
            square_url: None,
            logo_url: None,
        });
        let auditor = ImageAuditor::new(StubMeasurer {
            sizes: HashMap::from([(
                "https://cdn.example.com/tall.jpg".to_string(),
                ImageDimensions {
                    width: 600,
                    height: 600,
                },
            )]),
        });

        let report = auditor.audit(&candidate);
        assert!(!report.valid);
        assert!(report.slots[0].errors[0].starts_with("Landscape:"));
    }

    #[test]
    fn unavailable_image_is_reported_not_panicked() {
        let candidate = display_candidate(ImageAssets {
            landscape_url: Some("https://cdn.example.com/missing.jpg".to_string()),
            square_url: None,
            logo_url: None,
        });
        let auditor = ImageAuditor::new(StubMeasurer {
            sizes: HashMap::new(),
        });

        let report = auditor.audit(&candidate);
        assert!(!report.valid);
        assert!(report.slots[0].dimensions.is_none());
        assert!(report.slots[0].errors[0].contains("could not verify"));
    }

    #[test]
    fn undeclared_slots_are_never_measured() {
        // Search declares no image slots; a stray URL is ignored here
        // (the rule engine likewise never requires it).
        let mut candidate = display_candidate(ImageAssets {
            landscape_url: Some("https://cdn.example.com/wide.jpg".to_string()),
            square_url: None,
            logo_url: None,
        });
        candidate.variant = CampaignVariant::Search;

        let auditor = ImageAuditor::new(StubMeasurer {
            sizes: HashMap::new(),
        });
        let report = auditor.audit(&candidate);
        assert!(report.valid);
        assert!(report.slots.is_empty());
    }
}
