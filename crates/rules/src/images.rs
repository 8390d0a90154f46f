//! Image dimension policy.
//!
//! Pure pass/fail of measured pixel dimensions against a slot's policy.
//! Nothing here fetches or decodes an image; dimensions arrive through
//! the measurement collaborator at the platform boundary.

use adforge_core::{ImageDimensions, ImageSlot};

use crate::table::{standard_slots, ImageSlotSpec};

/// Check measured dimensions against a slot policy: aspect ratio within
/// relative tolerance, then minimum width and height. Returns one
/// message per failed constraint.
pub fn check_dimensions(dims: ImageDimensions, spec: &ImageSlotSpec) -> Vec<String> {
    let mut errors = Vec::new();

    if dims.width == 0 || dims.height == 0 {
        errors.push("Invalid image dimensions".to_string());
        return errors;
    }

    let actual = dims.aspect_ratio();
    let deviation = ((actual - spec.ratio) / spec.ratio).abs();
    if deviation > spec.ratio_tolerance {
        errors.push(format!(
            "Image aspect ratio {:.2} does not match required ratio {:.2} (tolerance: {:.0}%)",
            actual,
            spec.ratio,
            spec.ratio_tolerance * 100.0
        ));
    }

    if dims.width < spec.min_width {
        errors.push(format!(
            "Image width {}px is below minimum required {}px for {}",
            dims.width,
            spec.min_width,
            spec.description()
        ));
    }
    if dims.height < spec.min_height {
        errors.push(format!(
            "Image height {}px is below minimum required {}px for {}",
            dims.height,
            spec.min_height,
            spec.description()
        ));
    }

    errors
}

/// Suggest the slot whose policy the dimensions best satisfy: within
/// ratio tolerance, meeting minimums, smallest ratio deviation wins.
pub fn suggest_slot(dims: ImageDimensions) -> Option<ImageSlot> {
    if dims.width == 0 || dims.height == 0 {
        return None;
    }
    let actual = dims.aspect_ratio();

    let mut best: Option<(ImageSlot, f64)> = None;
    for spec in standard_slots() {
        let deviation = ((actual - spec.ratio) / spec.ratio).abs();
        if deviation > spec.ratio_tolerance {
            continue;
        }
        if dims.width < spec.min_width || dims.height < spec.min_height {
            continue;
        }
        let better = match best {
            Some((_, best_dev)) => deviation < best_dev,
            None => true,
        };
        if better {
            best = Some((spec.slot, deviation));
        }
    }
    best.map(|(slot, _)| slot)
}
