//! Ad-platform boundary: the pieces that sit between the rule engine and
//! the external ad platform. Nothing here performs network calls; the
//! publish itself and image byte-fetching belong to collaborators behind
//! narrow interfaces.

pub mod error_map;
pub mod gate;
pub mod measure;

pub use error_map::{ErrorSeverity, PlatformErrorCode};
pub use gate::{PublishDecision, PublishGate};
pub use measure::{ImageAuditReport, ImageAuditor, ImageMeasurer, MeasureError, SlotAudit};
