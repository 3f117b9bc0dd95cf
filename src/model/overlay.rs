//! Projection of raw detection boxes into on-screen overlay rectangles
//! and the tap rules that decide when a box opens a capture card.

use serde::{Deserialize, Serialize};

use crate::model::detection::Detection;
use crate::model::logbook::UNKNOWN_FOOD;

/// Rectangle in percentage space, suitable for absolute positioning
/// over the displayed photo.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct OverlayRect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl OverlayRect {
    /// Converts a `[y_min, x_min, y_max, x_max]` box on the model's
    /// 0..=1000 grid into percentages. Coordinates outside the grid are
    /// clamped first, so a malformed box still yields a rectangle that
    /// stays on screen.
    pub fn from_box(box_2d: &[i32; 4]) -> Self {
        let y_min = f64::from(box_2d[0].clamp(0, 1000));
        let x_min = f64::from(box_2d[1].clamp(0, 1000));
        let y_max = f64::from(box_2d[2].clamp(0, 1000));
        let x_max = f64::from(box_2d[3].clamp(0, 1000));

        Self {
            top: y_min / 10.0,
            left: x_min / 10.0,
            width: (x_max - x_min).max(0.0) / 10.0,
            height: (y_max - y_min).max(0.0) / 10.0,
        }
    }
}

/// What to do with detections the model relabeled outside the known
/// food list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RelabelPolicy {
    /// Drop relabeled detections from the overlay entirely.
    #[default]
    Exclude,
    /// Render relabeled detections, but see [`is_interactive`] for the
    /// sentinel rule.
    Show,
}

/// Whether a detection should be rendered at all under the policy.
pub fn is_visible(detection: &Detection, policy: RelabelPolicy) -> bool {
    match policy {
        RelabelPolicy::Exclude => detection.relabel != 1,
        RelabelPolicy::Show => true,
    }
}

/// Whether tapping a rendered detection opens a capture card. The
/// model emits a relabeled "Unknown Food" box when it saw food it could
/// not name at all; that sentinel is display-only under every policy.
pub fn is_interactive(detection: &Detection, policy: RelabelPolicy) -> bool {
    if !is_visible(detection, policy) {
        return false;
    }
    !(detection.relabel == 1 && detection.label == UNKNOWN_FOOD)
}

/// Payload handed to the capture card when a detection is tapped.
#[derive(Clone, Debug, PartialEq)]
pub struct DetectionTarget {
    pub label: String,
    pub image_url: String,
    /// A fresh detection is never already in the logbook.
    pub saved: bool,
}

/// Resolves a tap on `detection` into a capture-card target, or `None`
/// when the detection is hidden or non-interactive.
pub fn tap_target(
    detection: &Detection,
    image_url: &str,
    policy: RelabelPolicy,
) -> Option<DetectionTarget> {
    if !is_interactive(detection, policy) {
        return None;
    }
    Some(DetectionTarget {
        label: detection.label.clone(),
        image_url: image_url.to_string(),
        saved: false,
    })
}
