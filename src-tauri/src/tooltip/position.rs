use crate::models::{Placement, Position, Rect, Size};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MARGIN: f64 = 20.0;
pub const DEFAULT_GAP: f64 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementConfig {
    /// Minimum distance kept from the viewport edges.
    pub margin: f64,
    /// Distance between the trigger and the tooltip.
    pub gap: f64,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            margin: DEFAULT_MARGIN,
            gap: DEFAULT_GAP,
        }
    }
}

/// Anchors the tooltip below the trigger, left-aligned, and clamps it into the viewport.
///
/// Overflowing the right edge pins the tooltip `margin` away from it; overflowing the
/// bottom moves it above the trigger, but never past the top margin. Tooltips larger than the
/// viewport minus both margins may still spill out.
pub fn place(trigger: Rect, tooltip: Size, viewport: Size, config: PlacementConfig) -> Placement {
    let mut left = trigger.left;
    let mut top = trigger.bottom() + config.gap;
    let mut flipped_horizontal = false;
    let mut flipped_vertical = false;

    if left + tooltip.width > viewport.width - config.margin {
        left = viewport.width - tooltip.width - config.margin;
        flipped_horizontal = true;
    }

    if top + tooltip.height > viewport.height - config.margin {
        top = (trigger.top - tooltip.height - config.gap).max(config.margin);
        flipped_vertical = true;
    }

    Placement {
        position: Position { left, top },
        flipped_horizontal,
        flipped_vertical,
    }
}
