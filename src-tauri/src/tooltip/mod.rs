pub mod position;
pub mod render;
pub mod state;

pub use position::{place, PlacementConfig};
pub use render::{render, render_for, TooltipContent};
pub use state::{TooltipState, Transition};

use crate::models::{CloseReason, Placement};
use serde::{Deserialize, Serialize};

/// What the webview should do with the tooltip element after an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "kebab-case")]
pub enum TooltipUpdate {
    #[serde(rename_all = "camelCase")]
    Shown {
        trigger_id: String,
        replaced: Option<String>,
        content: TooltipContent,
        placement: Placement,
    },
    #[serde(rename_all = "camelCase")]
    Hidden {
        trigger_id: String,
        reason: CloseReason,
    },
    Unchanged,
}

impl TooltipUpdate {
    pub fn from_close(transition: Transition) -> Self {
        match transition {
            Transition::Closed { trigger_id, reason } => Self::Hidden { trigger_id, reason },
            _ => Self::Unchanged,
        }
    }
}
