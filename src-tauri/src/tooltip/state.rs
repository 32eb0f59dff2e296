use crate::models::CloseReason;
use serde::{Deserialize, Serialize};

/// Which trigger, if any, owns the single visible tooltip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipState {
    active_trigger_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Opened { trigger_id: String },
    Replaced { previous: String, trigger_id: String },
    Closed { trigger_id: String, reason: CloseReason },
    Unchanged,
}

impl TooltipState {
    pub fn active_trigger(&self) -> Option<&str> {
        self.active_trigger_id.as_deref()
    }

    pub fn is_visible(&self) -> bool {
        self.active_trigger_id.is_some()
    }

    /// Repeating the action on the open trigger toggles the tooltip off.
    pub fn info_action(&mut self, trigger_id: &str) -> Transition {
        match self.active_trigger_id.take() {
            Some(active) if active == trigger_id => Transition::Closed {
                trigger_id: active,
                reason: CloseReason::Toggle,
            },
            Some(previous) => {
                self.active_trigger_id = Some(trigger_id.to_string());
                Transition::Replaced {
                    previous,
                    trigger_id: trigger_id.to_string(),
                }
            }
            None => {
                self.active_trigger_id = Some(trigger_id.to_string());
                Transition::Opened {
                    trigger_id: trigger_id.to_string(),
                }
            }
        }
    }

    pub fn close(&mut self, reason: CloseReason) -> Transition {
        match self.active_trigger_id.take() {
            Some(trigger_id) => Transition::Closed { trigger_id, reason },
            None => Transition::Unchanged,
        }
    }

    /// Clicks landing on the tooltip itself or on an info button keep it open.
    pub fn outside_click(&mut self, inside_tooltip: bool) -> Transition {
        if inside_tooltip {
            return Transition::Unchanged;
        }
        self.close(CloseReason::OutsideClick)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        let state = TooltipState::default();
        assert!(!state.is_visible());
        assert_eq!(state.active_trigger(), None);
    }

    #[test]
    fn second_trigger_replaces_first() {
        let mut state = TooltipState::default();
        assert_eq!(
            state.info_action("a"),
            Transition::Opened {
                trigger_id: "a".to_string()
            }
        );
        assert_eq!(
            state.info_action("b"),
            Transition::Replaced {
                previous: "a".to_string(),
                trigger_id: "b".to_string()
            }
        );
        assert_eq!(state.active_trigger(), Some("b"));
    }

    #[test]
    fn repeated_trigger_toggles_off() {
        let mut state = TooltipState::default();
        state.info_action("a");
        assert_eq!(
            state.info_action("a"),
            Transition::Closed {
                trigger_id: "a".to_string(),
                reason: CloseReason::Toggle
            }
        );
        assert!(!state.is_visible());
    }

    #[test]
    fn scroll_and_explicit_close_hide() {
        let mut state = TooltipState::default();
        state.info_action("a");
        assert!(matches!(state.close(CloseReason::Scroll), Transition::Closed { .. }));
        assert_eq!(state.close(CloseReason::Explicit), Transition::Unchanged);
    }

    #[test]
    fn outside_click_respects_tooltip_area() {
        let mut state = TooltipState::default();
        state.info_action("a");
        assert_eq!(state.outside_click(true), Transition::Unchanged);
        assert!(state.is_visible());
        assert!(matches!(
            state.outside_click(false),
            Transition::Closed {
                reason: CloseReason::OutsideClick,
                ..
            }
        ));
        assert!(!state.is_visible());
    }
}
