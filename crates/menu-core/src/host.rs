//! Collaborator traits and the host-facing navigation vocabulary.
//!
//! The core talks to exactly two kinds of collaborators: the host UI
//! manager ([`BattleUi`]), which receives depth and highlight signals, and
//! the label display surface ([`LabelSurface`]), whose only capability is
//! "set displayed text" / "clear displayed text" for a node.

use crate::tree::NodeId;

/// Depth and highlight signals sent to the host UI manager.
///
/// The host tracks which node is focused and how deep the visual nesting
/// is; the core only tells it when to slide a panel and which index to
/// highlight.
pub trait BattleUi {
    /// Push one visual nesting level (e.g. slide a new panel in).
    fn increase_depth(&mut self);

    /// Pop one visual nesting level.
    fn decrease_depth(&mut self);

    /// Move the highlight of the active panel to `index`.
    fn refresh_highlight(&mut self, index: usize);
}

/// Per-node label display binding.
///
/// Each node owns exactly one display binding, keyed by its [`NodeId`].
/// No other capability is assumed of the rendering side.
pub trait LabelSurface {
    /// Display `text` as the node's label.
    fn set_label(&mut self, node: NodeId, text: &str);

    /// Clear the node's displayed label.
    fn clear_label(&mut self, node: NodeId);
}

/// A navigation input delivered by the host to the focused node.
///
/// Left/right map directly onto ascend/descend semantics; up/down only
/// move the cursor within the focused node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum NavCommand {
    Select,
    Back,
    Left,
    Right,
    Up,
    Down,
}

/// Result of applying a [`NavCommand`] to the focused node.
///
/// `LeafAction` reports a select on an empty slot: the slot represents a
/// terminal battle action bound by the host, not a sub-menu, so the host
/// dispatches it by slot index without any downcasting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavOutcome {
    /// Focus moves down to the returned child.
    Descend(NodeId),
    /// Focus moves up to the returned parent.
    Ascend(NodeId),
    /// Select hit an empty slot; the host owns whatever action is bound there.
    LeafAction { slot: usize },
    /// No focus change (cursor moves, root back, degraded select).
    Stay,
}

impl NavOutcome {
    /// The newly focused node, if the outcome changes focus.
    pub fn focus(self) -> Option<NodeId> {
        match self {
            NavOutcome::Descend(id) | NavOutcome::Ascend(id) => Some(id),
            NavOutcome::LeafAction { .. } | NavOutcome::Stay => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_display_is_snake_case() {
        assert_eq!(NavCommand::Select.to_string(), "select");
        assert_eq!(NavCommand::Down.to_string(), "down");
    }

    #[test]
    fn outcome_focus_only_on_transitions() {
        let id = crate::tree::MenuTreeBuilder::new().node("x");
        assert_eq!(NavOutcome::Descend(id).focus(), Some(id));
        assert_eq!(NavOutcome::Ascend(id).focus(), Some(id));
        assert_eq!(NavOutcome::LeafAction { slot: 2 }.focus(), None);
        assert_eq!(NavOutcome::Stay.focus(), None);
    }
}
