//! Application state for the battle-menu session.

use menu_core::NodeId;

/// Mutable frontend state: which node receives input, plus the status
/// line fed by fired battle actions.
///
/// The focused-node pointer lives here, never in the menu tree itself.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Node currently receiving navigation input.
    pub focused: NodeId,
    /// Last battle-action / status message, if any.
    pub status: Option<String>,
}

impl AppState {
    pub fn new(focused: NodeId) -> Self {
        Self {
            focused,
            status: None,
        }
    }

    /// Replaces the status line.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    /// Moves focus to another node.
    pub fn focus(&mut self, node: NodeId) {
        self.focused = node;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use menu_core::MenuTree;

    #[test]
    fn focus_moves_between_nodes() {
        let mut b = MenuTree::builder();
        let root = b.node("Battle");
        let fight = b.leaf("Fight");
        b.children(root, &[Some(fight)]).unwrap();
        let tree = b.build(root).unwrap();

        let mut state = AppState::new(tree.root());
        assert_eq!(state.focused, tree.root());
        let child = tree.child_at(tree.root(), 0).unwrap();
        state.focus(child);
        assert_eq!(state.focused, child);
        assert!(state.status.is_none());

        state.set_status("You ran away!");
        assert_eq!(state.status.as_deref(), Some("You ran away!"));
    }
}
