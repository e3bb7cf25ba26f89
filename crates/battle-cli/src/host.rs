//! Host-side collaborators the menu core signals into.
//!
//! The core's two-collaborator contract maps onto two small structs: a
//! panel tracker receiving depth/highlight signals and a displayed-label
//! store the widgets read back when rendering.

use std::collections::HashMap;

use menu_core::{BattleUi, LabelSurface, NodeId};

/// Visual nesting and highlight bookkeeping for the panel column stack.
#[derive(Clone, Debug, Default)]
pub struct PanelHost {
    depth: usize,
    highlight: usize,
}

impl PanelHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current visual nesting level (0 = root panel only).
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Highlight index of the active panel.
    pub fn highlight(&self) -> usize {
        self.highlight
    }
}

impl BattleUi for PanelHost {
    fn increase_depth(&mut self) {
        self.depth += 1;
    }

    fn decrease_depth(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    fn refresh_highlight(&mut self, index: usize) {
        self.highlight = index;
    }
}

/// Displayed-label state, one binding per node.
///
/// Widgets render exactly what is stored here; a node whose label was
/// cleared by the core simply draws as a blank row.
#[derive(Clone, Debug, Default)]
pub struct LabelStore {
    displayed: HashMap<NodeId, String>,
}

impl LabelStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The node's currently displayed text, if any.
    pub fn displayed(&self, node: NodeId) -> Option<&str> {
        self.displayed.get(&node).map(String::as_str)
    }
}

impl LabelSurface for LabelStore {
    fn set_label(&mut self, node: NodeId, text: &str) {
        self.displayed.insert(node, text.to_string());
    }

    fn clear_label(&mut self, node: NodeId) {
        self.displayed.remove(&node);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use menu_core::MenuTree;

    #[test]
    fn depth_never_goes_negative() {
        let mut panel = PanelHost::new();
        panel.decrease_depth();
        assert_eq!(panel.depth(), 0);
        panel.increase_depth();
        panel.increase_depth();
        panel.decrease_depth();
        assert_eq!(panel.depth(), 1);
    }

    #[test]
    fn highlight_tracks_latest_refresh() {
        let mut panel = PanelHost::new();
        panel.refresh_highlight(2);
        panel.refresh_highlight(0);
        assert_eq!(panel.highlight(), 0);
    }

    #[test]
    fn label_store_round_trips_display_state() {
        let mut b = MenuTree::builder();
        let root = b.node("Battle");
        let tree = b.build(root).unwrap();

        let mut store = LabelStore::new();
        store.set_label(tree.root(), "Battle");
        assert_eq!(store.displayed(tree.root()), Some("Battle"));
        store.clear_label(tree.root());
        assert_eq!(store.displayed(tree.root()), None);
    }
}
