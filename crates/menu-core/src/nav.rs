//! Navigation protocol over the menu tree.
//!
//! The host delivers one input at a time to whichever node it considers
//! focused; operations here mutate that node's cursor or hand back the
//! node that should become newly focused. The focused-node pointer itself
//! lives in the host, never in the tree.
//!
//! Focus transitions ([`MenuTree::select`], [`MenuTree::back`]) leave the
//! tree untouched apart from label visibility, so they borrow the tree
//! immutably; only the cursor movements take `&mut self`.

use crate::host::{BattleUi, LabelSurface, NavCommand, NavOutcome};
use crate::tree::{MenuTree, NodeId};

impl MenuTree {
    /// Enters the session at the root: reveals the root's children and
    /// schedules the initial highlight refresh.
    ///
    /// The refresh is deferred rather than run inline because the host's
    /// highlight subsystem may finish initializing after the tree does.
    /// The host event loop fires it via [`fire_deferred_refresh`]
    /// (or drains it with [`take_deferred_refresh`]) once its visual state
    /// is ready; if the tree is torn down first the refresh is dropped.
    ///
    /// [`fire_deferred_refresh`]: Self::fire_deferred_refresh
    /// [`take_deferred_refresh`]: Self::take_deferred_refresh
    pub fn initialize_as_root(&mut self, labels: &mut dyn LabelSurface) {
        self.pending_refresh = Some(0);
        self.set_children_visible(self.root, true, labels);
    }

    /// Drains the scheduled initial refresh, if one is pending.
    pub fn take_deferred_refresh(&mut self) -> Option<usize> {
        self.pending_refresh.take()
    }

    /// Fires the scheduled initial refresh against the host, once.
    /// Returns whether a refresh was pending.
    pub fn fire_deferred_refresh(&mut self, ui: &mut dyn BattleUi) -> bool {
        match self.pending_refresh.take() {
            Some(index) => {
                ui.refresh_highlight(index);
                true
            }
            None => false,
        }
    }

    /// The primary "move deeper" action.
    ///
    /// Signals the depth increase (if configured) and the anticipated
    /// highlight reset, then descends into the child under the cursor:
    /// that child becomes the only visible sibling on this level, reveals
    /// its own children, and is returned as the new focused node.
    ///
    /// An empty slot under the cursor is not an error: the slot stands for
    /// a terminal battle action owned by the host, so `None` is returned
    /// and no visibility state changes.
    pub fn select(
        &self,
        node: NodeId,
        ui: &mut dyn BattleUi,
        labels: &mut dyn LabelSurface,
    ) -> Option<NodeId> {
        if self.child_count(node) == 0 {
            // Authoring mistake already reported at build time; degrade to
            // a no-op instead of indexing out of range.
            tracing::warn!(%node, "select on a node without option slots");
            return None;
        }
        if self.increases_depth(node) {
            ui.increase_depth();
        }
        ui.refresh_highlight(0);

        let slot = self.cursor(node);
        let child = self.child_at(node, slot)?;
        self.set_child_visible_at(node, slot, labels);
        self.set_children_visible(child, true, labels);
        tracing::debug!(from = %node, to = %child, slot, "descend");
        Some(child)
    }

    /// The primary "move up" action.
    ///
    /// Hides this node's children, restores the parent-level highlight to
    /// this node's own slot index (skipped on a lookup miss), reveals the
    /// parent's children and returns the parent as the new focused node.
    /// On the root this is a defined no-op returning `None`.
    pub fn back(
        &self,
        node: NodeId,
        ui: &mut dyn BattleUi,
        labels: &mut dyn LabelSurface,
    ) -> Option<NodeId> {
        let parent = self.parent(node)?;
        ui.decrease_depth();
        self.hide_children(node, labels);
        if let Some(index) = self.index_in_parent(node) {
            ui.refresh_highlight(index);
        }
        self.set_children_visible(parent, true, labels);
        tracing::debug!(from = %node, to = %parent, "ascend");
        Some(parent)
    }

    /// Left input maps onto ascend semantics.
    pub fn navigate_left(
        &self,
        node: NodeId,
        ui: &mut dyn BattleUi,
        labels: &mut dyn LabelSurface,
    ) -> Option<NodeId> {
        self.back(node, ui, labels)
    }

    /// Right input maps onto descend semantics.
    pub fn navigate_right(
        &self,
        node: NodeId,
        ui: &mut dyn BattleUi,
        labels: &mut dyn LabelSurface,
    ) -> Option<NodeId> {
        self.select(node, ui, labels)
    }

    /// Moves the cursor one slot up, wrapping to the last slot.
    pub fn navigate_up(&mut self, node: NodeId, ui: &mut dyn BattleUi) {
        let count = self.child_count(node);
        if count == 0 {
            return;
        }
        let entry = &mut self.nodes[node.index()];
        entry.cursor = if entry.cursor == 0 {
            count - 1
        } else {
            entry.cursor - 1
        };
        ui.refresh_highlight(entry.cursor);
    }

    /// Moves the cursor one slot down, wrapping to the first slot.
    pub fn navigate_down(&mut self, node: NodeId, ui: &mut dyn BattleUi) {
        let count = self.child_count(node);
        if count == 0 {
            return;
        }
        let entry = &mut self.nodes[node.index()];
        entry.cursor = if entry.cursor < count - 1 {
            entry.cursor + 1
        } else {
            0
        };
        ui.refresh_highlight(entry.cursor);
    }

    /// Shows or hides the labels of every present child.
    ///
    /// Showing only displays children with a non-empty stored label;
    /// hiding clears the displayed label regardless of what is stored.
    pub fn set_children_visible(
        &self,
        node: NodeId,
        visible: bool,
        labels: &mut dyn LabelSurface,
    ) {
        for slot in 0..self.child_count(node) {
            let Some(child) = self.child_at(node, slot) else {
                continue;
            };
            if visible {
                if let Some(text) = self.label(child) {
                    labels.set_label(child, text);
                }
            } else {
                labels.clear_label(child);
            }
        }
    }

    /// Single-selection reveal: keeps only the child at `index` visible
    /// and blanks every other present sibling.
    pub fn set_child_visible_at(&self, node: NodeId, index: usize, labels: &mut dyn LabelSurface) {
        for slot in 0..self.child_count(node) {
            let Some(child) = self.child_at(node, slot) else {
                continue;
            };
            if slot == index {
                if let Some(text) = self.label(child) {
                    labels.set_label(child, text);
                }
            } else {
                labels.clear_label(child);
            }
        }
    }

    /// Clears the displayed labels of every present child.
    pub fn hide_children(&self, node: NodeId, labels: &mut dyn LabelSurface) {
        self.set_children_visible(node, false, labels);
    }

    /// This node's slot index from its parent's perspective, if it has a
    /// parent and the lookup succeeds.
    pub fn index_in_parent(&self, node: NodeId) -> Option<usize> {
        let parent = self.parent(node)?;
        self.find_child_index(parent, node)
    }

    /// Finds the slot of `child` among `parent`'s children.
    ///
    /// Identity match is authoritative. Comparing label text is kept only
    /// as a legacy fallback for callers holding a detached node with the
    /// same label; it is ambiguous when siblings share a label.
    pub fn find_child_index(&self, parent: NodeId, child: NodeId) -> Option<usize> {
        let slots = &self.nodes[parent.index()].children;
        if let Some(slot) = slots.iter().position(|&s| s == Some(child)) {
            return Some(slot);
        }
        let wanted = self.label(child)?;
        slots.iter().position(|&s| {
            s.is_some_and(|candidate| self.label(candidate) == Some(wanted))
        })
    }

    /// Applies one host command to the focused node and reports the
    /// transition, so the host can dispatch without inspecting slots.
    pub fn apply(
        &mut self,
        node: NodeId,
        command: NavCommand,
        ui: &mut dyn BattleUi,
        labels: &mut dyn LabelSurface,
    ) -> NavOutcome {
        tracing::debug!(%node, %command, "nav input");
        match command {
            NavCommand::Select | NavCommand::Right => {
                if self.child_count(node) == 0 {
                    return NavOutcome::Stay;
                }
                let slot = self.cursor(node);
                match self.select(node, ui, labels) {
                    Some(child) => NavOutcome::Descend(child),
                    None => NavOutcome::LeafAction { slot },
                }
            }
            NavCommand::Back | NavCommand::Left => match self.back(node, ui, labels) {
                Some(parent) => NavOutcome::Ascend(parent),
                None => NavOutcome::Stay,
            },
            NavCommand::Up => {
                self.navigate_up(node, ui);
                NavOutcome::Stay
            }
            NavCommand::Down => {
                self.navigate_down(node, ui);
                NavOutcome::Stay
            }
        }
    }
}
