//! Arena-owned menu tree and its builder.
//!
//! The tree is static: every node is created through [`MenuTreeBuilder`]
//! before navigation begins, parent back-references are wired while slots
//! are attached, and nothing is added or removed afterwards. Only each
//! node's cursor and the displayed-label state mutate at runtime.

use arrayvec::ArrayVec;

use crate::config::MenuConfig;

/// Handle to a node inside a [`MenuTree`].
///
/// Ids are only meaningful for the tree whose builder created them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Fixed-capacity children array: present slots name a child, empty slots
/// stand for leaf actions bound by the host.
pub(crate) type SlotArray = ArrayVec<Option<NodeId>, { MenuConfig::MAX_OPTIONS }>;

/// One selectable menu entry.
#[derive(Clone, Debug)]
pub(crate) struct MenuNode {
    /// Text shown when visible; `None` or empty means never displayed.
    pub label: Option<String>,
    /// Ordered, fixed-size slot list. `None` slots disable depth-increase
    /// at that position.
    pub children: SlotArray,
    /// Back-reference wired once while building. `None` only for the root.
    pub parent: Option<NodeId>,
    /// Currently highlighted child index, `[0, children.len())`.
    pub cursor: usize,
    /// Whether selecting this node pushes a visual nesting level.
    pub increases_depth: bool,
}

/// Structural errors a static menu tree must not contain.
///
/// These are raised while building; the softer "`increases_depth` without
/// sub-options" authoring mistake is only logged (navigation degrades to a
/// no-op instead of failing startup).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MenuTreeError {
    #[error("node {node} has {got} child slots, limit is {max}")]
    TooManyChildren {
        node: NodeId,
        got: usize,
        max: usize,
    },

    #[error("node {child} is already attached to {existing}, cannot attach to {parent}")]
    DuplicateParent {
        child: NodeId,
        existing: NodeId,
        parent: NodeId,
    },

    #[error("children of node {node} were already configured")]
    ChildrenAlreadySet { node: NodeId },

    #[error("root node {root} has a parent and cannot start navigation")]
    RootHasParent { root: NodeId },
}

/// Builder assembling a static menu tree.
///
/// Create entries with [`node`](Self::node) / [`leaf`](Self::leaf), attach
/// slot arrays with [`children`](Self::children), then seal the tree with
/// [`build`](Self::build).
pub struct MenuTreeBuilder {
    nodes: Vec<MenuNode>,
}

impl MenuTreeBuilder {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Adds a sub-menu entry (selecting it slides the panel one level deeper).
    pub fn node(&mut self, label: impl Into<String>) -> NodeId {
        self.entry(Some(label.into()), true)
    }

    /// Adds a terminal entry: a labelled option that never increases depth.
    pub fn leaf(&mut self, label: impl Into<String>) -> NodeId {
        self.entry(Some(label.into()), false)
    }

    /// Adds an entry with explicit label and depth behavior.
    pub fn entry(&mut self, label: Option<String>, increases_depth: bool) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(MenuNode {
            label,
            children: SlotArray::new(),
            parent: None,
            cursor: 0,
            increases_depth,
        });
        id
    }

    /// Attaches the slot array of `parent`, wiring each present child's
    /// back-reference in the same pass.
    pub fn children(
        &mut self,
        parent: NodeId,
        slots: &[Option<NodeId>],
    ) -> Result<(), MenuTreeError> {
        if slots.len() > MenuConfig::MAX_OPTIONS {
            return Err(MenuTreeError::TooManyChildren {
                node: parent,
                got: slots.len(),
                max: MenuConfig::MAX_OPTIONS,
            });
        }
        if !self.nodes[parent.index()].children.is_empty() {
            return Err(MenuTreeError::ChildrenAlreadySet { node: parent });
        }
        for &slot in slots {
            if let Some(child) = slot {
                if let Some(existing) = self.nodes[child.index()].parent {
                    return Err(MenuTreeError::DuplicateParent {
                        child,
                        existing,
                        parent,
                    });
                }
                self.nodes[child.index()].parent = Some(parent);
            }
            self.nodes[parent.index()].children.push(slot);
        }
        Ok(())
    }

    /// Seals the tree with `root` as the session entry point.
    ///
    /// Validates that the root is parentless and the structure acyclic,
    /// and logs (without failing) every node configured to increase depth
    /// despite having no sub-options.
    pub fn build(self, root: NodeId) -> Result<MenuTree, MenuTreeError> {
        if let Some(parent) = self.nodes[root.index()].parent {
            tracing::error!(%root, %parent, "designated root has a parent");
            return Err(MenuTreeError::RootHasParent { root });
        }

        // Parent-once wiring rules out sharing, and a parentless root can
        // never sit on a cycle, so this walk terminates. Unreached nodes
        // are dead authoring data worth flagging.
        let mut visited = vec![false; self.nodes.len()];
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            if visited[id.index()] {
                continue;
            }
            visited[id.index()] = true;
            stack.extend(self.nodes[id.index()].children.iter().flatten());
        }

        for (idx, node) in self.nodes.iter().enumerate() {
            if node.increases_depth && node.children.is_empty() {
                // Authoring bug: select() on this node degrades to a no-op.
                tracing::error!(
                    node = %NodeId(idx as u32),
                    label = node.label.as_deref().unwrap_or(""),
                    "can't increase depth without sub-options"
                );
            }
            if !visited[idx] && idx != root.index() {
                tracing::warn!(
                    node = %NodeId(idx as u32),
                    "node is not reachable from the root"
                );
            }
        }

        Ok(MenuTree {
            nodes: self.nodes,
            root,
            pending_refresh: None,
        })
    }
}

impl Default for MenuTreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The arena owning every menu node, plus all navigation state.
///
/// Navigation operations live in [`crate::nav`]; this type only exposes
/// the structural accessors hosts and widgets need.
#[derive(Clone, Debug)]
pub struct MenuTree {
    pub(crate) nodes: Vec<MenuNode>,
    pub(crate) root: NodeId,
    /// Deferred initial highlight refresh scheduled by `initialize_as_root`.
    pub(crate) pending_refresh: Option<usize>,
}

impl MenuTree {
    /// Starts assembling a new tree.
    pub fn builder() -> MenuTreeBuilder {
        MenuTreeBuilder::new()
    }

    /// The designated session entry point.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The node's stored label, if it has a non-empty one.
    pub fn label(&self, node: NodeId) -> Option<&str> {
        self.nodes[node.index()]
            .label
            .as_deref()
            .filter(|l| !l.is_empty())
    }

    /// Number of slots (present or empty) of the node.
    pub fn child_count(&self, node: NodeId) -> usize {
        self.nodes[node.index()].children.len()
    }

    /// The child occupying slot `index`, if the slot exists and is present.
    pub fn child_at(&self, node: NodeId, index: usize) -> Option<NodeId> {
        self.nodes[node.index()].children.get(index).copied().flatten()
    }

    /// The node's parent; `None` for the root.
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.index()].parent
    }

    /// The node's current cursor position.
    pub fn cursor(&self, node: NodeId) -> usize {
        self.nodes[node.index()].cursor
    }

    /// Whether selecting the node pushes a visual nesting level.
    pub fn increases_depth(&self, node: NodeId) -> bool {
        self.nodes[node.index()].increases_depth
    }

    /// The chain of nodes from the root down to `node`, inclusive.
    pub fn path_from_root(&self, node: NodeId) -> Vec<NodeId> {
        let mut path = vec![node];
        let mut current = node;
        while let Some(parent) = self.parent(current) {
            path.push(parent);
            current = parent;
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_wires_parent_links() {
        let mut b = MenuTree::builder();
        let root = b.node("Battle");
        let fight = b.node("Fight");
        let run = b.leaf("Run");
        b.children(root, &[Some(fight), Some(run)]).unwrap();
        let tree = b.build(root).unwrap();

        assert_eq!(tree.parent(fight), Some(root));
        assert_eq!(tree.parent(run), Some(root));
        assert_eq!(tree.parent(root), None);
        assert_eq!(tree.child_count(root), 2);
        assert_eq!(tree.child_at(root, 0), Some(fight));
    }

    #[test]
    fn empty_slots_are_preserved() {
        let mut b = MenuTree::builder();
        let root = b.node("Battle");
        let fight = b.node("Fight");
        b.children(root, &[Some(fight), None, None]).unwrap();
        let tree = b.build(root).unwrap();

        assert_eq!(tree.child_count(root), 3);
        assert_eq!(tree.child_at(root, 1), None);
        assert_eq!(tree.child_at(root, 2), None);
    }

    #[test]
    fn rejects_more_slots_than_max_options() {
        let mut b = MenuTree::builder();
        let root = b.node("Battle");
        let slots = vec![None; MenuConfig::MAX_OPTIONS + 1];
        let err = b.children(root, &slots).unwrap_err();
        assert!(matches!(err, MenuTreeError::TooManyChildren { .. }));
    }

    #[test]
    fn rejects_child_shared_between_parents() {
        let mut b = MenuTree::builder();
        let root = b.node("Battle");
        let other = b.node("Other");
        let shared = b.leaf("Shared");
        b.children(root, &[Some(shared)]).unwrap();
        let err = b.children(other, &[Some(shared)]).unwrap_err();
        assert!(matches!(err, MenuTreeError::DuplicateParent { .. }));
    }

    #[test]
    fn rejects_reconfigured_children() {
        let mut b = MenuTree::builder();
        let root = b.node("Battle");
        let a = b.leaf("A");
        let c = b.leaf("B");
        b.children(root, &[Some(a)]).unwrap();
        let err = b.children(root, &[Some(c)]).unwrap_err();
        assert!(matches!(err, MenuTreeError::ChildrenAlreadySet { .. }));
    }

    #[test]
    fn rejects_parented_root() {
        let mut b = MenuTree::builder();
        let root = b.node("Battle");
        let child = b.node("Fight");
        b.children(root, &[Some(child)]).unwrap();
        let err = b.build(child).unwrap_err();
        assert!(matches!(err, MenuTreeError::RootHasParent { .. }));
    }

    #[test]
    fn cycles_cannot_reach_a_root() {
        let mut b = MenuTree::builder();
        let a = b.node("A");
        let c = b.node("B");
        b.children(a, &[Some(c)]).unwrap();
        b.children(c, &[Some(a)]).unwrap();

        // The mutual attachment gave both nodes a parent, so neither can
        // be adopted elsewhere or serve as the root.
        let root = b.node("Battle");
        let err = b.children(root, &[Some(a)]).unwrap_err();
        assert!(matches!(err, MenuTreeError::DuplicateParent { .. }));
        let err = b.build(a).unwrap_err();
        assert!(matches!(err, MenuTreeError::RootHasParent { .. }));
    }

    #[test]
    fn misconfigured_depth_node_still_builds() {
        let mut b = MenuTree::builder();
        // increases_depth with zero children: logged, not raised.
        let root = b.node("Battle");
        let tree = b.build(root).unwrap();
        assert_eq!(tree.child_count(root), 0);
    }

    #[test]
    fn empty_label_is_never_reported() {
        let mut b = MenuTree::builder();
        let root = b.node("");
        let tree = b.build(root).unwrap();
        assert_eq!(tree.label(root), None);
    }

    #[test]
    fn path_from_root_walks_parent_chain() {
        let mut b = MenuTree::builder();
        let root = b.node("Battle");
        let fight = b.node("Fight");
        let slash = b.leaf("Slash");
        b.children(root, &[Some(fight)]).unwrap();
        b.children(fight, &[Some(slash)]).unwrap();
        let tree = b.build(root).unwrap();

        assert_eq!(tree.path_from_root(slash), vec![root, fight, slash]);
        assert_eq!(tree.path_from_root(root), vec![root]);
    }
}
