//! The demo battle menu and the actions bound to its slots.

use std::collections::HashMap;

use anyhow::{Context, Result};
use menu_core::{MenuDef, MenuTree, NodeId};

/// Authored demo menu. `null` entries are empty slots: selectable
/// positions whose action lives in [`ActionBindings`], not in the tree.
const DEMO_MENU: &str = r#"{
    "label": "Battle",
    "children": [
        { "label": "Fight", "children": [
            { "label": "Slash" },
            { "label": "Guard" },
            null,
            null
        ]},
        { "label": "Skill", "children": [
            { "label": "Fira" },
            { "label": "Cura" },
            { "label": "Thundara" }
        ]},
        { "label": "Item", "children": [
            { "label": "Potion" },
            { "label": "Ether" },
            null
        ]},
        { "label": "Run" }
    ]
}"#;

pub fn demo_tree() -> Result<MenuTree> {
    let def: MenuDef =
        serde_json::from_str(DEMO_MENU).context("parse demo menu definition")?;
    MenuTree::from_def(&def).context("build demo menu tree")
}

/// Battle actions the host owns: messages for empty slots and terminal
/// entries. A real battle system would queue commands here instead.
pub struct ActionBindings {
    empty_slots: HashMap<(NodeId, usize), String>,
}

impl ActionBindings {
    pub fn demo(tree: &MenuTree) -> Self {
        let mut empty_slots = HashMap::new();
        if let Some(item) = find_by_label(tree, "Item") {
            empty_slots.insert((item, 2), "Your bag has nothing else.".to_string());
        }
        Self { empty_slots }
    }

    /// Message for a select that hit an empty slot.
    pub fn empty_slot_message(&self, node: NodeId, slot: usize) -> &str {
        self.empty_slots
            .get(&(node, slot))
            .map(String::as_str)
            .unwrap_or("Nothing happens.")
    }

    /// Message for firing a terminal entry.
    pub fn terminal_message(&self, label: Option<&str>) -> String {
        match label {
            Some("Run") => "You fled from the battle!".to_string(),
            Some(label) => format!("You used {label}!"),
            None => "Nothing happens.".to_string(),
        }
    }
}

/// Breadth-first label lookup over the authored tree.
fn find_by_label(tree: &MenuTree, label: &str) -> Option<NodeId> {
    let mut queue = vec![tree.root()];
    while let Some(node) = queue.pop() {
        if tree.label(node) == Some(label) {
            return Some(node);
        }
        for slot in 0..tree.child_count(node) {
            if let Some(child) = tree.child_at(node, slot) {
                queue.push(child);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_menu_builds() {
        let tree = demo_tree().unwrap();
        let root = tree.root();
        assert_eq!(tree.label(root), Some("Battle"));
        assert_eq!(tree.child_count(root), 4);

        let fight = tree.child_at(root, 0).unwrap();
        assert_eq!(tree.label(fight), Some("Fight"));
        assert_eq!(tree.child_count(fight), 4);
        assert_eq!(tree.child_at(fight, 2), None);

        // Run is a terminal entry: present child, no slots of its own.
        let run = tree.child_at(root, 3).unwrap();
        assert_eq!(tree.child_count(run), 0);
        assert!(!tree.increases_depth(run));
    }

    #[test]
    fn bindings_cover_the_item_slot() {
        let tree = demo_tree().unwrap();
        let bindings = ActionBindings::demo(&tree);
        let item = find_by_label(&tree, "Item").unwrap();

        assert_eq!(
            bindings.empty_slot_message(item, 2),
            "Your bag has nothing else."
        );
        assert_eq!(bindings.empty_slot_message(item, 0), "Nothing happens.");
        assert_eq!(
            bindings.terminal_message(Some("Potion")),
            "You used Potion!"
        );
        assert_eq!(
            bindings.terminal_message(Some("Run")),
            "You fled from the battle!"
        );
    }
}
