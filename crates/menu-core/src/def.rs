//! Data-authored menu definitions.
//!
//! Frontends author battle menus as serde data (JSON in practice) instead
//! of hand-wiring builder calls. A definition mirrors the authored tree
//! one-to-one: `null` entries in `children` are empty slots.

use serde::{Deserialize, Serialize};

use crate::tree::{MenuTree, MenuTreeBuilder, MenuTreeError, NodeId};

/// One authored menu entry.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct MenuDef {
    /// Text shown when visible; omitted or empty means never displayed.
    #[serde(default)]
    pub label: Option<String>,

    /// Whether selecting the entry slides the panel deeper. Defaults to
    /// "has sub-options", which is what authored menus mean in practice.
    #[serde(default)]
    pub increases_depth: Option<bool>,

    /// Ordered slot list; `null` slots are host-bound leaf actions.
    #[serde(default)]
    pub children: Vec<Option<MenuDef>>,
}

impl MenuTree {
    /// Builds a tree from an authored definition, with the definition's
    /// top entry as the root.
    pub fn from_def(def: &MenuDef) -> Result<MenuTree, MenuTreeError> {
        let mut builder = MenuTreeBuilder::new();
        let root = insert(&mut builder, def)?;
        builder.build(root)
    }
}

fn insert(builder: &mut MenuTreeBuilder, def: &MenuDef) -> Result<NodeId, MenuTreeError> {
    let increases_depth = def.increases_depth.unwrap_or(!def.children.is_empty());
    let id = builder.entry(def.label.clone(), increases_depth);

    if !def.children.is_empty() {
        let mut slots = Vec::with_capacity(def.children.len());
        for child in &def.children {
            match child {
                Some(child_def) => slots.push(Some(insert(builder, child_def)?)),
                None => slots.push(None),
            }
        }
        builder.children(id, &slots)?;
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MenuConfig;

    #[test]
    fn builds_tree_from_json() {
        let def: MenuDef = serde_json::from_str(
            r#"{
                "label": "Battle",
                "children": [
                    { "label": "Fight", "children": [
                        { "label": "Slash" },
                        null
                    ]},
                    { "label": "Run" }
                ]
            }"#,
        )
        .unwrap();

        let tree = MenuTree::from_def(&def).unwrap();
        let root = tree.root();
        assert_eq!(tree.label(root), Some("Battle"));
        assert_eq!(tree.child_count(root), 2);

        let fight = tree.child_at(root, 0).unwrap();
        assert_eq!(tree.label(fight), Some("Fight"));
        assert!(tree.increases_depth(fight));
        assert_eq!(tree.child_count(fight), 2);
        assert_eq!(tree.child_at(fight, 1), None);

        let run = tree.child_at(root, 1).unwrap();
        assert!(!tree.increases_depth(run));
        assert_eq!(tree.parent(run), Some(root));
    }

    #[test]
    fn explicit_depth_flag_overrides_default() {
        let def: MenuDef = serde_json::from_str(
            r#"{ "label": "Broken", "increases_depth": true, "children": [] }"#,
        )
        .unwrap();

        // Logged as an authoring error, still builds.
        let tree = MenuTree::from_def(&def).unwrap();
        assert!(tree.increases_depth(tree.root()));
        assert_eq!(tree.child_count(tree.root()), 0);
    }

    #[test]
    fn oversized_slot_list_is_rejected() {
        let slots = (0..=MenuConfig::MAX_OPTIONS)
            .map(|_| "null".to_string())
            .collect::<Vec<_>>()
            .join(",");
        let def: MenuDef =
            serde_json::from_str(&format!(r#"{{ "label": "Battle", "children": [{slots}] }}"#))
                .unwrap();

        let err = MenuTree::from_def(&def).unwrap_err();
        assert!(matches!(err, MenuTreeError::TooManyChildren { .. }));
    }
}
