//! Navigation state machine for hierarchical battle menus.
//!
//! This crate implements the menu tree a turn-based battle UI navigates:
//! a static, author-configured N-ary tree of labelled options with a
//! per-node cursor, depth-first select/back traversal, and a show/hide
//! label-visibility protocol.
//!
//! - **No rendering, no input**: the host frontend drives navigation and
//!   is signalled back through the [`BattleUi`] and [`LabelSurface`] traits
//! - **Arena ownership**: [`MenuTree`] owns every node; nodes reference
//!   each other by copyable [`NodeId`] handles, so parent back-links are
//!   plain indices rather than owning pointers
//! - **Static tree**: nodes are built once through [`MenuTreeBuilder`]
//!   (or deserialized via the `serde` feature); only cursor and label
//!   visibility mutate during navigation
//!
//! # Architecture
//!
//! - [`MenuTree`]: arena holding the nodes plus all navigation operations
//! - [`NavCommand`] / [`NavOutcome`]: host-facing command dispatch
//! - [`BattleUi`]: depth and highlight signals to the host UI manager
//! - [`LabelSurface`]: per-node "set text" / "clear text" display binding
pub mod config;
pub mod host;
pub mod nav;
pub mod tree;

#[cfg(feature = "serde")]
pub mod def;

// Re-export core types for ergonomic API
pub use host::{BattleUi, LabelSurface, NavCommand, NavOutcome};
pub use tree::{MenuTree, MenuTreeBuilder, MenuTreeError, NodeId};

#[cfg(feature = "serde")]
pub use def::MenuDef;
