//! Menu sizing constants and tunable parameters.

/// Menu configuration constants.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MenuConfig;

impl MenuConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of option slots per node. Every node's children array
    /// is validated against this bound when the tree is built.
    pub const MAX_OPTIONS: usize = 4;
}
