//! Configuration types for the tree walker

use super::filter::IgnoreRules;

/// How the terminal entry of a directory is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConnectorMode {
    /// The last visible entry gets `└── `.
    #[default]
    Filtered,
    /// The last entry of the unfiltered listing decides. When that entry is
    /// excluded, no visible sibling gets `└── `.
    Legacy,
}

/// Configuration for tree walking behavior.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    pub rules: IgnoreRules,
    pub connector_mode: ConnectorMode,
    /// Descend only this many levels below the root. `None` means no limit.
    pub max_depth: Option<usize>,
}
