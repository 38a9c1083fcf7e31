//! Directory tree walking logic
//!
//! `TreeWalker` lists a directory depth-first, drops entries matched by
//! `IgnoreRules`, and produces one `TreeLine` per visible entry.

mod config;
mod filter;
mod line;
mod utils;
mod walker;

// Re-export public types
pub use config::{ConnectorMode, WalkerConfig};
pub use filter::{IgnoreRules, parse_list};
pub use line::{Connector, TreeLine};
pub use utils::resolve_root_name;
pub use walker::TreeWalker;
