//! Rendered rows of the tree

use std::fmt;

/// Branch glyph placed before an entry name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connector {
    /// More siblings follow: `├── `
    Branch,
    /// Terminal entry of its directory: `└── `
    Last,
}

impl Connector {
    pub fn for_last(is_last: bool) -> Self {
        if is_last { Connector::Last } else { Connector::Branch }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Connector::Branch => "├── ",
            Connector::Last => "└── ",
        }
    }

    pub fn is_last(self) -> bool {
        matches!(self, Connector::Last)
    }
}

/// One row of the rendered tree.
///
/// The root row has no connector and no prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeLine {
    pub prefix: String,
    pub connector: Option<Connector>,
    pub name: String,
    pub is_dir: bool,
}

impl TreeLine {
    pub fn root(name: impl Into<String>) -> Self {
        Self {
            prefix: String::new(),
            connector: None,
            name: name.into(),
            is_dir: true,
        }
    }

    pub fn entry(
        prefix: impl Into<String>,
        connector: Connector,
        name: impl Into<String>,
        is_dir: bool,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            connector: Some(connector),
            name: name.into(),
            is_dir,
        }
    }

    pub fn is_root(&self) -> bool {
        self.connector.is_none()
    }
}

impl fmt::Display for TreeLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.connector {
            None => write!(f, "{}", self.name),
            Some(connector) if self.is_dir => {
                write!(f, "{}{}{}", self.prefix, connector.glyph(), self.name)
            }
            Some(connector) => {
                write!(f, "{}{}- {}", self.prefix, connector.glyph(), self.name)
            }
        }
    }
}
