use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The three box layouts a word list can be drawn as.
///
/// ```text
/// Row                      Page          Table
/// +-----+--------+-----+   +--------+    +--------+
/// | moo | foobar | baz |   | moo    |    | moo    |
/// +-----+--------+-----+   | foobar |    +--------+
///                          | baz    |    | foobar |
///                          +--------+    +--------+
///                                        | baz    |
///                                        +--------+
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Layout {
    Row,
    Page,
    Table,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Unknown layout: {0} (expected row, page or table)")]
    UnknownLayout(String),
}

impl Layout {
    pub const ALL: [Layout; 3] = [Layout::Row, Layout::Page, Layout::Table];

    pub fn name(self) -> &'static str {
        match self {
            Layout::Row => "row",
            Layout::Page => "page",
            Layout::Table => "table",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Layout {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "row" | "line" => Ok(Layout::Row),
            "page" => Ok(Layout::Page),
            "table" => Ok(Layout::Table),
            _ => Err(LayoutError::UnknownLayout(s.to_string())),
        }
    }
}
