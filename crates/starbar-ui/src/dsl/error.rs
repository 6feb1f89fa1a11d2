use std::fmt;

use crate::assets::AssetError;

/// A parse error from the `.mkml` DSL, positioned at a 1-based line/column.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub message: String,
    pub line: u32,
    pub col: u32,
}

impl ParseError {
    pub(crate) fn new(msg: impl Into<String>, line: u32, col: u32) -> Self {
        Self { message: msg.into(), line, col }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mkml parse error at {}:{}: {}", self.line, self.col, self.message)
    }
}

impl std::error::Error for ParseError {}

/// Failure to turn markup into a live widget.
#[derive(Debug, thiserror::Error)]
pub enum DslError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("failed to load star assets: {0}")]
    Asset(#[from] AssetError),

    #[error("unknown widget `{0}`")]
    UnknownWidget(String),
}
