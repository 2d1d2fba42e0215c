use alloc::string::String;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected 2 comma-separated key segments, found {found}")]
    KeySegmentCount { found: usize },
    #[error("key segment `{segment}` is not an integer")]
    KeyBadSegment { segment: String },
    #[error("unknown game state `{name}`")]
    UnknownState { name: String },
}

pub type Result<T> = core::result::Result<T, ParseError>;
