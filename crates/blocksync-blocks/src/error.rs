//! Error types for blocksync-blocks

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Block not found: no span from {start:?} to {end:?}")]
    BlockNotFound { start: String, end: String },

    #[error("The {which} marker must not be empty")]
    EmptyMarker { which: &'static str },

    #[error("Invalid block pattern: {0}")]
    Pattern(#[from] regex::Error),
}
