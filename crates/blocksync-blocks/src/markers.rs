//! Marker and label definitions

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// How the end marker is located relative to the start marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchoring {
    /// First end marker anywhere after the start marker.
    Anywhere,
    /// Start marker opens its line; the block ends at the first occurrence
    /// of that line's indentation followed by the end marker. Deeper
    /// indented closing markers contain that text and also end the block.
    /// The block includes the start line's indentation.
    #[default]
    Indented,
    /// Like [`Anchoring::Indented`], but the end marker must open a line at
    /// exactly the start line's indentation, so nested closing markers at
    /// deeper indentation stay inside the block.
    Aligned,
}

/// The pair of literal delimiters bounding a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockMarkers {
    pub start: String,
    pub end: String,
    pub anchoring: Anchoring,
}

impl BlockMarkers {
    /// Markers with the default [`Anchoring::Indented`] mode.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            anchoring: Anchoring::default(),
        }
    }

    pub fn with_anchoring(mut self, anchoring: Anchoring) -> Self {
        self.anchoring = anchoring;
        self
    }

    /// Rejects empty markers, which would match everywhere.
    pub fn validate(&self) -> Result<()> {
        if self.start.is_empty() {
            return Err(Error::EmptyMarker { which: "start" });
        }
        if self.end.is_empty() {
            return Err(Error::EmptyMarker { which: "end" });
        }
        Ok(())
    }
}

/// Label rewrite applied to an extracted block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// Literal fragment to replace (first occurrence only).
    pub from: String,
    /// Replacement text.
    pub to: String,
}

impl Label {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}
