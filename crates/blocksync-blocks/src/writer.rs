//! Block rewriting.
//!
//! Provides label rewriting for an extracted block and first-match
//! substitution of a block inside another document.

use tracing::debug;

use crate::error::Result;
use crate::markers::{BlockMarkers, Label};
use crate::parser::{Block, find_block};

/// Result of [`substitute_block`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Substitution {
    /// The first matching block was replaced.
    Replaced {
        document: String,
        /// The block that was overwritten, positioned in the original document.
        replaced: Block,
    },
    /// No block matched; the document is returned unchanged.
    NoMatch { document: String },
}

impl Substitution {
    pub fn document(&self) -> &str {
        match self {
            Self::Replaced { document, .. } | Self::NoMatch { document } => document,
        }
    }

    pub fn into_document(self) -> String {
        match self {
            Self::Replaced { document, .. } | Self::NoMatch { document } => document,
        }
    }

    pub fn is_replaced(&self) -> bool {
        matches!(self, Self::Replaced { .. })
    }
}

/// Rewrites the first occurrence of `label.from` in `block` with `label.to`.
///
/// Later occurrences are left alone, as is every other byte of the block.
/// A block without the fragment, or an empty fragment, is returned as is.
///
/// # Example
/// ```
/// use blocksync_blocks::{Label, relabel_block};
///
/// let block = "{/* Form */}\n<p>{/* Form */}</p>";
/// let label = Label::new("{/* Form */}", "{/* Form - Copy */}");
/// assert_eq!(
///     relabel_block(block, &label),
///     "{/* Form - Copy */}\n<p>{/* Form */}</p>"
/// );
/// ```
pub fn relabel_block(block: &str, label: &Label) -> String {
    if label.from.is_empty() || !block.contains(&label.from) {
        debug!(from = %label.from, "label fragment not present, block unchanged");
        return block.to_string();
    }
    block.replacen(&label.from, &label.to, 1)
}

/// Replaces the first block in `document` bounded by `markers` with
/// `replacement`.
///
/// The replacement is inserted literally. All bytes outside the replaced
/// span pass through unchanged.
///
/// # Errors
/// Returns an error for empty markers or a pattern that fails to compile.
/// A missing block is not an error; it yields [`Substitution::NoMatch`].
pub fn substitute_block(
    document: &str,
    markers: &BlockMarkers,
    replacement: &str,
) -> Result<Substitution> {
    let Some(block) = find_block(document, markers)? else {
        debug!(start = %markers.start, "no block to substitute");
        return Ok(Substitution::NoMatch {
            document: document.to_string(),
        });
    };

    let mut updated =
        String::with_capacity(document.len() - block.range.len() + replacement.len());
    updated.push_str(&document[..block.range.start]);
    updated.push_str(replacement);
    updated.push_str(&document[block.range.end..]);

    debug!(
        start_line = block.start_line,
        end_line = block.end_line,
        "substituted block"
    );
    Ok(Substitution::Replaced {
        document: updated,
        replaced: block,
    })
}
