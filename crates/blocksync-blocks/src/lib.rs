//! Block extraction and splicing for blocksync.
//!
//! A *block* is a contiguous span of markup bounded by a literal start marker
//! (usually a labeled comment) and a literal end marker (usually a closing
//! tag):
//!
//! ```text
//!       {/* Create Vehicle Modal */}
//!       <Modal ...>
//!         ...
//!       </Modal>
//! ```
//!
//! The [`parser`] module locates the first such block in a document and the
//! [`writer`] module relabels a block and splices it into another document.
//! Markers are plain text; they are escaped before any pattern is compiled.
//!
//! # Anchoring
//!
//! [`Anchoring::Anywhere`] matches `start .*? end` across lines, taking the
//! first end marker after the start. [`Anchoring::Indented`] requires the
//! start marker to open its line and ends the block at the first occurrence
//! of that line's indentation followed by the end marker, so the block keeps
//! its leading whitespace. [`Anchoring::Aligned`] also requires the end
//! marker to open a line at that indentation, so deeper nested closing tags
//! stay inside the block.

pub mod error;
pub mod markers;
pub mod parser;
pub mod writer;

pub use error::{Error, Result};
pub use markers::{Anchoring, BlockMarkers, Label};
pub use parser::{Block, extract_block, find_block, has_block};
pub use writer::{Substitution, relabel_block, substitute_block};
