//! Block location.
//!
//! Finds the first block bounded by a pair of [`BlockMarkers`]:
//! ```text
//!       {/* Create Vehicle Modal */}
//!       <Modal>...</Modal>
//!       </Modal>
//! ```

use std::ops::Range;

use regex::Regex;
use tracing::debug;

use crate::error::{Error, Result};
use crate::markers::{Anchoring, BlockMarkers};

/// A located block with its text and position information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// The block text, from the start marker (or its line's indentation)
    /// through the end marker, inclusive.
    pub text: String,
    /// Byte range of the block within its document.
    pub range: Range<usize>,
    /// The 1-based line number where the block starts.
    pub start_line: usize,
    /// The 1-based line number where the end marker sits.
    pub end_line: usize,
}

impl Block {
    fn at(document: &str, range: Range<usize>) -> Self {
        let text = document[range.clone()].to_string();
        let start_line = document[..range.start].matches('\n').count() + 1;
        let end_line = start_line + text.matches('\n').count();
        Self {
            text,
            range,
            start_line,
            end_line,
        }
    }

    /// Number of lines spanned by the block.
    pub fn line_count(&self) -> usize {
        self.end_line - self.start_line + 1
    }
}

/// Finds the first block in `document` bounded by `markers`.
///
/// # Returns
/// `Ok(None)` when no start marker is followed by a matching end marker.
///
/// # Errors
/// Returns an error for empty markers or a pattern that fails to compile.
///
/// # Example
/// ```
/// use blocksync_blocks::{BlockMarkers, find_block};
///
/// let doc = "<div>\n  {/* Form */}\n  <form/>\n  </Modal>\n</div>";
/// let block = find_block(doc, &BlockMarkers::new("{/* Form */}", "</Modal>"))
///     .unwrap()
///     .unwrap();
/// assert_eq!(block.text, "  {/* Form */}\n  <form/>\n  </Modal>");
/// assert_eq!((block.start_line, block.end_line), (2, 4));
/// ```
pub fn find_block(document: &str, markers: &BlockMarkers) -> Result<Option<Block>> {
    markers.validate()?;

    let range = match markers.anchoring {
        Anchoring::Anywhere => find_anywhere(document, markers)?,
        Anchoring::Indented => find_indented(document, markers, false)?,
        Anchoring::Aligned => find_indented(document, markers, true)?,
    };

    let block = range.map(|range| Block::at(document, range));
    match &block {
        Some(block) => debug!(
            start = %markers.start,
            start_line = block.start_line,
            end_line = block.end_line,
            "located block"
        ),
        None => debug!(start = %markers.start, end = %markers.end, "no block matched"),
    }
    Ok(block)
}

/// Extracts the first block bounded by `markers`.
///
/// # Errors
/// Returns [`Error::BlockNotFound`] when the document holds no such block.
pub fn extract_block(document: &str, markers: &BlockMarkers) -> Result<Block> {
    find_block(document, markers)?.ok_or_else(|| Error::BlockNotFound {
        start: markers.start.clone(),
        end: markers.end.clone(),
    })
}

/// Checks whether `document` contains a block bounded by `markers`.
pub fn has_block(document: &str, markers: &BlockMarkers) -> Result<bool> {
    Ok(find_block(document, markers)?.is_some())
}

fn find_anywhere(document: &str, markers: &BlockMarkers) -> Result<Option<Range<usize>>> {
    let pattern = format!(
        r"(?s){}.*?{}",
        regex::escape(&markers.start),
        regex::escape(&markers.end)
    );
    let re = Regex::new(&pattern)?;
    Ok(re.find(document).map(|m| m.range()))
}

/// Start marker opening its line; the close pattern is the captured
/// indentation plus the end marker, anchored to a line start when `aligned`.
fn find_indented(
    document: &str,
    markers: &BlockMarkers,
    aligned: bool,
) -> Result<Option<Range<usize>>> {
    let open = Regex::new(&format!(
        r"(?m)^(?P<indent>[ \t]*){}",
        regex::escape(&markers.start)
    ))?;
    let anchor = if aligned { "(?m)^" } else { "" };

    for caps in open.captures_iter(document) {
        let (Some(whole), Some(indent)) = (caps.get(0), caps.name("indent")) else {
            continue;
        };

        let close = Regex::new(&format!(
            "{anchor}{}{}",
            regex::escape(indent.as_str()),
            regex::escape(&markers.end)
        ))?;

        if let Some(end) = close.find_at(document, whole.end()) {
            return Ok(Some(whole.start()..end.end()));
        }
    }

    Ok(None)
}
