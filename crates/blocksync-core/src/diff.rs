//! Line diff of a target document before and after a sync

use serde::{Deserialize, Serialize};
use similar::{ChangeTag, TextDiff};

/// Summary of the line-level changes between two versions of a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextDiffSummary {
    /// Lines present only in the new version
    pub inserted: usize,
    /// Lines present only in the old version
    pub deleted: usize,
    /// Similarity ratio (0.0 to 1.0)
    pub similarity: f64,
    /// Unified diff text
    pub unified: String,
}

impl TextDiffSummary {
    /// Compute a line diff using the `similar` crate's TextDiff.
    ///
    /// `old_name` and `new_name` label the unified diff headers.
    pub fn compute(old: &str, new: &str, old_name: &str, new_name: &str) -> Self {
        if old == new {
            return Self::unchanged();
        }

        let text_diff = TextDiff::from_lines(old, new);

        let mut inserted = 0;
        let mut deleted = 0;
        for change in text_diff.iter_all_changes() {
            match change.tag() {
                ChangeTag::Insert => inserted += 1,
                ChangeTag::Delete => deleted += 1,
                ChangeTag::Equal => {}
            }
        }

        let unified = text_diff
            .unified_diff()
            .context_radius(3)
            .header(old_name, new_name)
            .to_string();

        Self {
            inserted,
            deleted,
            similarity: f64::from(text_diff.ratio()),
            unified,
        }
    }

    /// A diff between identical documents.
    pub fn unchanged() -> Self {
        Self {
            inserted: 0,
            deleted: 0,
            similarity: 1.0,
            unified: String::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.inserted == 0 && self.deleted == 0
    }
}
