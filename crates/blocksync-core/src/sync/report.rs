//! Structured results of a sync run

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::diff::TextDiffSummary;

/// How a job ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The target block was replaced and the target written
    Updated,
    /// Dry run: the target would change
    WouldUpdate,
    /// The target already holds the block; nothing written
    Unchanged,
    /// The target has no block matching its markers; nothing written
    TargetBlockMissing,
}

impl Outcome {
    /// Whether the job reached its goal (or would on a real run).
    pub fn is_success(self) -> bool {
        !matches!(self, Self::TargetBlockMissing)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Updated => "updated",
            Self::WouldUpdate => "would update",
            Self::Unchanged => "unchanged",
            Self::TargetBlockMissing => "target block missing",
        };
        f.write_str(text)
    }
}

/// An inclusive, 1-based line range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSpan {
    pub start: usize,
    pub end: usize,
}

impl fmt::Display for LineSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "line {}", self.start)
        } else {
            write!(f, "lines {}-{}", self.start, self.end)
        }
    }
}

/// One effect of a job on its target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Change {
    /// The target block was overwritten with the source block.
    ReplacedBlock { source: LineSpan, target: LineSpan },
    /// The copied block's label was rewritten.
    Relabeled { from: String, to: String },
    /// Operator-facing description from the job's notes.
    Note { text: String },
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReplacedBlock { source, target } => {
                write!(f, "Replaced target {target} with source {source}")
            }
            Self::Relabeled { from, to } => write!(f, "Relabeled {from} as {to}"),
            Self::Note { text } => f.write_str(text),
        }
    }
}

/// Result of running one job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncReport {
    pub job: String,
    pub source: String,
    pub target: String,
    pub outcome: Outcome,
    pub changes: Vec<Change>,
    pub diff: TextDiffSummary,
    /// Target checksum before the run
    pub checksum_before: String,
    /// Target checksum after the run (equal to `checksum_before` unless written)
    pub checksum_after: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_step: Option<String>,
}

impl SyncReport {
    /// Serialize the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Serialize a batch of reports as a pretty-printed JSON array.
    pub fn batch_to_json(reports: &[SyncReport]) -> Result<String> {
        Ok(serde_json::to_string_pretty(reports)?)
    }

    /// The job's notes, in order.
    pub fn notes(&self) -> impl Iterator<Item = &str> {
        self.changes.iter().filter_map(|change| match change {
            Change::Note { text } => Some(text.as_str()),
            _ => None,
        })
    }
}
