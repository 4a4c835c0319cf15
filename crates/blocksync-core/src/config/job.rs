//! Sync job definition

use blocksync_blocks::{Anchoring, BlockMarkers, Label};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

const VEHICLE_FORM_LABEL: &str = "{/* Create Vehicle Modal */}";

/// One block copy from a source document into a target document.
///
/// Paths are relative to the engine root unless absolute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SyncJob {
    /// Job name, unique within a manifest
    pub name: String,

    /// Document supplying the block (never modified)
    pub source: String,

    /// Document whose block is overwritten
    pub target: String,

    /// Start marker of the block in the source
    pub source_start: String,

    /// Start marker of the block in the target; defaults to `source_start`.
    ///
    /// A prefix of the relabeled marker keeps the target block findable on
    /// later runs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_start: Option<String>,

    /// End marker shared by both documents
    pub end: String,

    #[serde(default)]
    pub anchoring: Anchoring,

    /// Bullet points describing what the copy brings to the target
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,

    /// Suggested manual follow-up after a successful run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_step: Option<String>,

    /// Label rewrite applied to the copied block
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,
}

impl SyncJob {
    /// The admin vehicle creation form copied onto the agent dashboard.
    pub fn vehicle_form() -> Self {
        Self {
            name: "vehicle-form".to_string(),
            source: "frontend/src/pages/admin/AdminDashboardPage.jsx".to_string(),
            target: "frontend/src/pages/agent/AgentDashboardPage.jsx".to_string(),
            source_start: VEHICLE_FORM_LABEL.to_string(),
            target_start: Some("{/* Create Vehicle Modal".to_string()),
            end: "</Modal>".to_string(),
            anchoring: Anchoring::Indented,
            notes: vec![
                "Replaced simple agent vehicle form with complete admin form".to_string(),
                "Added all sections: Grunddaten, Technische Daten, Kapazität & Preise, Beschreibung, Fahrzeugbild".to_string(),
                "Same emerald/teal color scheme as admin".to_string(),
                "All handlers are already implemented (handleCreateVehicle, handleImageChange)"
                    .to_string(),
            ],
            next_step: Some(
                "Test by running the dev server and creating a vehicle as an agent!".to_string(),
            ),
            label: Some(Label::new(
                VEHICLE_FORM_LABEL,
                "{/* Create Vehicle Modal - Same as Admin */}",
            )),
        }
    }

    /// Markers locating the block in the source document.
    pub fn source_markers(&self) -> BlockMarkers {
        BlockMarkers::new(&self.source_start, &self.end).with_anchoring(self.anchoring)
    }

    /// Markers locating the block in the target document.
    pub fn target_markers(&self) -> BlockMarkers {
        let start = self.target_start.as_deref().unwrap_or(&self.source_start);
        BlockMarkers::new(start, &self.end).with_anchoring(self.anchoring)
    }

    /// Checks that the job can be run.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidJob`] for an empty name, path, or marker, or
    /// when source and target name the same document.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::invalid_job(&self.name, "name must not be empty"));
        }
        if self.source.trim().is_empty() || self.target.trim().is_empty() {
            return Err(Error::invalid_job(
                &self.name,
                "source and target paths are required",
            ));
        }
        if self.source == self.target {
            return Err(Error::invalid_job(
                &self.name,
                "source and target must be different documents",
            ));
        }
        for markers in [self.source_markers(), self.target_markers()] {
            markers
                .validate()
                .map_err(|e| Error::invalid_job(&self.name, e.to_string()))?;
        }
        Ok(())
    }
}
