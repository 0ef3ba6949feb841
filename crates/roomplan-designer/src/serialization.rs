//! Versioned plan document serialization.
//!
//! Implements save/load for `.roomplan` files using JSON. The
//! `{rooms, furniture}` aggregate is the serialization boundary the
//! persistence collaborator sees; the version tag lets it upgrade older
//! documents before handing them back to the engine. The engine rejects
//! documents newer than it understands.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use roomplan_core::PlannerError;

use crate::document::Document;
use crate::model::{FurnitureInstance, Room};
use crate::planner_state::PlannerState;

/// Current document schema version.
pub const DOCUMENT_VERSION: u32 = 2;

/// Serialized `{rooms, furniture}` aggregate with its schema version.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanDocument {
    pub version: u32,
    pub rooms: Vec<Room>,
    pub furniture: Vec<FurnitureInstance>,
}

impl PlanDocument {
    /// Snapshots a live document at the current schema version.
    pub fn from_document(document: &Document) -> Self {
        Self {
            version: DOCUMENT_VERSION,
            rooms: document.rooms().to_vec(),
            furniture: document.furniture().to_vec(),
        }
    }

    /// Turns the serialized aggregate back into a live document. Fails on
    /// schema versions newer than this engine; older versions rely on
    /// serde defaults and the collaborator's upgrade pass.
    pub fn into_document(self) -> roomplan_core::Result<Document> {
        if self.version > DOCUMENT_VERSION {
            return Err(PlannerError::UnsupportedVersion {
                found: self.version,
                supported: DOCUMENT_VERSION,
            });
        }
        Ok(Document::from_parts(self.rooms, self.furniture))
    }
}

impl PlannerState {
    /// Snapshots the live aggregate for serialization.
    pub fn to_document(&self) -> PlanDocument {
        PlanDocument::from_document(self.document())
    }
}

/// Plan metadata stored alongside the aggregate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanMetadata {
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

/// On-disk plan file: metadata plus the versioned aggregate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanFile {
    pub metadata: PlanMetadata,
    pub document: PlanDocument,
}

impl PlanFile {
    /// Wraps a document snapshot with fresh metadata.
    pub fn new(name: impl Into<String>, document: &Document) -> Self {
        let now = Utc::now();
        Self {
            metadata: PlanMetadata {
                name: name.into(),
                created: now,
                modified: now,
            },
            document: PlanDocument::from_document(document),
        }
    }

    /// Serializes to pretty JSON and writes to `path`.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize plan")?;
        std::fs::write(path.as_ref(), json)
            .with_context(|| format!("Failed to write plan file: {}", path.as_ref().display()))?;
        Ok(())
    }

    /// Reads and deserializes a plan file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read plan file: {}", path.as_ref().display()))?;
        let file: Self = serde_json::from_str(&json).context("Failed to parse plan file")?;
        Ok(file)
    }
}
