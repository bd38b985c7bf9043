use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::entities::{Layer, Placement};
use crate::place::Diagnostic;

/// External representation of a placement request: the parts to place and the current sheet.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ExtPlacementRequest {
    /// Parts to place, in placement order
    pub parts: Vec<ExtPart>,
    /// Components already on the sheet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<ExtSnapshot>,
}

/// External representation of a [`PartToPlace`](crate::entities::PartToPlace).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPart {
    pub refdes: String,
    #[serde(default = "unknown_kind")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor_refdes: Option<String>,
    /// Offset from the anchor in grid steps
    #[serde(default)]
    pub dx: f64,
    #[serde(default)]
    pub dy: f64,
    /// Requested rotation in degrees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
}

/// Schematic snapshot as exported by the host. Fields other than `components` (nets, source, ...) are ignored.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ExtSnapshot {
    #[serde(default)]
    pub components: Vec<ExtSnapshotComponent>,
}

/// A component of the snapshot.
/// The position is either given flat (`x`, `y`) or nested in a `placement` object.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtSnapshotComponent {
    pub refdes: String,
    #[serde(default = "unknown_kind")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placement: Option<ExtSnapshotPlacement>,
}

/// Nested position of a snapshot component
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtSnapshotPlacement {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub rotation: f64,
    #[serde(default)]
    pub layer: Layer,
}

/// External representation of a [`PlacementOutcome`](crate::place::PlacementOutcome).
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ExtPlacementResult {
    /// Placement per refdes, in request order
    pub placements: IndexMap<String, Placement>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<Diagnostic>,
}

fn unknown_kind() -> String {
    "unknown".to_string()
}
