use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Non-fatal condition encountered during a placement call.
/// The batch still completes, the caller decides whether to surface it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Diagnostic {
    /// The category was not recognized, the default footprint was used
    UnknownCategory { refdes: String, kind: String },
    /// The anchor is not placed (yet), the part was placed at the default origin
    UnresolvedAnchor { refdes: String, anchor_refdes: String },
    /// The part names itself as anchor, the part was placed at the default origin
    SelfAnchor { refdes: String },
    /// A snapshot component without a usable position, it occupies no space
    UnpositionedSnapshotComponent { refdes: String },
    /// A new part reuses the refdes of a snapshot component
    ShadowsExisting { refdes: String },
    /// The requested rotation was not a finite number, 0° was used
    NonFiniteRotation { refdes: String },
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::UnknownCategory { refdes, kind } => {
                write!(f, "{refdes}: unknown category '{kind}', using default footprint")
            }
            Diagnostic::UnresolvedAnchor {
                refdes,
                anchor_refdes,
            } => write!(
                f,
                "{refdes}: anchor '{anchor_refdes}' is not placed, using default origin"
            ),
            Diagnostic::SelfAnchor { refdes } => {
                write!(f, "{refdes}: part is anchored to itself, using default origin")
            }
            Diagnostic::UnpositionedSnapshotComponent { refdes } => {
                write!(f, "{refdes}: existing component has no position, ignored")
            }
            Diagnostic::ShadowsExisting { refdes } => {
                write!(f, "{refdes}: refdes already exists in the snapshot")
            }
            Diagnostic::NonFiniteRotation { refdes } => {
                write!(f, "{refdes}: rotation is not a finite angle, using 0°")
            }
        }
    }
}
