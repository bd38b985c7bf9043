//! Deterministic grid-based auto-placer for schematic components.
//!
//! Given an ordered batch of parts and a snapshot of the components already on the sheet,
//! [`GridPlacer::place_all`](place::GridPlacer::place_all) computes collision-free,
//! grid-aligned and reproducible positions for every part.
//!
//! ```
//! use gridplace::config::PlacerConfig;
//! use gridplace::entities::PartToPlace;
//! use gridplace::place::GridPlacer;
//!
//! let placer = GridPlacer::new(PlacerConfig::default()).unwrap();
//! let parts = [
//!     PartToPlace::new("U1", "ic"),
//!     PartToPlace::new("C1", "capacitor").anchored_to("U1", 0.0, 6.0),
//! ];
//! let outcome = placer.place_all(&parts, None).unwrap();
//! assert_eq!(outcome.placements["C1"].y, 60.0);
//! ```

/// Placer configuration
pub mod config;

/// Entities that make up a placement request and its result
pub mod entities;

/// Fatal placement errors
pub mod error;

/// Geometric primitives used for collision testing
pub mod geometry;

/// Importing and exporting from/to the external (JSON) representation
pub mod io;

/// The placement pipeline: size estimation, occupancy, scanning, anchoring
pub mod place;

/// Helper functions which do not belong to any specific module
pub mod util;
