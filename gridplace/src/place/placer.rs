use indexmap::IndexMap;
use itertools::Itertools;
use log::{debug, info, warn};

use crate::config::PlacerConfig;
use crate::entities::{Layer, PartToPlace, Placement, Rotation, Snapshot};
use crate::error::PlacementError;
use crate::geometry::primitives::Point;
use crate::place::{
    AnchorResolver, COLUMN_GAP_CELLS, Diagnostic, GridScanner, OccupiedSpaceBuilder, OriginSource, PlacementCursor,
    SizeEstimate, SizeEstimator,
};
use crate::util::assertions;

/// Result of a successful [`GridPlacer::place_all`] call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlacementOutcome {
    /// Placement of every requested part, in request order
    pub placements: IndexMap<String, Placement>,
    /// Non-fatal conditions encountered along the way, in the order they occurred
    pub diagnostics: Vec<Diagnostic>,
}

/// Deterministic grid-based auto-placer.
///
/// Places a batch of parts one by one, in request order, next to the components already on
/// the sheet. Every part lands on the first collision-free grid position found from its
/// preferred origin, and then occupies that space for all parts that follow.
#[derive(Clone, Copy, Debug)]
pub struct GridPlacer {
    config: PlacerConfig,
}

impl GridPlacer {
    pub fn new(config: PlacerConfig) -> Result<Self, PlacementError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Places all `parts`, avoiding the components of `snapshot` and each other.
    ///
    /// The batch is validated upfront: duplicate refdes, invalid explicit dimensions, non-finite
    /// anchor offsets and parts wider than the sheet abort the whole call before anything is placed.
    /// Unanchored parts start right of the existing components, one column gap away.
    /// An anchor can only refer to a snapshot component or to a part earlier in `parts`.
    pub fn place_all(
        &self,
        parts: &[PartToPlace],
        snapshot: Option<&Snapshot>,
    ) -> Result<PlacementOutcome, PlacementError> {
        let estimator = SizeEstimator::new(self.config.grid_step);
        let sizes = self.validate(parts, &estimator)?;

        let mut diagnostics = vec![];
        let mut occupancy = OccupiedSpaceBuilder::new(estimator, self.config.margin)
            .build(snapshot, &mut diagnostics);
        let n_existing = occupancy.len();

        // origins of everything an anchor may refer to
        let mut placed: IndexMap<String, Point> = snapshot
            .map(|s| {
                s.components
                    .iter()
                    .filter_map(|c| c.position.map(|p| (c.refdes.clone(), p)))
                    .filter(|(_, p)| p.x().is_finite() && p.y().is_finite())
                    .collect()
            })
            .unwrap_or_default();

        let resolver = AnchorResolver::new(&self.config);
        let scanner = GridScanner::new(self.config);
        let mut cursor = PlacementCursor::right_of(
            &occupancy,
            COLUMN_GAP_CELLS as f64 * self.config.grid_step,
        );
        let mut placements = IndexMap::with_capacity(parts.len());

        for (part, size) in parts.iter().zip(sizes) {
            if size.used_default {
                warn!(
                    "[PLACER] unknown category '{}' for {}, using default footprint",
                    part.kind, part.refdes
                );
                diagnostics.push(Diagnostic::UnknownCategory {
                    refdes: part.refdes.clone(),
                    kind: part.kind.clone(),
                });
            }
            if placed.contains_key(&part.refdes) {
                warn!("[PLACER] {} already exists in the snapshot", part.refdes);
                diagnostics.push(Diagnostic::ShadowsExisting {
                    refdes: part.refdes.clone(),
                });
            }

            let origin = resolver.resolve(part, &placed, &cursor);
            match &origin.source {
                OriginSource::UnresolvedAnchor(anchor_refdes) => {
                    warn!(
                        "[PLACER] anchor {anchor_refdes} of {} is not placed, using default origin",
                        part.refdes
                    );
                    diagnostics.push(Diagnostic::UnresolvedAnchor {
                        refdes: part.refdes.clone(),
                        anchor_refdes: anchor_refdes.clone(),
                    });
                }
                OriginSource::SelfAnchor => {
                    warn!("[PLACER] {} is anchored to itself, using default origin", part.refdes);
                    diagnostics.push(Diagnostic::SelfAnchor {
                        refdes: part.refdes.clone(),
                    });
                }
                OriginSource::Anchor(_) | OriginSource::Cursor => {}
            }

            let slot = scanner.find_slot(
                &part.refdes,
                origin.preferred,
                size.width,
                size.height,
                &occupancy,
            )?;

            let rotation = match part.rotation {
                None => Rotation::Deg0,
                Some(degrees) => {
                    if !degrees.is_finite() {
                        warn!("[PLACER] rotation of {} is not finite, using 0°", part.refdes);
                        diagnostics.push(Diagnostic::NonFiniteRotation {
                            refdes: part.refdes.clone(),
                        });
                    }
                    Rotation::nearest(degrees)
                }
            };

            let placement = Placement {
                x: slot.origin.x(),
                y: slot.origin.y(),
                rotation,
                layer: Layer::Top,
            };
            debug!(
                "[PLACER] placed {} ({}, {}) at {} {} after {} candidates and {} wraps",
                part.refdes,
                part.kind,
                part.part_id.as_deref().unwrap_or("-"),
                slot.origin,
                rotation,
                slot.n_tested,
                slot.n_wraps
            );

            if origin.source.uses_cursor() {
                cursor.advance_past(slot.origin, size.width);
            }
            occupancy.push(slot.rect);
            placed.insert(part.refdes.clone(), slot.origin);
            placements.insert(part.refdes.clone(), placement);
        }

        debug_assert!(assertions::new_rects_are_disjoint(
            &occupancy.rects()[..n_existing],
            &occupancy.rects()[n_existing..]
        ));
        debug_assert!(
            placements
                .values()
                .all(|p| assertions::placement_is_grid_aligned(p, self.config.grid_step))
        );

        info!(
            "[PLACER] placed {} parts next to {} existing components ({} diagnostics)",
            placements.len(),
            n_existing,
            diagnostics.len()
        );

        Ok(PlacementOutcome {
            placements,
            diagnostics,
        })
    }

    /// Checks the whole batch before any placement work and returns the footprint of every part.
    fn validate(
        &self,
        parts: &[PartToPlace],
        estimator: &SizeEstimator,
    ) -> Result<Vec<SizeEstimate>, PlacementError> {
        if let Some(refdes) = parts.iter().map(|p| &p.refdes).duplicates().next() {
            return Err(PlacementError::DuplicateRefdes {
                refdes: refdes.clone(),
            });
        }

        parts
            .iter()
            .map(|part| {
                let invalid = |v: Option<f64>| v.is_some_and(|v| !v.is_finite() || v <= 0.0);
                if invalid(part.width) || invalid(part.height) {
                    return Err(PlacementError::InvalidDimensions {
                        refdes: part.refdes.clone(),
                        width: part.width.unwrap_or(f64::NAN),
                        height: part.height.unwrap_or(f64::NAN),
                    });
                }
                if !(part.dx.is_finite() && part.dy.is_finite()) {
                    return Err(PlacementError::InvalidOffset {
                        refdes: part.refdes.clone(),
                        dx: part.dx,
                        dy: part.dy,
                    });
                }
                let size = estimator.estimate(&part.kind, part.width, part.height);
                if size.width > self.config.sheet_max_x {
                    return Err(PlacementError::OversizedPart {
                        refdes: part.refdes.clone(),
                        width: size.width,
                        sheet_max_x: self.config.sheet_max_x,
                    });
                }
                Ok(size)
            })
            .collect()
    }
}
