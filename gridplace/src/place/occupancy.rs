use log::{debug, warn};

use crate::entities::Snapshot;
use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::Rect;
use crate::place::Diagnostic;
use crate::place::SizeEstimator;

/// Ordered, append-only collection of margin-expanded footprints.
///
/// Collision queries always iterate in insertion order, which keeps every scan reproducible.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Occupancy {
    rects: Vec<Rect>,
}

impl Occupancy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rects(rects: Vec<Rect>) -> Self {
        Self { rects }
    }

    pub fn push(&mut self, rect: Rect) {
        self.rects.push(rect);
    }

    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Right-most edge of all occupied rects, `None` if nothing is occupied.
    pub fn max_x(&self) -> Option<f64> {
        self.rects.iter().map(|r| r.x_max).reduce(f64::max)
    }

    /// Index of the first occupied rect colliding with `rect`, if any.
    pub fn first_collision(&self, rect: &Rect) -> Option<usize> {
        self.rects.iter().position(|occ| occ.collides_with(rect))
    }
}

/// Converts the components of a [`Snapshot`] into the initial [`Occupancy`] of a placement call.
#[derive(Clone, Copy, Debug)]
pub struct OccupiedSpaceBuilder {
    estimator: SizeEstimator,
    margin: f64,
}

impl OccupiedSpaceBuilder {
    pub fn new(estimator: SizeEstimator, margin: f64) -> Self {
        Self { estimator, margin }
    }

    /// One margin-expanded rect per positioned snapshot component, in snapshot order.
    /// Components without a usable position are skipped and reported in `diagnostics`.
    pub fn build(&self, snapshot: Option<&Snapshot>, diagnostics: &mut Vec<Diagnostic>) -> Occupancy {
        let Some(snapshot) = snapshot else {
            return Occupancy::new();
        };

        let mut occupancy = Occupancy::new();
        for comp in &snapshot.components {
            let Some(position) = comp.position else {
                warn!("[OCCUPANCY] {} has no position, ignoring it", comp.refdes);
                diagnostics.push(Diagnostic::UnpositionedSnapshotComponent {
                    refdes: comp.refdes.clone(),
                });
                continue;
            };
            let size = self.estimator.estimate(&comp.kind, comp.width, comp.height);
            if size.used_default {
                warn!(
                    "[OCCUPANCY] unknown category '{}' for {}, using default footprint",
                    comp.kind, comp.refdes
                );
                diagnostics.push(Diagnostic::UnknownCategory {
                    refdes: comp.refdes.clone(),
                    kind: comp.kind.clone(),
                });
            }
            match Rect::from_footprint(position, size.width, size.height, self.margin) {
                Ok(rect) => {
                    debug!(
                        "[OCCUPANCY] {} ({}) occupies [{:.3}, {:.3}] x [{:.3}, {:.3}]",
                        comp.refdes, comp.kind, rect.x_min, rect.x_max, rect.y_min, rect.y_max
                    );
                    occupancy.push(rect);
                }
                Err(e) => {
                    warn!("[OCCUPANCY] {} has an unusable position: {e}", comp.refdes);
                    diagnostics.push(Diagnostic::UnpositionedSnapshotComponent {
                        refdes: comp.refdes.clone(),
                    });
                }
            }
        }
        occupancy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::SnapshotComponent;

    fn builder() -> OccupiedSpaceBuilder {
        OccupiedSpaceBuilder::new(SizeEstimator::new(10.0), 5.0)
    }

    #[test]
    fn absent_or_empty_snapshot_is_unoccupied() {
        let mut diags = vec![];
        assert!(builder().build(None, &mut diags).is_empty());
        assert!(builder().build(Some(&Snapshot::default()), &mut diags).is_empty());
        assert!(diags.is_empty());
    }

    #[test]
    fn components_become_margin_expanded_rects_in_order() {
        let snapshot = Snapshot::new(vec![
            SnapshotComponent::new("R1", "resistor", 0.0, 0.0),
            SnapshotComponent::new("U1", "ic", 50.0, 0.0),
        ]);
        let mut diags = vec![];
        let occ = builder().build(Some(&snapshot), &mut diags);

        assert_eq!(occ.len(), 2);
        let r1 = occ.rects()[0];
        assert_eq!((r1.x_min, r1.y_min, r1.width(), r1.height()), (-5.0, -5.0, 40.0, 20.0));
        let u1 = occ.rects()[1];
        assert_eq!((u1.x_min, u1.y_min, u1.width(), u1.height()), (45.0, -5.0, 70.0, 50.0));
        assert!(diags.is_empty());
    }

    #[test]
    fn unknown_snapshot_category_is_reported() {
        let snapshot = Snapshot::new(vec![
            SnapshotComponent::new("X1", "gizmo", 0.0, 0.0),
            SnapshotComponent::new("X2", "gizmo", 100.0, 0.0).with_size(15.0, 25.0),
        ]);
        let mut diags = vec![];
        let occ = builder().build(Some(&snapshot), &mut diags);

        let x1 = occ.rects()[0];
        assert_eq!((x1.width(), x1.height()), (40.0, 30.0));
        assert_eq!(
            diags,
            vec![Diagnostic::UnknownCategory {
                refdes: "X1".to_string(),
                kind: "gizmo".to_string()
            }]
        );
        assert_eq!(occ.max_x(), Some(120.0));
    }

    #[test]
    fn explicit_snapshot_size_is_used() {
        let snapshot = Snapshot::new(vec![
            SnapshotComponent::new("J1", "connector", 10.0, 20.0).with_size(15.0, 25.0),
        ]);
        let occ = builder().build(Some(&snapshot), &mut vec![]);
        let j1 = occ.rects()[0];
        assert_eq!((j1.x_min, j1.y_min, j1.x_max, j1.y_max), (5.0, 15.0, 30.0, 50.0));
    }

    #[test]
    fn unpositioned_components_are_skipped_and_reported() {
        let mut unplaced = SnapshotComponent::new("X1", "ic", 0.0, 0.0);
        unplaced.position = None;
        let snapshot = Snapshot::new(vec![unplaced, SnapshotComponent::new("R1", "resistor", 0.0, 0.0)]);

        let mut diags = vec![];
        let occ = builder().build(Some(&snapshot), &mut diags);
        assert_eq!(occ.len(), 1);
        assert_eq!(
            diags,
            vec![Diagnostic::UnpositionedSnapshotComponent {
                refdes: "X1".to_string()
            }]
        );
    }
}
