use log::trace;

use crate::config::PlacerConfig;
use crate::error::PlacementError;
use crate::geometry::primitives::{Point, Rect};
use crate::place::Occupancy;

/// Absorbs floating point noise when snapping, e.g. `0.3 / 0.1 = 2.9999999999999996`
const SNAP_EPSILON: f64 = 1e-9;

/// Largest cell index whose coordinate is still exact in an `f64`
const MAX_CELL: f64 = (1u64 << 53) as f64;

/// A free position found by the [`GridScanner`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Slot {
    /// Grid-aligned origin of the part
    pub origin: Point,
    /// Margin-expanded footprint of the part at `origin`
    pub rect: Rect,
    /// Number of candidate positions tested before this one was accepted
    pub n_tested: usize,
    /// Number of row wraps performed
    pub n_wraps: usize,
}

/// Deterministic raster scan for the first collision-free grid position,
/// left to right and then row by row downwards along y.
#[derive(Clone, Copy, Debug)]
pub struct GridScanner {
    config: PlacerConfig,
}

impl GridScanner {
    pub fn new(config: PlacerConfig) -> Self {
        Self { config }
    }

    /// Snaps `value` down to the nearest multiple of the grid step, returned as a cell index.
    /// `None` if the cell is not finite or too far out to be represented exactly.
    pub fn snap_down(&self, value: f64) -> Option<i64> {
        let cell = (value / self.config.grid_step + SNAP_EPSILON).floor();
        (cell.is_finite() && cell.abs() <= MAX_CELL).then_some(cell as i64)
    }

    /// Finds the first free slot for a `width` x `height` part, starting from `preferred`.
    ///
    /// The preferred origin is snapped down to the grid. Whenever the part would extend past
    /// `sheet_max_x`, the scan wraps to `x = 0` one `wrap_y_step` further along y.
    /// Because `occupied` is finite, every scan terminates.
    pub fn find_slot(
        &self,
        refdes: &str,
        preferred: Point,
        width: f64,
        height: f64,
        occupied: &Occupancy,
    ) -> Result<Slot, PlacementError> {
        let PlacerConfig {
            grid_step,
            margin,
            sheet_max_x,
            ..
        } = self.config;

        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(PlacementError::InvalidDimensions {
                refdes: refdes.to_string(),
                width,
                height,
            });
        }
        if width > sheet_max_x {
            return Err(PlacementError::OversizedPart {
                refdes: refdes.to_string(),
                width,
                sheet_max_x,
            });
        }

        let out_of_range = || PlacementError::OriginOutOfRange {
            refdes: refdes.to_string(),
            x: preferred.x(),
            y: preferred.y(),
        };

        let wrap_cells = self.config.wrap_cells();
        let (Some(mut col), Some(mut row)) =
            (self.snap_down(preferred.x()), self.snap_down(preferred.y()))
        else {
            return Err(out_of_range());
        };
        let mut n_tested = 0;
        let mut n_wraps = 0;

        loop {
            let x = col as f64 * grid_step;
            if x + width > sheet_max_x {
                // x = 0 always fits, the width was checked against the sheet above
                col = 0;
                row = row
                    .checked_add(wrap_cells)
                    .filter(|r| (*r as f64).abs() <= MAX_CELL)
                    .ok_or_else(out_of_range)?;
                n_wraps += 1;
                continue;
            }
            let origin = Point(x, row as f64 * grid_step);
            let candidate = Rect::from_footprint(origin, width, height, margin).map_err(|_| {
                PlacementError::InvalidDimensions {
                    refdes: refdes.to_string(),
                    width,
                    height,
                }
            })?;
            n_tested += 1;

            match occupied.first_collision(&candidate) {
                None => {
                    return Ok(Slot {
                        origin,
                        rect: candidate,
                        n_tested,
                        n_wraps,
                    });
                }
                Some(idx) => {
                    trace!("[SCAN] {refdes} at {origin} collides with occupied rect #{idx}");
                    col = col.checked_add(1).ok_or_else(out_of_range)?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn scanner(sheet_max_x: f64) -> GridScanner {
        GridScanner::new(PlacerConfig {
            sheet_max_x,
            ..PlacerConfig::default()
        })
    }

    fn occupied(rects: &[(f64, f64, f64, f64)]) -> Occupancy {
        Occupancy::from_rects(
            rects
                .iter()
                .map(|&(x, y, w, h)| Rect::from_footprint(Point(x, y), w, h, 5.0).unwrap())
                .collect(),
        )
    }

    #[test]
    fn free_preferred_origin_is_returned_as_is() {
        let slot = scanner(500.0)
            .find_slot("R1", Point(40.0, 20.0), 30.0, 10.0, &Occupancy::new())
            .unwrap();
        assert_eq!(slot.origin, Point(40.0, 20.0));
        assert_eq!(slot.n_tested, 1);
    }

    #[test]
    fn preferred_origin_is_snapped_down() {
        let s = scanner(500.0);
        let slot = s.find_slot("R1", Point(19.9, 5.0), 30.0, 10.0, &Occupancy::new()).unwrap();
        assert_eq!(slot.origin, Point(10.0, 0.0));

        let slot = s.find_slot("R1", Point(-5.0, -0.1), 30.0, 10.0, &Occupancy::new()).unwrap();
        assert_eq!(slot.origin, Point(-10.0, -10.0));
    }

    #[test]
    fn snapping_tolerates_float_noise() {
        let s = GridScanner::new(PlacerConfig {
            grid_step: 0.1,
            wrap_y_step: 0.5,
            ..PlacerConfig::default()
        });
        assert_eq!(s.snap_down(0.3), Some(3));
        assert_eq!(s.snap_down(0.7), Some(7));
    }

    #[test]
    fn unrepresentable_cells_are_not_snapped() {
        let s = scanner(500.0);
        assert_eq!(s.snap_down(f64::NAN), None);
        assert_eq!(s.snap_down(f64::NEG_INFINITY), None);
        assert_eq!(s.snap_down(1e300), None);
        assert_eq!(s.snap_down(-1e300), None);
    }

    #[test_case(Point(1e300, 1e300); "far away")]
    #[test_case(Point(0.0, 1e300); "far down")]
    #[test_case(Point(f64::NAN, 0.0); "nan")]
    fn unreachable_origin_is_an_error(preferred: Point) {
        let err = scanner(500.0)
            .find_slot("C1", preferred, 30.0, 10.0, &Occupancy::new())
            .unwrap_err();
        assert!(matches!(err, PlacementError::OriginOutOfRange { .. }));
    }

    #[test]
    fn wrapping_past_the_last_row_is_an_error() {
        // the preferred row is the last representable one, the wrap has nowhere to go
        let s = scanner(100.0);
        let last_row = MAX_CELL * 10.0;
        let err = s
            .find_slot("R1", Point(90.0, last_row), 30.0, 10.0, &Occupancy::new())
            .unwrap_err();
        assert!(matches!(err, PlacementError::OriginOutOfRange { .. }));
    }

    #[test]
    fn scan_advances_right_past_collisions() {
        // resistor at origin occupies [-5, 35] with margin, a new resistor needs x - 5 >= 35
        let occ = occupied(&[(0.0, 0.0, 30.0, 10.0)]);
        let slot = scanner(500.0)
            .find_slot("R2", Point(0.0, 0.0), 30.0, 10.0, &occ)
            .unwrap();
        assert_eq!(slot.origin, Point(40.0, 0.0));
        assert_eq!(slot.n_tested, 5);
        assert_eq!(slot.n_wraps, 0);
    }

    #[test]
    fn scan_wraps_to_next_row_at_sheet_edge() {
        let occ = occupied(&[(0.0, 0.0, 60.0, 40.0)]);
        let slot = scanner(120.0)
            .find_slot("U2", Point(0.0, 0.0), 60.0, 40.0, &occ)
            .unwrap();
        assert_eq!(slot.origin, Point(0.0, 50.0));
        assert_eq!(slot.n_wraps, 1);
    }

    #[test]
    fn preferred_origin_past_the_sheet_edge_wraps_first() {
        let slot = scanner(100.0)
            .find_slot("R1", Point(90.0, 0.0), 30.0, 10.0, &Occupancy::new())
            .unwrap();
        assert_eq!(slot.origin, Point(0.0, 50.0));
    }

    #[test]
    fn oversized_part_fails_fast() {
        let err = scanner(50.0)
            .find_slot("U1", Point(0.0, 0.0), 60.0, 40.0, &Occupancy::new())
            .unwrap_err();
        assert!(matches!(err, PlacementError::OversizedPart { .. }));
    }

    #[test]
    fn part_as_wide_as_the_sheet_fits() {
        let occ = occupied(&[(0.0, 0.0, 30.0, 10.0)]);
        let slot = scanner(60.0)
            .find_slot("U1", Point(0.0, 0.0), 60.0, 40.0, &occ)
            .unwrap();
        assert_eq!(slot.origin, Point(0.0, 50.0));
    }
}
