use float_cmp::approx_eq;
use itertools::Itertools;
use log::error;

use crate::entities::Placement;
use crate::geometry::primitives::Rect;

//Various checks to verify correctness of the placer output
//Used in debug_assert!() blocks and in tests

/// True if no rect in `new` intersects another rect in `new` or any rect in `existing`.
/// Rects within `existing` are allowed to overlap each other, they were placed by someone else.
pub fn new_rects_are_disjoint(existing: &[Rect], new: &[Rect]) -> bool {
    for (i, j) in (0..new.len()).tuple_combinations() {
        if new[i].intersects(&new[j]) {
            error!("new rects {i} and {j} overlap: {:?} {:?}", new[i], new[j]);
            return false;
        }
    }
    for ((i, n), (j, e)) in new.iter().enumerate().cartesian_product(existing.iter().enumerate()) {
        if n.intersects(e) {
            error!("new rect {i} overlaps existing rect {j}: {n:?} {e:?}");
            return false;
        }
    }
    true
}

/// True if both coordinates of `placement` are a whole number of `grid_step`s.
pub fn placement_is_grid_aligned(placement: &Placement, grid_step: f64) -> bool {
    let aligned = |v: f64| {
        let n_steps = (v / grid_step).round();
        approx_eq!(f64, n_steps * grid_step, v, epsilon = 1e-9 * grid_step.max(1.0), ulps = 4)
    };
    aligned(placement.x) && aligned(placement.y)
}
