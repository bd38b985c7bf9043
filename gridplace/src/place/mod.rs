mod anchor;
mod diagnostics;
mod occupancy;
mod placer;
mod scanner;
mod size;

#[doc(inline)]
pub use anchor::{AnchorResolver, COLUMN_GAP_CELLS, OriginSource, PlacementCursor, ResolvedOrigin};
#[doc(inline)]
pub use diagnostics::Diagnostic;
#[doc(inline)]
pub use occupancy::{Occupancy, OccupiedSpaceBuilder};
#[doc(inline)]
pub use placer::{GridPlacer, PlacementOutcome};
#[doc(inline)]
pub use scanner::{GridScanner, Slot};
#[doc(inline)]
pub use size::{DEFAULT_CELLS, SizeEstimate, SizeEstimator, cells_for_kind};
