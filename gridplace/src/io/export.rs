use crate::io::ext_repr::ExtPlacementResult;
use crate::place::PlacementOutcome;

pub fn export(outcome: &PlacementOutcome) -> ExtPlacementResult {
    ExtPlacementResult {
        placements: outcome.placements.clone(),
        diagnostics: outcome.diagnostics.clone(),
    }
}
