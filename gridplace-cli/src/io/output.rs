use gridplace::config::PlacerConfig;
use gridplace::io::ext_repr::ExtPlacementResult;
use serde::{Deserialize, Serialize};

/// Solution file written by the CLI: the placement result and the configuration that produced it
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PlacementOutput {
    #[serde(flatten)]
    pub result: ExtPlacementResult,
    pub config: PlacerConfig,
}
