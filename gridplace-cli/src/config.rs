use gridplace::config::PlacerConfig;
use serde::{Deserialize, Serialize};

use crate::io::svg_util::SvgDrawOptions;

/// Configuration of a `gridplace` run
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq)]
pub struct CliConfig {
    /// Configuration of the placer itself, any field left out keeps its default
    #[serde(default)]
    pub placer: PlacerConfig,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}
