/// Footprint of the categories the placer knows about, in grid cells (width, height).
/// Matching is case-insensitive.
const FOOTPRINT_TABLE: &[(&str, (u32, u32))] = &[
    ("resistor", (3, 1)),
    ("capacitor", (3, 1)),
    ("ic", (6, 4)),
    ("microcontroller", (6, 4)),
    ("mcu", (6, 4)),
    ("connector", (6, 2)),
    ("diode", (3, 2)),
    ("transistor", (3, 2)),
    ("mosfet", (3, 2)),
    ("bjt", (3, 2)),
];

/// Footprint used for any category missing from the table
pub const DEFAULT_CELLS: (u32, u32) = (3, 2);

/// Looks up the footprint of `kind` in grid cells, `None` if the category is unknown.
pub fn cells_for_kind(kind: &str) -> Option<(u32, u32)> {
    let kind = kind.trim();
    FOOTPRINT_TABLE
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(kind))
        .map(|(_, cells)| *cells)
}

/// Footprint size of a component in mm.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizeEstimate {
    pub width: f64,
    pub height: f64,
    /// Whether an axis had to fall back to [`DEFAULT_CELLS`] because the category is unknown
    pub used_default: bool,
}

/// Maps a component category to a footprint size, unless explicit dimensions are given.
#[derive(Clone, Copy, Debug)]
pub struct SizeEstimator {
    grid_step: f64,
}

impl SizeEstimator {
    pub fn new(grid_step: f64) -> Self {
        Self { grid_step }
    }

    /// Explicit dimensions take precedence per axis. Only finite, positive explicit values are
    /// honored; anything else is estimated from `kind`.
    pub fn estimate(&self, kind: &str, width: Option<f64>, height: Option<f64>) -> SizeEstimate {
        let width = width.filter(|w| w.is_finite() && *w > 0.0);
        let height = height.filter(|h| h.is_finite() && *h > 0.0);

        if let (Some(width), Some(height)) = (width, height) {
            return SizeEstimate {
                width,
                height,
                used_default: false,
            };
        }

        let (cells, used_default) = match cells_for_kind(kind) {
            Some(cells) => (cells, false),
            None => (DEFAULT_CELLS, true),
        };
        let (w_cells, h_cells) = cells;

        SizeEstimate {
            width: width.unwrap_or(w_cells as f64 * self.grid_step),
            height: height.unwrap_or(h_cells as f64 * self.grid_step),
            used_default,
        }
    }
}
