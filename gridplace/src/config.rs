use serde::{Deserialize, Serialize};

use crate::error::PlacementError;

/// Tolerance used when checking that `wrap_y_step` is a whole number of grid steps
const GRID_MULTIPLE_TOLERANCE: f64 = 1e-9;

/// Configuration of the [`GridPlacer`](crate::place::GridPlacer). All lengths are in millimeters.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct PlacerConfig {
    /// Quantization unit, every emitted coordinate is a multiple of it
    pub grid_step: f64,
    /// Clearance added around every footprint before collision testing
    pub margin: f64,
    /// Maximum x-extent of a row before wrapping to the next one
    pub sheet_max_x: f64,
    /// Vertical distance between two rows, must be a multiple of `grid_step`
    pub wrap_y_step: f64,
}

impl Default for PlacerConfig {
    fn default() -> Self {
        Self {
            grid_step: 10.0,
            margin: 5.0,
            sheet_max_x: 500.0,
            wrap_y_step: 50.0,
        }
    }
}

impl PlacerConfig {
    pub fn validate(&self) -> Result<(), PlacementError> {
        let PlacerConfig {
            grid_step,
            margin,
            sheet_max_x,
            wrap_y_step,
        } = *self;

        let fields = [
            ("grid_step", grid_step),
            ("margin", margin),
            ("sheet_max_x", sheet_max_x),
            ("wrap_y_step", wrap_y_step),
        ];
        if let Some((name, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(PlacementError::InvalidConfig(format!(
                "{name} must be finite, got {value}"
            )));
        }
        if grid_step <= 0.0 {
            return Err(PlacementError::InvalidConfig(format!(
                "grid_step must be positive, got {grid_step}"
            )));
        }
        if margin < 0.0 {
            return Err(PlacementError::InvalidConfig(format!(
                "margin must not be negative, got {margin}"
            )));
        }
        if sheet_max_x <= 0.0 {
            return Err(PlacementError::InvalidConfig(format!(
                "sheet_max_x must be positive, got {sheet_max_x}"
            )));
        }
        if wrap_y_step <= 0.0 {
            return Err(PlacementError::InvalidConfig(format!(
                "wrap_y_step must be positive, got {wrap_y_step}"
            )));
        }
        let n_steps = wrap_y_step / grid_step;
        if (n_steps - n_steps.round()).abs() > GRID_MULTIPLE_TOLERANCE * n_steps.max(1.0) {
            return Err(PlacementError::InvalidConfig(format!(
                "wrap_y_step ({wrap_y_step}) must be a multiple of grid_step ({grid_step})"
            )));
        }
        Ok(())
    }

    /// Number of grid steps spanned by one row wrap.
    pub fn wrap_cells(&self) -> i64 {
        (self.wrap_y_step / self.grid_step).round() as i64
    }
}
