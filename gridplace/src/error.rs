use thiserror::Error;

/// Fatal conditions of a placement call.
/// A failed call never returns a partial result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlacementError {
    #[error("duplicate refdes in placement batch: {refdes}")]
    DuplicateRefdes { refdes: String },
    #[error("part {refdes} is {width}mm wide and can never fit on a {sheet_max_x}mm wide sheet")]
    OversizedPart {
        refdes: String,
        width: f64,
        sheet_max_x: f64,
    },
    #[error("part {refdes} has invalid dimensions: {width} x {height}")]
    InvalidDimensions {
        refdes: String,
        width: f64,
        height: f64,
    },
    #[error("part {refdes} has a non-finite anchor offset: ({dx}, {dy})")]
    InvalidOffset { refdes: String, dx: f64, dy: f64 },
    #[error("part {refdes} cannot be placed from ({x}, {y}), the origin is out of grid range")]
    OriginOutOfRange { refdes: String, x: f64, y: f64 },
    #[error("invalid placer configuration: {0}")]
    InvalidConfig(String),
}
