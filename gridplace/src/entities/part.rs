/// A single placement request.
#[derive(Clone, Debug, PartialEq)]
pub struct PartToPlace {
    /// Reference designator, unique within a batch
    pub refdes: String,
    /// Component category, only used to estimate the footprint
    pub kind: String,
    /// Catalog identifier of the part, carried for reporting
    pub part_id: Option<String>,
    /// Explicit footprint width in mm, overrides the estimate
    pub width: Option<f64>,
    /// Explicit footprint height in mm, overrides the estimate
    pub height: Option<f64>,
    /// Refdes of an earlier placed (or pre-existing) component to place near
    pub anchor_refdes: Option<String>,
    /// Offset from the anchor along x, in grid steps
    pub dx: f64,
    /// Offset from the anchor along y, in grid steps
    pub dy: f64,
    /// Requested rotation in degrees, snapped to a quarter turn on placement
    pub rotation: Option<f64>,
}

impl PartToPlace {
    pub fn new(refdes: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            refdes: refdes.into(),
            kind: kind.into(),
            part_id: None,
            width: None,
            height: None,
            anchor_refdes: None,
            dx: 0.0,
            dy: 0.0,
            rotation: None,
        }
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn anchored_to(mut self, anchor_refdes: impl Into<String>, dx: f64, dy: f64) -> Self {
        self.anchor_refdes = Some(anchor_refdes.into());
        self.dx = dx;
        self.dy = dy;
        self
    }

    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation = Some(degrees);
        self
    }
}
