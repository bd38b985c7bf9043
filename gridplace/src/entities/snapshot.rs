use crate::geometry::primitives::Point;

/// Read-only view of the components already present on the sheet.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Snapshot {
    /// Existing components, in the order they were exported
    pub components: Vec<SnapshotComponent>,
}

impl Snapshot {
    pub fn new(components: Vec<SnapshotComponent>) -> Self {
        Self { components }
    }
}

/// A component that was placed before the current placement call.
#[derive(Clone, Debug, PartialEq)]
pub struct SnapshotComponent {
    pub refdes: String,
    pub kind: String,
    /// Recorded origin, `None` if the host did not export one
    pub position: Option<Point>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl SnapshotComponent {
    pub fn new(refdes: impl Into<String>, kind: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            refdes: refdes.into(),
            kind: kind.into(),
            position: Some(Point(x, y)),
            width: None,
            height: None,
        }
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }
}
