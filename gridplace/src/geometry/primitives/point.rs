use std::fmt::Display;

/// Position on the sheet, in millimeters
#[derive(Debug, Clone, PartialEq, Copy)]
pub struct Point(pub f64, pub f64);

impl Point {
    pub fn x(&self) -> f64 {
        self.0
    }

    pub fn y(&self) -> f64 {
        self.1
    }

    /// Returns `self` translated by `dx` and `dy`.
    pub fn offset(&self, dx: f64, dy: f64) -> Point {
        Point(self.0 + dx, self.1 + dy)
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.0, self.1)
    }
}
