use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::geometry::primitives::Point;

/// Computed position of one component on the sheet.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// x-coordinate of the component origin, a multiple of the grid step
    pub x: f64,
    /// y-coordinate of the component origin, a multiple of the grid step
    pub y: f64,
    pub rotation: Rotation,
    #[serde(default)]
    pub layer: Layer,
}

impl Placement {
    pub fn position(&self) -> Point {
        Point(self.x, self.y)
    }
}

/// Side of the board a component is placed on. Schematics always use [`Layer::Top`].
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Layer {
    #[default]
    Top,
    Bottom,
}

/// One of the four canonical orientations, serialized as whole degrees.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[serde(into = "u16", try_from = "u16")]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    const ALL: [Rotation; 4] = [
        Rotation::Deg0,
        Rotation::Deg90,
        Rotation::Deg180,
        Rotation::Deg270,
    ];

    /// Snaps an arbitrary angle (degrees) to the nearest quarter turn.
    ///
    /// The angle is first normalized into `[0, 360)`. Exact ties resolve to the lower
    /// quarter turn, so 45 snaps to 0 and 46 to 90. Non-finite angles snap to 0.
    pub fn nearest(degrees: f64) -> Rotation {
        if !degrees.is_finite() {
            return Rotation::Deg0;
        }
        let quarters = degrees.rem_euclid(360.0) / 90.0;
        let idx = match quarters.fract() <= 0.5 {
            true => quarters.floor(),
            false => quarters.ceil(),
        };
        Rotation::ALL[(idx as usize) % 4]
    }

    pub fn degrees(&self) -> u16 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
        }
    }
}

impl From<Rotation> for u16 {
    fn from(r: Rotation) -> Self {
        r.degrees()
    }
}

impl TryFrom<u16> for Rotation {
    type Error = String;

    fn try_from(degrees: u16) -> Result<Self, Self::Error> {
        Rotation::ALL
            .into_iter()
            .find(|r| r.degrees() == degrees)
            .ok_or_else(|| format!("rotation must be one of 0, 90, 180, 270, got {degrees}"))
    }
}

impl Display for Rotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}
