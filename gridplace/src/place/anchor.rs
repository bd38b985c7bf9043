use indexmap::IndexMap;

use crate::config::PlacerConfig;
use crate::entities::PartToPlace;
use crate::geometry::primitives::Point;
use crate::place::Occupancy;

/// Gap, in grid steps, between the right-most existing component and the first unanchored part
pub const COLUMN_GAP_CELLS: u32 = 6;

/// Default origin for parts that are not (successfully) anchored.
///
/// A single cursor is shared by the whole batch. It starts right of the existing components
/// (at the sheet origin on an empty sheet) and, after every part placed from it, moves to the
/// right edge of that part on the same row.
/// Anchored placements leave it untouched.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacementCursor {
    position: Point,
}

impl PlacementCursor {
    pub fn new() -> Self {
        Self {
            position: Point(0.0, 0.0),
        }
    }

    /// Cursor starting `column_gap` right of everything in `occupied`, on the first row.
    /// On an empty sheet it starts at the origin.
    pub fn right_of(occupied: &Occupancy, column_gap: f64) -> Self {
        match occupied.max_x() {
            Some(x_max) => Self {
                position: Point(x_max + column_gap, 0.0),
            },
            None => Self::new(),
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Moves the cursor to the right edge of a part of `width` placed at `origin`.
    pub fn advance_past(&mut self, origin: Point, width: f64) {
        self.position = origin.offset(width, 0.0);
    }
}

impl Default for PlacementCursor {
    fn default() -> Self {
        Self::new()
    }
}

/// Where the preferred origin of a part came from.
#[derive(Clone, Debug, PartialEq)]
pub enum OriginSource {
    /// Offset from an already placed component
    Anchor(String),
    /// No anchor requested, default cursor
    Cursor,
    /// Anchor requested but not placed (forward reference, typo, unknown), default cursor
    UnresolvedAnchor(String),
    /// Anchor refers to the part itself, default cursor
    SelfAnchor,
}

impl OriginSource {
    /// Whether the origin was taken from the [`PlacementCursor`].
    pub fn uses_cursor(&self) -> bool {
        !matches!(self, OriginSource::Anchor(_))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedOrigin {
    pub preferred: Point,
    pub source: OriginSource,
}

/// Computes the preferred origin of a part, relative to its anchor if it has one.
#[derive(Clone, Copy, Debug)]
pub struct AnchorResolver {
    grid_step: f64,
}

impl AnchorResolver {
    pub fn new(config: &PlacerConfig) -> Self {
        Self {
            grid_step: config.grid_step,
        }
    }

    /// `placed` holds the origin of every snapshot component and of every part placed earlier in
    /// the batch. Anchors missing from it never raise an error, the cursor is used instead.
    pub fn resolve(
        &self,
        part: &PartToPlace,
        placed: &IndexMap<String, Point>,
        cursor: &PlacementCursor,
    ) -> ResolvedOrigin {
        let fallback = |source| ResolvedOrigin {
            preferred: cursor.position(),
            source,
        };

        match &part.anchor_refdes {
            None => fallback(OriginSource::Cursor),
            Some(anchor) if *anchor == part.refdes => fallback(OriginSource::SelfAnchor),
            Some(anchor) => match placed.get(anchor) {
                Some(anchor_pos) => ResolvedOrigin {
                    preferred: anchor_pos.offset(part.dx * self.grid_step, part.dy * self.grid_step),
                    source: OriginSource::Anchor(anchor.clone()),
                },
                None => fallback(OriginSource::UnresolvedAnchor(anchor.clone())),
            },
        }
    }
}
