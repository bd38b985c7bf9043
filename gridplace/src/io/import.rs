use crate::entities::{PartToPlace, Snapshot, SnapshotComponent};
use crate::geometry::primitives::Point;
use crate::io::ext_repr::{ExtPart, ExtSnapshot, ExtSnapshotComponent};

pub fn import_part(ext_part: &ExtPart) -> PartToPlace {
    PartToPlace {
        refdes: ext_part.refdes.clone(),
        kind: ext_part.kind.clone(),
        part_id: ext_part.part_id.clone(),
        width: ext_part.width,
        height: ext_part.height,
        anchor_refdes: ext_part.anchor_refdes.clone(),
        dx: ext_part.dx,
        dy: ext_part.dy,
        rotation: ext_part.rotation,
    }
}

pub fn import_parts(ext_parts: &[ExtPart]) -> Vec<PartToPlace> {
    ext_parts.iter().map(import_part).collect()
}

pub fn import_snapshot(ext_snapshot: &ExtSnapshot) -> Snapshot {
    Snapshot::new(
        ext_snapshot
            .components
            .iter()
            .map(import_snapshot_component)
            .collect(),
    )
}

/// Flat `x`/`y` take precedence over the nested `placement` object.
pub fn import_snapshot_component(ext_comp: &ExtSnapshotComponent) -> SnapshotComponent {
    let position = match (ext_comp.x, ext_comp.y, &ext_comp.placement) {
        (Some(x), Some(y), _) => Some(Point(x, y)),
        (_, _, Some(p)) => Some(Point(p.x, p.y)),
        _ => None,
    };
    SnapshotComponent {
        refdes: ext_comp.refdes.clone(),
        kind: ext_comp.kind.clone(),
        position,
        width: ext_comp.width,
        height: ext_comp.height,
    }
}
