mod part;
mod placement;
mod snapshot;

#[doc(inline)]
pub use part::PartToPlace;
#[doc(inline)]
pub use placement::Layer;
#[doc(inline)]
pub use placement::Placement;
#[doc(inline)]
pub use placement::Rotation;
#[doc(inline)]
pub use snapshot::Snapshot;
#[doc(inline)]
pub use snapshot::SnapshotComponent;
