pub mod arc;
pub mod crossing;
pub mod diagram;
pub mod events;
pub mod options;
pub mod snapshot;

pub use arc::Arc;
pub use crossing::{Crossing, CrossingId};
pub use diagram::{DiagramState, KnotDiagram};
pub use events::{DiagramEvent, EventKind, Handler};
pub use options::DiagramOptions;
pub use snapshot::{ArcTrailItem, CrossingArcs, CrossingPass, Snapshot, TrailItem};
