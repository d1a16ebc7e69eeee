use std::fmt;

use super::{CrossingId, KnotDiagram};
use crate::geometry::Segment;
use crate::math::Point2;

/// The kinds of notification a diagram emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    ModelChanged,
    VertexAdded,
    SegmentAdded,
    CrossingsAdded,
}

impl EventKind {
    /// All event kinds, in declaration order.
    pub const ALL: [EventKind; 4] = [
        EventKind::ModelChanged,
        EventKind::VertexAdded,
        EventKind::SegmentAdded,
        EventKind::CrossingsAdded,
    ];

    /// Looks up an event kind by its wire name, e.g. `"model-changed"`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// The wire name of this event kind.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            EventKind::ModelChanged => "model-changed",
            EventKind::VertexAdded => "vertex-added",
            EventKind::SegmentAdded => "segment-added",
            EventKind::CrossingsAdded => "crossings-added",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A notification emitted by a mutating diagram call.
#[derive(Debug, Clone, PartialEq)]
pub enum DiagramEvent {
    /// The diagram changed in any way.
    ModelChanged,
    /// A vertex was appended.
    VertexAdded(Point2),
    /// A segment was appended.
    SegmentAdded(Segment),
    /// New crossings were recorded by the last append.
    CrossingsAdded(Vec<CrossingId>),
}

impl DiagramEvent {
    /// The kind handlers subscribe to for this event.
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            DiagramEvent::ModelChanged => EventKind::ModelChanged,
            DiagramEvent::VertexAdded(_) => EventKind::VertexAdded,
            DiagramEvent::SegmentAdded(_) => EventKind::SegmentAdded,
            DiagramEvent::CrossingsAdded(_) => EventKind::CrossingsAdded,
        }
    }
}

/// Callback invoked with each event and a read-only view of the diagram.
///
/// Handlers run synchronously on the stack of the mutating call. They only
/// see `&KnotDiagram`, so they cannot mutate the diagram that is dispatching
/// to them.
pub type Handler = Box<dyn FnMut(&DiagramEvent, &KnotDiagram)>;

/// Subscriber list, dispatched in subscription order.
#[derive(Default)]
pub(crate) struct EventBus {
    handlers: Vec<(EventKind, Handler)>,
}

impl EventBus {
    pub(crate) fn subscribe(&mut self, kind: EventKind, handler: Handler) {
        self.handlers.push((kind, handler));
    }

    pub(crate) fn dispatch(&mut self, event: &DiagramEvent, diagram: &KnotDiagram) {
        let kind = event.kind();
        for (subscribed, handler) in &mut self.handlers {
            if *subscribed == kind {
                handler(event, diagram);
            }
        }
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
