use slotmap::SlotMap;
use tracing::{debug, trace};

use super::events::{EventBus, Handler};
use super::snapshot::{CrossingArcs, CrossingPass, Snapshot, TrailItem};
use super::{Arc, Crossing, CrossingId, DiagramEvent, DiagramOptions, EventKind};
use crate::error::{DiagramError, Result};
use crate::geometry::Segment;
use crate::math::{distance, Point2};
use crate::operations::creation::DrawVertex;
use crate::operations::query::{
    Dowker, ExtendedGauss, ExtendedGaussCode, GaussCode, IsAlternating, KnotSummary, Summarize,
    Tricolor, Wirtinger, WirtingerPresentation, Writhe,
};
use crate::operations::transform::{MakeAlternating, MirrorImage, ReverseOrientation};

/// Where a diagram is in its drawing lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagramState {
    /// No vertices yet.
    Empty,
    /// At least one vertex, loop not closed.
    Drawing,
    /// At least three vertices and the last one equals the first.
    Done,
}

/// A knot diagram: a polygonal curve drawn vertex by vertex.
///
/// Segment `i` runs from `vertices[i]` to `vertices[i + 1]`. Crossings are
/// recorded incrementally as segments are appended and reference segments by
/// index. Everything else (trail, arcs, codes) is derived on demand through
/// [`Snapshot`].
#[derive(Debug, Default)]
pub struct KnotDiagram {
    vertices: Vec<Point2>,
    segments: Vec<Segment>,
    crossings: SlotMap<CrossingId, Crossing>,
    options: DiagramOptions,
    events: EventBus,
}

impl KnotDiagram {
    /// Creates an empty diagram with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty diagram with the given options.
    #[must_use]
    pub fn with_options(options: DiagramOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Creates a diagram by appending `points` in order, every new segment
    /// passing over the ones it crosses.
    ///
    /// # Errors
    ///
    /// Returns an error if a crossing cannot be solved.
    pub fn from_points(points: impl IntoIterator<Item = Point2>) -> Result<Self> {
        Self::from_points_with_options(points, DiagramOptions::default())
    }

    /// Like [`KnotDiagram::from_points`], with explicit options.
    ///
    /// # Errors
    ///
    /// Returns an error if a crossing cannot be solved.
    pub fn from_points_with_options(
        points: impl IntoIterator<Item = Point2>,
        options: DiagramOptions,
    ) -> Result<Self> {
        let mut diagram = Self::with_options(options);
        for point in points {
            diagram.append(point, true)?;
        }
        Ok(diagram)
    }

    // --- Accessors ---

    /// Options this diagram was created with.
    #[must_use]
    pub fn options(&self) -> DiagramOptions {
        self.options
    }

    /// Vertices in drawing order.
    #[must_use]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    /// Segments in drawing order, one fewer than the vertices.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// All crossings, in no particular order.
    pub fn crossings(&self) -> impl Iterator<Item = (CrossingId, &Crossing)> {
        self.crossings.iter()
    }

    /// Returns the crossing with the given id.
    #[must_use]
    pub fn crossing(&self, id: CrossingId) -> Option<&Crossing> {
        self.crossings.get(id)
    }

    /// Number of crossings.
    #[must_use]
    pub fn crossing_count(&self) -> usize {
        self.crossings.len()
    }

    /// Crossings on segment `segment`, nearest to its origin first.
    ///
    /// Returns an empty list for an unknown segment index.
    #[must_use]
    pub fn crossings_involving(&self, segment: usize) -> Vec<CrossingId> {
        let Some(origin) = self.segments.get(segment).map(|s| s.orig) else {
            return Vec::new();
        };
        let mut found: Vec<(f64, CrossingId)> = self
            .crossings
            .iter()
            .filter(|(_, c)| c.involves(segment))
            .map(|(id, c)| (distance(c.point(), &origin), id))
            .collect();
        found.sort_by(|a, b| a.0.total_cmp(&b.0));
        found.into_iter().map(|(_, id)| id).collect()
    }

    /// Returns the crossing between segments `a` and `b`, in either role.
    #[must_use]
    pub fn crossing_of(&self, a: usize, b: usize) -> Option<CrossingId> {
        self.crossings
            .iter()
            .find(|(_, c)| c.joins(a, b))
            .map(|(id, _)| id)
    }

    /// Returns whether the curve is closed: at least three vertices and the
    /// last one equal to the first.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.vertices.len() > 2 && self.vertices.first() == self.vertices.last()
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> DiagramState {
        if self.vertices.is_empty() {
            DiagramState::Empty
        } else if self.is_done() {
            DiagramState::Done
        } else {
            DiagramState::Drawing
        }
    }

    // --- Events ---

    /// Registers `handler` for events of `kind`.
    pub fn subscribe(
        &mut self,
        kind: EventKind,
        handler: impl FnMut(&DiagramEvent, &KnotDiagram) + 'static,
    ) {
        let handler: Handler = Box::new(handler);
        self.events.subscribe(kind, handler);
    }

    /// Registers `handler` for the event named `name`.
    ///
    /// Unknown names are ignored; the return value tells whether the
    /// handler was registered.
    pub fn subscribe_named(
        &mut self,
        name: &str,
        handler: impl FnMut(&DiagramEvent, &KnotDiagram) + 'static,
    ) -> bool {
        match EventKind::from_name(name) {
            Some(kind) => {
                self.subscribe(kind, handler);
                true
            }
            None => {
                trace!(event = name, "ignoring subscription to unknown event");
                false
            }
        }
    }

    /// Dispatches `event`, followed by `ModelChanged` for any other kind.
    pub(crate) fn emit(&mut self, event: DiagramEvent) {
        let mut bus = std::mem::take(&mut self.events);
        bus.dispatch(&event, self);
        if event.kind() != EventKind::ModelChanged {
            bus.dispatch(&DiagramEvent::ModelChanged, self);
        }
        self.events = bus;
    }

    // --- Mutation ---

    /// Appends a vertex, recording the crossings of the new segment.
    ///
    /// The new segment passes over every earlier segment it crosses when
    /// `pass_over` is true, and under them otherwise. The segment right
    /// before it is never tested, and crossings within the closure radius
    /// of the first vertex are dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if a crossing cannot be solved.
    pub fn append(&mut self, point: Point2, pass_over: bool) -> Result<()> {
        let Some(&last) = self.vertices.last() else {
            self.vertices.push(point);
            debug!(x = point.x, y = point.y, "first vertex");
            self.emit(DiagramEvent::VertexAdded(point));
            return Ok(());
        };

        let candidate = Segment::new(last, point);
        let index = self.segments.len();
        let start = self.vertices[0];

        let mut found = Vec::new();
        for (i, existing) in self.segments.iter().enumerate().take(index.saturating_sub(1)) {
            let Some(mut crossing) = Crossing::new((i, existing), (index, &candidate))? else {
                continue;
            };
            if !pass_over {
                crossing.flip();
            }
            if distance(crossing.point(), &start) > self.options.closure_radius() {
                found.push(crossing);
            } else {
                trace!(segment = i, "dropping crossing at the start vertex");
            }
        }

        self.vertices.push(point);
        self.segments.push(candidate);
        let added: Vec<CrossingId> = found
            .into_iter()
            .map(|crossing| self.crossings.insert(crossing))
            .collect();
        debug!(
            x = point.x,
            y = point.y,
            segment = index,
            crossings = added.len(),
            "vertex appended"
        );

        self.emit(DiagramEvent::VertexAdded(point));
        self.emit(DiagramEvent::SegmentAdded(candidate));
        if !added.is_empty() {
            self.emit(DiagramEvent::CrossingsAdded(added));
        }
        Ok(())
    }

    /// Removes the last vertex, its segment and that segment's crossings.
    ///
    /// Does nothing on an empty diagram.
    pub fn remove_last(&mut self) {
        if self.vertices.pop().is_none() {
            return;
        }
        if self.segments.pop().is_some() {
            let removed = self.segments.len();
            let before = self.crossings.len();
            self.crossings.retain(|_, c| !c.involves(removed));
            debug!(
                segment = removed,
                crossings = before - self.crossings.len(),
                "last vertex removed"
            );
        }
        self.emit(DiagramEvent::ModelChanged);
    }

    /// Clears the diagram and appends `points` in order.
    ///
    /// # Errors
    ///
    /// Returns an error if a crossing cannot be solved.
    pub fn reset(&mut self, points: impl IntoIterator<Item = Point2>) -> Result<()> {
        self.vertices.clear();
        self.segments.clear();
        self.crossings.clear();
        debug!("diagram reset");

        let mut points = points.into_iter().peekable();
        if points.peek().is_none() {
            self.emit(DiagramEvent::ModelChanged);
        }
        for point in points {
            self.append(point, true)?;
        }
        Ok(())
    }

    /// Swaps over and under at one crossing.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is not a crossing of this diagram.
    pub fn flip_crossing(&mut self, id: CrossingId) -> Result<()> {
        let crossing = self
            .crossings
            .get_mut(id)
            .ok_or(DiagramError::CrossingNotFound(id))?;
        crossing.flip();
        debug!(?id, "crossing flipped");
        self.emit(DiagramEvent::ModelChanged);
        Ok(())
    }

    /// Flips a crossing without notifying subscribers.
    pub(crate) fn flip_silently(&mut self, id: CrossingId) {
        if let Some(crossing) = self.crossings.get_mut(id) {
            crossing.flip();
        }
    }
}

impl Clone for KnotDiagram {
    /// Copies the geometry and crossings. Subscribers are not carried over.
    fn clone(&self) -> Self {
        Self {
            vertices: self.vertices.clone(),
            segments: self.segments.clone(),
            crossings: self.crossings.clone(),
            options: self.options,
            events: EventBus::default(),
        }
    }
}

// Derived structure and invariants. Each call runs one derive pass.
impl KnotDiagram {
    /// Runs the derive pass over the current state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::derive(self)
    }

    /// The walk over segments and crossings in drawing order.
    #[must_use]
    pub fn trail(&self) -> Vec<TrailItem> {
        self.snapshot().trail().to_vec()
    }

    /// Crossing passes in trail order.
    #[must_use]
    pub fn crossing_trail(&self) -> Vec<CrossingPass> {
        self.snapshot().crossing_trail().to_vec()
    }

    /// Distinct crossings in order of first visit; position `i` has index `i + 1`.
    #[must_use]
    pub fn crossing_index(&self) -> Vec<CrossingId> {
        self.snapshot().discovered().iter().map(|(id, _)| *id).collect()
    }

    /// The arcs of the diagram in discovery order.
    #[must_use]
    pub fn arcs(&self) -> Vec<Arc> {
        self.snapshot().arcs().to_vec()
    }

    /// Over and under strands at every crossing.
    #[must_use]
    pub fn crossing_arc_info(&self) -> Vec<CrossingArcs> {
        self.snapshot().crossing_arcs().to_vec()
    }

    /// Gauss code: crossing indices in trail order, negative on under-passes.
    #[must_use]
    pub fn gauss_code(&self) -> Vec<i32> {
        GaussCode::new(&self.snapshot()).execute()
    }

    /// Gauss code together with the crossing signs in discovery order.
    #[must_use]
    pub fn extended_gauss_code(&self) -> ExtendedGaussCode {
        ExtendedGauss::new(&self.snapshot()).execute()
    }

    /// Dowker–Thistlethwaite code.
    #[must_use]
    pub fn dowker_notation(&self) -> Vec<i32> {
        Dowker::new(&self.snapshot()).execute()
    }

    /// Wirtinger presentation of the knot group.
    #[must_use]
    pub fn wirtinger_presentation(&self) -> WirtingerPresentation {
        Wirtinger::new(&self.snapshot()).execute()
    }

    /// Returns whether over- and under-passes alternate along the trail.
    #[must_use]
    pub fn is_alternating(&self) -> bool {
        IsAlternating::new(&self.snapshot()).execute()
    }

    /// Searches for a Fox 3-coloring of the arcs.
    ///
    /// Returns the color (0, 1 or 2) of each arc, or `None` if the diagram
    /// is not closed, has no crossings, or admits no coloring.
    ///
    /// # Errors
    ///
    /// Returns an error if there are too many arcs for the exhaustive search
    /// or the arc decomposition is inconsistent.
    pub fn is_tricolorable(&self) -> Result<Option<Vec<u8>>> {
        Tricolor::new(&self.snapshot()).execute()
    }

    /// Sum of the crossing signs.
    #[must_use]
    pub fn writhe(&self) -> i32 {
        Writhe::new(self).execute()
    }

    /// All invariants of a closed diagram, or `None` while drawing.
    ///
    /// # Errors
    ///
    /// Returns an error if the coloring search fails.
    pub fn summary(&self) -> Result<Option<KnotSummary>> {
        Summarize::new(self).execute()
    }

    // --- Transforms ---

    /// A new diagram with every crossing's handedness inverted.
    ///
    /// # Errors
    ///
    /// Returns an error if a crossing cannot be solved.
    pub fn mirror_image(&self) -> Result<KnotDiagram> {
        MirrorImage::new().execute(self)
    }

    /// A new diagram of the same knot traversed backwards.
    ///
    /// # Errors
    ///
    /// Returns an error if a crossing cannot be solved.
    pub fn orientation_reversed(&self) -> Result<KnotDiagram> {
        ReverseOrientation::new().execute(self)
    }

    /// Flips crossings in place until passes alternate along the trail.
    ///
    /// Returns `false` if there was nothing to do.
    pub fn make_alternating(&mut self) -> bool {
        MakeAlternating::new().execute(self)
    }

    /// Appends `point` the way an interactive front-end draws; see
    /// [`DrawVertex`].
    ///
    /// # Errors
    ///
    /// Returns an error if a crossing cannot be solved.
    pub fn draw_to(&mut self, point: Point2, pass_over: bool) -> Result<bool> {
        DrawVertex::new(point, pass_over).execute(self)
    }
}
