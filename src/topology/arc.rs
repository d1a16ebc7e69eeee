use std::collections::VecDeque;
use std::fmt;

use crate::geometry::Segment;

/// A maximal strand of the diagram between two under-crossings.
///
/// An arc is a chain of segments where each segment starts where the
/// previous one ends. Segments are pieces of the diagram's segments, cut at
/// crossing points. Equality is order-sensitive over the segment chain.
#[derive(Debug, Clone, PartialEq)]
pub struct Arc {
    segments: VecDeque<Segment>,
}

impl Arc {
    /// Creates an arc holding a single segment.
    #[must_use]
    pub fn new(first: Segment) -> Self {
        Self {
            segments: VecDeque::from([first]),
        }
    }

    /// Appends `segment` at whichever end it continues.
    ///
    /// The tail is tried first, then the head. A segment adjacent to neither
    /// end is ignored and `false` is returned.
    pub fn extend(&mut self, segment: Segment) -> bool {
        if self.tail().leads_into(&segment) {
            self.segments.push_back(segment);
            true
        } else if segment.leads_into(self.head()) {
            self.segments.push_front(segment);
            true
        } else {
            false
        }
    }

    /// Returns a new arc splicing `self` and `other` at their common end.
    ///
    /// `self` is placed first when its tail meets the head of `other`,
    /// otherwise `other` is placed first when its tail meets the head of
    /// `self`. Returns `None` if the arcs are not adjacent.
    #[must_use]
    pub fn join(&self, other: &Arc) -> Option<Arc> {
        let (first, second) = if self.tail().leads_into(other.head()) {
            (self, other)
        } else if other.tail().leads_into(self.head()) {
            (other, self)
        } else {
            return None;
        };
        let mut segments = first.segments.clone();
        segments.extend(second.segments.iter().copied());
        Some(Arc { segments })
    }

    /// First segment of the chain.
    #[must_use]
    pub fn head(&self) -> &Segment {
        &self.segments[0]
    }

    /// Last segment of the chain.
    #[must_use]
    pub fn tail(&self) -> &Segment {
        &self.segments[self.segments.len() - 1]
    }

    /// The segments in chain order.
    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }

    /// Number of segments in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false: an arc holds at least one segment.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Total length of the chain.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.segments.iter().map(Segment::length).sum()
    }
}

impl fmt::Display for Arc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (from, to) = (self.head().orig, self.tail().dest);
        write!(
            f,
            "[{} segments from ({:.2},{:.2}) to ({:.2},{:.2})]",
            self.len(),
            from.x,
            from.y,
            to.x,
            to.y
        )
    }
}
