use slotmap::SecondaryMap;

use super::{Arc, Crossing, CrossingId, KnotDiagram};
use crate::geometry::Segment;

/// One step of the walk along the diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrailItem {
    /// Travelling along segment `i`.
    Segment(usize),
    /// Passing through a crossing; `over` tells whether the current segment
    /// is the crossing's over-strand.
    Crossing { id: CrossingId, over: bool },
}

/// A visit to a crossing while walking the trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrossingPass {
    pub crossing: CrossingId,
    pub over: bool,
}

/// An entry of the arc trail: arcs separated by crossing passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArcTrailItem {
    /// Index into [`Snapshot::arcs`].
    Arc(usize),
    Crossing(CrossingPass),
}

/// The strands meeting at one crossing.
///
/// Arc fields are 0-based indices into [`Snapshot::arcs`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrossingArcs {
    /// 1-based position of the crossing in discovery order.
    pub index: usize,
    pub crossing: CrossingId,
    pub overstrand: usize,
    pub incoming: usize,
    pub leaving: usize,
}

/// Everything derived from a diagram in one pass.
///
/// A snapshot is immutable and detached from the diagram it was built
/// from; mutate the diagram and derive again to see the change.
#[derive(Debug, Clone)]
pub struct Snapshot {
    closed: bool,
    trail: Vec<TrailItem>,
    passes: Vec<CrossingPass>,
    discovered: Vec<(CrossingId, Crossing)>,
    positions: SecondaryMap<CrossingId, usize>,
    arcs: Vec<Arc>,
    // Arc index of each fragment; fragment `t` precedes pass `t`.
    membership: Vec<usize>,
    crossing_arcs: Vec<CrossingArcs>,
}

impl Snapshot {
    /// Walks the diagram once and builds the trail, the crossing order, the
    /// arc decomposition and the strands at each crossing.
    #[must_use]
    pub fn derive(diagram: &KnotDiagram) -> Self {
        let mut trail = Vec::new();
        let mut passes = Vec::new();
        let mut fragments = Vec::new();
        let mut current: Option<Arc> = None;

        for (i, segment) in diagram.segments().iter().enumerate() {
            trail.push(TrailItem::Segment(i));
            let mut from = segment.orig;
            for id in diagram.crossings_involving(i) {
                let Some(crossing) = diagram.crossing(id) else {
                    continue;
                };
                let over = crossing.over() == i;
                let point = *crossing.point();

                push_piece(&mut current, Segment::new(from, point));
                fragments.extend(current.take());
                trail.push(TrailItem::Crossing { id, over });
                trail.push(TrailItem::Segment(i));
                passes.push(CrossingPass { crossing: id, over });
                from = point;
            }
            push_piece(&mut current, Segment::new(from, segment.dest));
        }
        fragments.extend(current.take());

        let mut positions = SecondaryMap::new();
        let mut discovered = Vec::new();
        for pass in &passes {
            if positions.contains_key(pass.crossing) {
                continue;
            }
            if let Some(crossing) = diagram.crossing(pass.crossing) {
                discovered.push((pass.crossing, *crossing));
                positions.insert(pass.crossing, discovered.len());
            }
        }

        let closed = diagram.is_done();
        let (arcs, membership) = group_fragments(fragments, &passes, closed);
        let crossing_arcs = strands_at_crossings(&passes, &membership, &discovered, &positions);

        Self {
            closed,
            trail,
            passes,
            discovered,
            positions,
            arcs,
            membership,
            crossing_arcs,
        }
    }

    /// Whether the diagram was closed when derived.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Segments and crossing passes in walk order.
    #[must_use]
    pub fn trail(&self) -> &[TrailItem] {
        &self.trail
    }

    /// Only the crossing passes of the trail.
    #[must_use]
    pub fn crossing_trail(&self) -> &[CrossingPass] {
        &self.passes
    }

    /// Crossings in order of first visit, with their state at derive time.
    #[must_use]
    pub fn discovered(&self) -> &[(CrossingId, Crossing)] {
        &self.discovered
    }

    /// 1-based discovery index of a crossing.
    #[must_use]
    pub fn index_of(&self, id: CrossingId) -> Option<usize> {
        self.positions.get(id).copied()
    }

    /// Distinct arcs in discovery order.
    #[must_use]
    pub fn arcs(&self) -> &[Arc] {
        &self.arcs
    }

    /// Arcs and crossing passes in walk order.
    #[must_use]
    pub fn arc_trail(&self) -> Vec<ArcTrailItem> {
        let mut items = Vec::with_capacity(self.membership.len() + self.passes.len());
        for (t, &arc) in self.membership.iter().enumerate() {
            items.push(ArcTrailItem::Arc(arc));
            if let Some(pass) = self.passes.get(t) {
                items.push(ArcTrailItem::Crossing(*pass));
            }
        }
        items
    }

    /// Strands at each crossing, in discovery order.
    #[must_use]
    pub fn crossing_arcs(&self) -> &[CrossingArcs] {
        &self.crossing_arcs
    }
}

fn push_piece(current: &mut Option<Arc>, piece: Segment) {
    match current {
        Some(arc) => {
            arc.extend(piece);
        }
        None => *current = Some(Arc::new(piece)),
    }
}

// Merges fragments across over-passes, and the last fragment into the first
// when the curve is closed. Returns the arcs and the arc of each fragment.
fn group_fragments(
    fragments: Vec<Arc>,
    passes: &[CrossingPass],
    closed: bool,
) -> (Vec<Arc>, Vec<usize>) {
    let mut arcs: Vec<Arc> = Vec::new();
    let mut membership = Vec::with_capacity(fragments.len());

    for (t, fragment) in fragments.into_iter().enumerate() {
        let continues = t > 0 && passes.get(t - 1).is_some_and(|pass| pass.over);
        let joined = if continues {
            arcs.last().and_then(|last| last.join(&fragment))
        } else {
            None
        };
        match joined {
            Some(arc) => {
                if let Some(last) = arcs.last_mut() {
                    *last = arc;
                }
            }
            None => arcs.push(fragment),
        }
        membership.push(arcs.len() - 1);
    }

    if closed && arcs.len() > 1 {
        let last = arcs.len() - 1;
        if let Some(wrapped) = arcs[last].join(&arcs[0]) {
            arcs[0] = wrapped;
            arcs.truncate(last);
            for arc in &mut membership {
                if *arc == last {
                    *arc = 0;
                }
            }
        }
    }

    (arcs, membership)
}

fn strands_at_crossings(
    passes: &[CrossingPass],
    membership: &[usize],
    discovered: &[(CrossingId, Crossing)],
    positions: &SecondaryMap<CrossingId, usize>,
) -> Vec<CrossingArcs> {
    let mut overstrand = vec![None; discovered.len()];
    let mut understrands = vec![None; discovered.len()];

    for (t, pass) in passes.iter().enumerate() {
        let Some(slot) = positions.get(pass.crossing).map(|index| index - 1) else {
            continue;
        };
        let (Some(&before), Some(&after)) = (membership.get(t), membership.get(t + 1)) else {
            continue;
        };
        if pass.over {
            overstrand[slot] = Some(before);
        } else {
            understrands[slot] = Some((before, after));
        }
    }

    discovered
        .iter()
        .zip(overstrand.into_iter().zip(understrands))
        .enumerate()
        .filter_map(|(slot, ((crossing, _), (over, under)))| {
            let (incoming, leaving) = under?;
            Some(CrossingArcs {
                index: slot + 1,
                crossing: *crossing,
                overstrand: over?,
                incoming,
                leaving,
            })
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point2;
    use crate::test_support::{
        pentagram_points, square_points, trefoil_all_over, trefoil_alternating,
    };

    #[test]
    fn empty_diagram_derives_nothing() {
        let snapshot = KnotDiagram::new().snapshot();
        assert!(snapshot.trail().is_empty());
        assert!(snapshot.arcs().is_empty());
        assert!(snapshot.arc_trail().is_empty());
        assert!(!snapshot.is_closed());
    }

    #[test]
    fn trail_visits_segments_and_crossings() {
        let diagram = trefoil_all_over();
        let snapshot = diagram.snapshot();
        // Six segments, each with one crossing: s c s per segment.
        assert_eq!(snapshot.trail().len(), 18);
        assert_eq!(snapshot.trail()[0], TrailItem::Segment(0));
        assert!(matches!(
            snapshot.trail()[1],
            TrailItem::Crossing { over: false, .. }
        ));
        let overs: Vec<bool> = snapshot.crossing_trail().iter().map(|p| p.over).collect();
        assert_eq!(overs, vec![false, false, false, true, true, true]);
    }

    #[test]
    fn every_crossing_visited_twice() {
        let diagram = KnotDiagram::from_points(pentagram_points()).unwrap();
        let snapshot = diagram.snapshot();
        assert_eq!(snapshot.discovered().len(), 5);
        for (id, _) in snapshot.discovered() {
            let visits = snapshot
                .crossing_trail()
                .iter()
                .filter(|p| p.crossing == *id)
                .count();
            assert_eq!(visits, 2);
        }
    }

    #[test]
    fn discovery_index_is_one_based() {
        let diagram = trefoil_all_over();
        let snapshot = diagram.snapshot();
        let first = snapshot.crossing_trail()[0].crossing;
        assert_eq!(snapshot.index_of(first), Some(1));
        assert_eq!(diagram.crossing(first).unwrap().under(), 0);
    }

    #[test]
    fn unknot_is_a_single_arc() {
        let diagram = KnotDiagram::from_points(square_points()).unwrap();
        let arcs = diagram.arcs();
        assert_eq!(arcs.len(), 1);
        assert_eq!(arcs[0].len(), 4);
        assert_eq!(arcs[0].head().orig, Point2::new(0.0, 0.0));
        assert_eq!(arcs[0].tail().dest, Point2::new(0.0, 0.0));
    }

    #[test]
    fn open_path_is_not_wrapped() {
        let diagram = KnotDiagram::from_points([
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
        ])
        .unwrap();
        let arcs = diagram.arcs();
        assert_eq!(arcs.len(), 1);
        assert_eq!(arcs[0].len(), 2);
    }

    #[test]
    fn trefoil_arcs_end_at_under_crossings() {
        let diagram = trefoil_alternating();
        let snapshot = diagram.snapshot();
        let arcs = snapshot.arcs();
        assert_eq!(arcs.len(), 3);
        assert!(arcs.iter().all(|arc| arc.len() == 4));

        // Each arc starts and ends at the point of an under-pass.
        let under_points: Vec<Point2> = snapshot
            .discovered()
            .iter()
            .map(|(_, c)| *c.point())
            .collect();
        for arc in arcs {
            assert!(under_points.contains(&arc.head().orig));
            assert!(under_points.contains(&arc.tail().dest));
        }
    }

    #[test]
    fn first_arc_wraps_through_start_vertex() {
        let diagram = trefoil_alternating();
        let arcs = diagram.arcs();
        let start = diagram.vertices()[0];
        assert!(arcs[0].segments().any(|s| s.dest == start));
        assert!(arcs[1..].iter().all(|arc| arc.segments().all(|s| s.dest != start)));
    }

    #[test]
    fn trefoil_crossing_strands() {
        let snapshot = trefoil_alternating().snapshot();
        let strands: Vec<(usize, usize, usize, usize)> = snapshot
            .crossing_arcs()
            .iter()
            .map(|c| (c.index, c.overstrand, c.incoming, c.leaving))
            .collect();
        assert_eq!(strands, vec![(1, 0, 1, 2), (2, 2, 0, 1), (3, 1, 2, 0)]);
    }

    #[test]
    fn arc_trail_alternates() {
        let snapshot = trefoil_alternating().snapshot();
        let items = snapshot.arc_trail();
        assert_eq!(items.len(), 13);
        assert_eq!(items[0], ArcTrailItem::Arc(0));
        assert_eq!(items[12], ArcTrailItem::Arc(0));
        for (i, item) in items.iter().enumerate() {
            assert_eq!(i % 2 == 0, matches!(item, ArcTrailItem::Arc(_)));
        }
    }
}
