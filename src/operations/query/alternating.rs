use super::GaussCode;
use crate::topology::Snapshot;

/// Tests whether over- and under-passes alternate along the trail.
///
/// Diagrams with fewer than two crossings are alternating. Otherwise no two
/// consecutive Gauss code entries may share a sign.
pub struct IsAlternating<'a> {
    snapshot: &'a Snapshot,
}

impl<'a> IsAlternating<'a> {
    /// Creates a new `IsAlternating` query.
    #[must_use]
    pub fn new(snapshot: &'a Snapshot) -> Self {
        Self { snapshot }
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self) -> bool {
        if self.snapshot.discovered().len() < 2 {
            return true;
        }
        GaussCode::new(self.snapshot)
            .execute()
            .windows(2)
            .all(|pair| (pair[0] > 0) != (pair[1] > 0))
    }
}
