use super::label;
use crate::topology::Snapshot;

/// Computes the Dowker–Thistlethwaite code.
///
/// Passes are labelled `1..=2n` along the trail. Every crossing receives one
/// odd and one even label; the even label is negated when that pass goes
/// over. The code lists the even labels ordered by their odd partners.
pub struct Dowker<'a> {
    snapshot: &'a Snapshot,
}

impl<'a> Dowker<'a> {
    /// Creates a new `Dowker` query.
    #[must_use]
    pub fn new(snapshot: &'a Snapshot) -> Self {
        Self { snapshot }
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self) -> Vec<i32> {
        let mut pairs = vec![(0, 0); self.snapshot.discovered().len()];

        for (n, pass) in self.snapshot.crossing_trail().iter().enumerate() {
            let Some(slot) = self.snapshot.index_of(pass.crossing) else {
                continue;
            };
            let n = label(n + 1);
            let pair = &mut pairs[slot - 1];
            if n % 2 == 0 {
                pair.1 = if pass.over { -n } else { n };
            } else {
                pair.0 = n;
            }
        }

        pairs.sort_by_key(|&(odd, _)| odd);
        pairs.into_iter().map(|(_, even)| even).collect()
    }
}
