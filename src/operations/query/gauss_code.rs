use std::fmt;

use super::label;
use crate::topology::Snapshot;

/// Computes the Gauss code: for each crossing pass in trail order, the
/// 1-based crossing index, negated on under-passes.
pub struct GaussCode<'a> {
    snapshot: &'a Snapshot,
}

impl<'a> GaussCode<'a> {
    /// Creates a new `GaussCode` query.
    #[must_use]
    pub fn new(snapshot: &'a Snapshot) -> Self {
        Self { snapshot }
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self) -> Vec<i32> {
        self.snapshot
            .crossing_trail()
            .iter()
            .filter_map(|pass| {
                let index = label(self.snapshot.index_of(pass.crossing)?);
                Some(if pass.over { index } else { -index })
            })
            .collect()
    }
}

/// Gauss code paired with the crossing signs in discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtendedGaussCode {
    pub code: Vec<i32>,
    /// `'+'` for positive crossings, `'-'` otherwise.
    pub signs: Vec<char>,
}

impl fmt::Display for ExtendedGaussCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code: Vec<String> = self.code.iter().map(ToString::to_string).collect();
        let signs: Vec<String> = self.signs.iter().map(ToString::to_string).collect();
        write!(f, "{} / {}", code.join(" "), signs.join(" "))
    }
}

/// Computes the extended Gauss code.
pub struct ExtendedGauss<'a> {
    snapshot: &'a Snapshot,
}

impl<'a> ExtendedGauss<'a> {
    /// Creates a new `ExtendedGauss` query.
    #[must_use]
    pub fn new(snapshot: &'a Snapshot) -> Self {
        Self { snapshot }
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self) -> ExtendedGaussCode {
        ExtendedGaussCode {
            code: GaussCode::new(self.snapshot).execute(),
            signs: self
                .snapshot
                .discovered()
                .iter()
                .map(|(_, c)| if c.sign() > 0 { '+' } else { '-' })
                .collect(),
        }
    }
}
