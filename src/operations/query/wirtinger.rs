use std::fmt;

use super::label;
use crate::topology::Snapshot;

/// A group presentation with one generator per arc and one relation per
/// crossing.
///
/// Generator `k` stands for arc `k - 1`. A relation `[a, b, c, d]` reads
/// `x_a = x_b x_c x_d`, a negative entry denoting an inverse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WirtingerPresentation {
    pub generators: Vec<i32>,
    pub relations: Vec<[i32; 4]>,
}

impl fmt::Display for WirtingerPresentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let generators: Vec<String> = self.generators.iter().map(|g| format!("x{g}")).collect();
        write!(f, "<{}", generators.join(", "))?;
        if !self.relations.is_empty() {
            let relations: Vec<String> = self
                .relations
                .iter()
                .map(|[lhs, rest @ ..]| {
                    let word: Vec<String> = rest
                        .iter()
                        .map(|&k| {
                            if k > 0 {
                                format!("x{k}")
                            } else {
                                format!("x{}^-1", k.abs())
                            }
                        })
                        .collect();
                    format!("x{lhs} = {}", word.join(" "))
                })
                .collect();
            write!(f, " | {}", relations.join(", "))?;
        }
        f.write_str(">")
    }
}

/// Computes the Wirtinger presentation.
///
/// With overstrand `o`, incoming understrand `i` and leaving understrand `l`
/// (1-based arc indices), a negative crossing gives `[l, o, i, -o]` and a
/// positive one `[l, -o, i, o]`. A diagram without crossings presents the
/// free group on one generator.
pub struct Wirtinger<'a> {
    snapshot: &'a Snapshot,
}

impl<'a> Wirtinger<'a> {
    /// Creates a new `Wirtinger` query.
    #[must_use]
    pub fn new(snapshot: &'a Snapshot) -> Self {
        Self { snapshot }
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self) -> WirtingerPresentation {
        let discovered = self.snapshot.discovered();
        if discovered.is_empty() {
            return WirtingerPresentation {
                generators: vec![1],
                relations: Vec::new(),
            };
        }

        let generators = (1..=self.snapshot.arcs().len()).map(label).collect();
        let relations = self
            .snapshot
            .crossing_arcs()
            .iter()
            .map(|strands| {
                let o = label(strands.overstrand + 1);
                let i = label(strands.incoming + 1);
                let l = label(strands.leaving + 1);
                let sign = discovered
                    .get(strands.index - 1)
                    .map_or(0, |(_, crossing)| crossing.sign());
                if sign < 0 {
                    [l, o, i, -o]
                } else {
                    [l, -o, i, o]
                }
            })
            .collect();

        WirtingerPresentation {
            generators,
            relations,
        }
    }
}
