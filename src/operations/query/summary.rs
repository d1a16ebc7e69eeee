use std::fmt;

use super::{Dowker, ExtendedGauss, ExtendedGaussCode, IsAlternating, Tricolor, Wirtinger};
use super::{WirtingerPresentation, Writhe};
use crate::error::Result;
use crate::topology::KnotDiagram;

/// Every invariant of a closed diagram, computed from one snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct KnotSummary {
    pub crossings: usize,
    pub arcs: usize,
    pub alternating: bool,
    pub writhe: i32,
    pub gauss: ExtendedGaussCode,
    pub dowker: Vec<i32>,
    pub wirtinger: WirtingerPresentation,
    /// Color of each arc, if the diagram is 3-colorable.
    pub coloring: Option<Vec<u8>>,
}

impl fmt::Display for KnotSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dowker: Vec<String> = self.dowker.iter().map(ToString::to_string).collect();
        writeln!(f, "crossings:      {}", self.crossings)?;
        writeln!(f, "arcs:           {}", self.arcs)?;
        writeln!(
            f,
            "alternating:    {}",
            if self.alternating { "yes" } else { "no" }
        )?;
        writeln!(f, "writhe:         {}", self.writhe)?;
        writeln!(f, "gauss code:     {}", self.gauss)?;
        writeln!(f, "dowker code:    {}", dowker.join(" "))?;
        writeln!(f, "wirtinger:      {}", self.wirtinger)?;
        match &self.coloring {
            Some(colors) => {
                let colors: Vec<String> = colors.iter().map(|c| format!("c{}", c + 1)).collect();
                write!(f, "3-colorable:    yes ({})", colors.join(" "))
            }
            None => write!(f, "3-colorable:    no"),
        }
    }
}

/// Gathers the invariants of a closed diagram.
pub struct Summarize<'a> {
    diagram: &'a KnotDiagram,
}

impl<'a> Summarize<'a> {
    /// Creates a new `Summarize` query.
    #[must_use]
    pub fn new(diagram: &'a KnotDiagram) -> Self {
        Self { diagram }
    }

    /// Executes the query. Returns `None` while the diagram is still open.
    ///
    /// # Errors
    ///
    /// Returns an error if the coloring search fails.
    pub fn execute(&self) -> Result<Option<KnotSummary>> {
        if !self.diagram.is_done() {
            return Ok(None);
        }
        let snapshot = self.diagram.snapshot();
        Ok(Some(KnotSummary {
            crossings: snapshot.discovered().len(),
            arcs: snapshot.arcs().len(),
            alternating: IsAlternating::new(&snapshot).execute(),
            writhe: Writhe::new(self.diagram).execute(),
            gauss: ExtendedGauss::new(&snapshot).execute(),
            dowker: Dowker::new(&snapshot).execute(),
            wirtinger: Wirtinger::new(&snapshot).execute(),
            coloring: Tricolor::new(&snapshot).execute()?,
        }))
    }
}
