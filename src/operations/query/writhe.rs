use crate::topology::KnotDiagram;

/// Sums the signs of all crossings of a diagram.
pub struct Writhe<'a> {
    diagram: &'a KnotDiagram,
}

impl<'a> Writhe<'a> {
    /// Creates a new `Writhe` query.
    #[must_use]
    pub fn new(diagram: &'a KnotDiagram) -> Self {
        Self { diagram }
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self) -> i32 {
        self.diagram.crossings().map(|(_, c)| c.sign()).sum()
    }
}
