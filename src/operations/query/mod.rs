mod alternating;
mod dowker;
mod gauss_code;
mod summary;
mod tricolor;
mod wirtinger;
mod writhe;

pub use alternating::IsAlternating;
pub use dowker::Dowker;
pub use gauss_code::{ExtendedGauss, ExtendedGaussCode, GaussCode};
pub use summary::{KnotSummary, Summarize};
pub use tricolor::{Colorings, Tricolor, MAX_COLORING_ARCS};
pub use wirtinger::{Wirtinger, WirtingerPresentation};
pub use writhe::Writhe;

/// Converts a 1-based label to the signed code type.
///
/// Diagrams hold at most a few dozen crossings, so labels stay far below
/// `i32::MAX`.
pub(crate) fn label(n: usize) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}
