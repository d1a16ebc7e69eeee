mod alternate;
mod mirror;
mod reverse;

pub use alternate::MakeAlternating;
pub use mirror::MirrorImage;
pub use reverse::ReverseOrientation;
