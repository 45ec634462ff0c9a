pub mod annotator;
pub mod normalizer;

pub use annotator::{Annotator, HeuristicAnnotator, PosTag, Token};
pub use normalizer::normalize;

#[cfg(test)]
pub use annotator::MockAnnotator;
