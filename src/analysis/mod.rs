mod error;
mod types;
mod sequence;
mod stats;
mod dataset;
mod generator;

pub use error::*;
pub use types::*;
pub use sequence::*;
pub use stats::*;
pub use dataset::*;
pub use generator::*;
