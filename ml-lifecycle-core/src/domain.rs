pub mod algorithm;
pub mod ids;
pub mod status;
pub mod training;

pub use algorithm::*;
pub use ids::*;
pub use status::*;
pub use training::*;
