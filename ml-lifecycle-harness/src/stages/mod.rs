pub mod build_model;
pub mod create_project;
pub mod upload_dataset;

pub use build_model::*;
pub use create_project::*;
pub use upload_dataset::*;
