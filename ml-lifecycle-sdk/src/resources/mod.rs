//! Resource-specific clients for the ML service endpoints.

pub mod analyses;
pub mod datasets;
pub mod models;
pub mod projects;

pub use analyses::AnalysesClient;
pub use datasets::DatasetsClient;
pub use models::ModelsClient;
pub use projects::ProjectsClient;
