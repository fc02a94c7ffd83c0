//! Workflows Domain
//!
//! Workflows are named process records attached to a project. The project
//! API serves them as a per-project listing.

pub mod entity;
pub mod error;
pub mod models;
pub mod postgres;
pub mod repository;

// Re-export commonly used types
pub use error::{WorkflowError, WorkflowResult};
pub use models::{CreateWorkflow, Workflow, WorkflowListing};
pub use postgres::PgWorkflowRepository;
pub use repository::{InMemoryWorkflowRepository, WorkflowRepository};
#[cfg(feature = "mocks")]
pub use repository::MockWorkflowRepository;
