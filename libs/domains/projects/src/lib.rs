//! Projects Domain
//!
//! The core of the backend: project CRUD plus the listing aggregation
//! pipeline. A listing request pulls one cursor-paginated page from the
//! status-ordered index, fans out per project to fetch the usecase count
//! and the team roster concurrently, flattens the roster to a deduplicated
//! member list, and reassembles the enriched page in index order.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Write path, listing aggregator
//! └──────┬──────┘
//!        │
//! ┌──────▼──────────────────────────┐
//! │ ProjectRepository │ TeamRepository │ UsecaseRepository │ WorkflowRepository │
//! └─────────────────────────────────┘
//! ```

pub mod cursor;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use cursor::Cursor;
pub use error::{ProjectError, ProjectResult};
pub use models::{
    CreateProject, EnrichedProject, ListProjectsQuery, Project, ProjectListing, ProjectStatus,
    TeamView, UpdateProject,
};
pub use postgres::PgProjectRepository;
pub use repository::{InMemoryProjectRepository, ProjectRepository};
pub use service::{ProjectService, ProjectServiceConfig};
