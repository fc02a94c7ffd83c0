//! Usecases Domain
//!
//! Usecases are work items attached to a project. The project listing
//! pipeline only needs their count per project; the full records back the
//! usecase browsing endpoints.

pub mod entity;
pub mod error;
pub mod models;
pub mod postgres;
pub mod repository;

// Re-export commonly used types
pub use error::{UsecaseError, UsecaseResult};
pub use models::{CreateUsecase, Usecase};
pub use postgres::PgUsecaseRepository;
pub use repository::{InMemoryUsecaseRepository, UsecaseRepository};
#[cfg(feature = "mocks")]
pub use repository::MockUsecaseRepository;
