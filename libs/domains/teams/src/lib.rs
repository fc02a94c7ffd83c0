//! Teams Domain
//!
//! Team records map a project to a role → member-set structure. A team is
//! provisioned together with its project (all roles present, no members)
//! and is read by the project listing pipeline to build the flattened,
//! deduplicated member roster.

pub mod entity;
pub mod error;
pub mod models;
pub mod postgres;
pub mod repository;

// Re-export commonly used types
pub use error::{TeamError, TeamResult};
pub use models::{Role, RoleUsersMap, Team};
pub use postgres::PgTeamRepository;
pub use repository::{InMemoryTeamRepository, TeamRepository};
#[cfg(feature = "mocks")]
pub use repository::MockTeamRepository;
