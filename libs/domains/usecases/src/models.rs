use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Usecase entity - one work item belonging to a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Usecase {
    /// Unique usecase identifier
    pub id: Uuid,
    /// Owning project
    pub project_id: Uuid,
    /// Usecase name
    pub name: String,
    /// Optional free-form description
    pub description: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Input for creating a usecase
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateUsecase {
    pub project_id: Uuid,
    pub name: String,
    pub description: Option<String>,
}
