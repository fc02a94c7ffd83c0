use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Workflow entity - one named process record belonging to a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Workflow {
    /// Unique workflow identifier
    pub id: Uuid,
    /// Owning project
    pub project_id: Uuid,
    /// Workflow name
    pub name: String,
    /// Optional free-form description
    pub description: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Input for creating a workflow
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateWorkflow {
    pub project_id: Uuid,
    pub name: String,
    pub description: Option<String>,
}

/// Response body for the per-project workflow listing
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WorkflowListing {
    pub workflows: Vec<Workflow>,
}
