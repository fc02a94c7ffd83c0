use chrono::{DateTime, NaiveDate, SubsecRound, Utc};
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Project lifecycle status
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Default,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "project_status")]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ProjectStatus {
    /// Project is in flight
    #[default]
    #[sea_orm(string_value = "pending")]
    Pending,
    /// Project has been delivered
    #[sea_orm(string_value = "completed")]
    Completed,
}

/// Project entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Project {
    /// Unique identifier
    pub id: Uuid,
    /// Project name (unique across the store)
    pub name: String,
    /// Optional free-form description
    pub description: Option<String>,
    /// Current status
    pub status: ProjectStatus,
    /// Planned start date
    pub start_date: NaiveDate,
    /// Planned end date, if known
    pub end_date: Option<NaiveDate>,
    /// The team provisioned alongside this project (1:1)
    pub team_id: Uuid,
    /// Creation timestamp; sort key of the status-ordered listing index
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Build a fresh project from creation input. Ids and the creation
    /// timestamp are server-assigned here; status always starts Pending.
    ///
    /// `created_at` is truncated to microseconds, the precision carried by
    /// both the continuation cursor and the timestamptz column. A finer
    /// in-memory timestamp would compare strictly greater than its own
    /// cursor position and re-surface the page-boundary record.
    pub fn new(input: CreateProject) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: input.name,
            description: input.description,
            status: ProjectStatus::Pending,
            start_date: input.start_date,
            end_date: input.end_date,
            team_id: Uuid::new_v4(),
            created_at: Utc::now().trunc_subsecs(6),
        }
    }
}

/// DTO for creating a new project
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProject {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(max = 2000))]
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

/// DTO for partially updating a project. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProject {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[validate(length(max = 2000))]
    pub description: Option<String>,
    pub status: Option<ProjectStatus>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Query parameters for the aggregated listing endpoint
#[derive(Debug, Clone, Default, Deserialize, IntoParams, ToSchema)]
pub struct ListProjectsQuery {
    /// Status partition to list. Defaults to pending.
    pub status: Option<ProjectStatus>,
    /// Page size, clamped to the service's configured maximum. Defaults to
    /// the service's configured page size.
    pub limit: Option<u64>,
    /// Opaque continuation token from a previous page.
    pub cursor: Option<String>,
}

/// One project enriched with its derived aggregates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EnrichedProject {
    #[serde(flatten)]
    pub project: Project,
    /// Number of usecases attached to the project
    pub usecase_count: u64,
    /// Flattened, deduplicated team member ids
    pub team: Vec<Uuid>,
}

/// One page of the aggregated listing
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProjectListing {
    /// Enriched projects in index order
    pub data: Vec<EnrichedProject>,
    /// Continuation token; absent when the partition is exhausted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

/// Flattened roster view for the team endpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TeamView {
    pub project_id: Uuid,
    pub team_id: Uuid,
    /// Deduplicated member ids across every role
    pub members: Vec<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ProjectStatus::Pending).unwrap(),
            "\"pending\""
        );
        assert_eq!(
            serde_json::to_string(&ProjectStatus::Completed).unwrap(),
            "\"completed\""
        );
    }

    #[test]
    fn test_status_parses_case_insensitive() {
        assert_eq!(
            "Pending".parse::<ProjectStatus>().unwrap(),
            ProjectStatus::Pending
        );
        assert_eq!(
            "completed".parse::<ProjectStatus>().unwrap(),
            ProjectStatus::Completed
        );
    }

    #[test]
    fn test_new_project_defaults() {
        let project = Project::new(CreateProject {
            name: "migration".to_string(),
            description: None,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            end_date: None,
        });

        assert_eq!(project.status, ProjectStatus::Pending);
        assert_ne!(project.id, project.team_id);
    }

    #[test]
    fn test_new_project_timestamp_is_microsecond_precision() {
        use chrono::Timelike;

        let project = Project::new(CreateProject {
            name: "precision".to_string(),
            description: None,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            end_date: None,
        });

        assert_eq!(project.created_at.nanosecond() % 1_000, 0);
    }

    #[test]
    fn test_enriched_project_flattens_fields() {
        let project = Project::new(CreateProject {
            name: "flatten".to_string(),
            description: None,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            end_date: None,
        });
        let enriched = EnrichedProject {
            project: project.clone(),
            usecase_count: 2,
            team: vec![],
        };

        let json = serde_json::to_value(&enriched).unwrap();
        assert_eq!(json["name"], "flatten");
        assert_eq!(json["usecase_count"], 2);
    }
}
