use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;

pub type ProjectResult<T> = Result<T, ProjectError>;

/// Project domain errors
#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("Project {0} not found")]
    NotFound(Uuid),

    #[error("Project with name '{0}' already exists")]
    DuplicateName(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Team provisioning failed for project {project_id}: {reason}")]
    TeamProvisioning { project_id: Uuid, reason: String },

    #[error("Store error: {0}")]
    Store(String),
}

impl From<ProjectError> for AppError {
    fn from(err: ProjectError) -> Self {
        match err {
            ProjectError::NotFound(id) => AppError::NotFound(format!("Project {id} not found")),
            ProjectError::DuplicateName(name) => {
                AppError::Conflict(format!("Project with name '{name}' already exists"))
            }
            ProjectError::Validation(msg) => AppError::BadRequest(msg),
            ProjectError::TeamProvisioning { project_id, reason } => AppError::InternalServerError(
                format!("Team provisioning failed for project {project_id}: {reason}"),
            ),
            ProjectError::Store(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl axum::response::IntoResponse for ProjectError {
    fn into_response(self) -> axum::response::Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<sea_orm::DbErr> for ProjectError {
    fn from(err: sea_orm::DbErr) -> Self {
        ProjectError::Store(err.to_string())
    }
}

impl From<domain_teams::TeamError> for ProjectError {
    fn from(err: domain_teams::TeamError) -> Self {
        ProjectError::Store(err.to_string())
    }
}

impl From<domain_usecases::UsecaseError> for ProjectError {
    fn from(err: domain_usecases::UsecaseError) -> Self {
        ProjectError::Store(err.to_string())
    }
}

impl From<domain_workflows::WorkflowError> for ProjectError {
    fn from(err: domain_workflows::WorkflowError) -> Self {
        ProjectError::Store(err.to_string())
    }
}
