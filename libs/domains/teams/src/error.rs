use axum_helpers::AppError;
use thiserror::Error;

pub type TeamResult<T> = Result<T, TeamError>;

#[derive(Debug, Error)]
pub enum TeamError {
    #[error("Team for project {0} not found")]
    NotFound(uuid::Uuid),
    #[error("Team store error: {0}")]
    Store(String),
}

impl From<TeamError> for AppError {
    fn from(err: TeamError) -> Self {
        match err {
            TeamError::NotFound(id) => {
                AppError::NotFound(format!("Team for project {id} not found"))
            }
            TeamError::Store(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl From<sea_orm::DbErr> for TeamError {
    fn from(err: sea_orm::DbErr) -> Self {
        TeamError::Store(err.to_string())
    }
}
