use axum_helpers::AppError;
use thiserror::Error;

pub type UsecaseResult<T> = Result<T, UsecaseError>;

#[derive(Debug, Error)]
pub enum UsecaseError {
    #[error("Usecase store error: {0}")]
    Store(String),
}

impl From<UsecaseError> for AppError {
    fn from(err: UsecaseError) -> Self {
        match err {
            UsecaseError::Store(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl From<sea_orm::DbErr> for UsecaseError {
    fn from(err: sea_orm::DbErr) -> Self {
        UsecaseError::Store(err.to_string())
    }
}
