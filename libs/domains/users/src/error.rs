use axum_helpers::AppError;
use thiserror::Error;

pub type UserResult<T> = Result<T, UserError>;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("User {0} not found")]
    NotFound(uuid::Uuid),
    #[error("User with email '{0}' already exists")]
    DuplicateEmail(String),
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("User store error: {0}")]
    Store(String),
}

impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(id) => AppError::NotFound(format!("User {id} not found")),
            UserError::DuplicateEmail(email) => {
                AppError::Conflict(format!("User with email '{email}' already exists"))
            }
            UserError::Validation(msg) => AppError::BadRequest(msg),
            UserError::Store(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl axum::response::IntoResponse for UserError {
    fn into_response(self) -> axum::response::Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<sea_orm::DbErr> for UserError {
    fn from(err: sea_orm::DbErr) -> Self {
        UserError::Store(err.to_string())
    }
}
