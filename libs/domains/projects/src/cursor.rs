use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::{ProjectError, ProjectResult};

/// Keyset position in the status-ordered listing index.
///
/// Wire form is URL-safe base64 of `"<created_at micros>:<project id>"`.
/// The token is opaque to clients; anything that fails to decode is a
/// validation error, never a silent restart from the beginning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub created_at: DateTime<Utc>,
    pub id: Uuid,
}

impl Cursor {
    pub fn new(created_at: DateTime<Utc>, id: Uuid) -> Self {
        Self { created_at, id }
    }

    /// Position of a record in the index, for continuing after it.
    pub fn after(project: &crate::models::Project) -> Self {
        Self::new(project.created_at, project.id)
    }

    pub fn encode(&self) -> String {
        let raw = format!("{}:{}", self.created_at.timestamp_micros(), self.id);
        URL_SAFE_NO_PAD.encode(raw)
    }

    pub fn decode(token: &str) -> ProjectResult<Self> {
        let invalid = || ProjectError::Validation("Invalid cursor token".to_string());

        let bytes = URL_SAFE_NO_PAD.decode(token).map_err(|_| invalid())?;
        let raw = String::from_utf8(bytes).map_err(|_| invalid())?;

        let (micros_str, id_str) = raw.split_once(':').ok_or_else(invalid)?;
        let micros: i64 = micros_str.parse().map_err(|_| invalid())?;
        let created_at = DateTime::from_timestamp_micros(micros).ok_or_else(invalid)?;
        let id = id_str.parse::<Uuid>().map_err(|_| invalid())?;

        Ok(Self { created_at, id })
    }
}
