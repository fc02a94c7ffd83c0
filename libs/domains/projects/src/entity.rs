use crate::models::{Project, ProjectStatus};
use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};

/// Sea-ORM Entity for the projects table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub status: ProjectStatus,
    pub start_date: Date,
    pub end_date: Option<Date>,
    pub team_id: Uuid,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Project {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            status: model.status,
            start_date: model.start_date,
            end_date: model.end_date,
            team_id: model.team_id,
            created_at: model.created_at.into(),
        }
    }
}

impl From<Project> for ActiveModel {
    fn from(project: Project) -> Self {
        ActiveModel {
            id: Set(project.id),
            name: Set(project.name),
            description: Set(project.description),
            status: Set(project.status),
            start_date: Set(project.start_date),
            end_date: Set(project.end_date),
            team_id: Set(project.team_id),
            created_at: Set(project.created_at.into()),
        }
    }
}
