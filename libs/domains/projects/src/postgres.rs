use async_trait::async_trait;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, IntoActiveModel,
    QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::{
    cursor::Cursor,
    entity,
    error::{ProjectError, ProjectResult},
    models::{Project, ProjectStatus, UpdateProject},
    repository::ProjectRepository,
};

pub struct PgProjectRepository {
    db: DatabaseConnection,
}

impl PgProjectRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectRepository for PgProjectRepository {
    async fn insert(&self, project: Project) -> ProjectResult<Project> {
        let active_model: entity::ActiveModel = project.into();
        let model = entity::Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await?;

        tracing::info!(project_id = %model.id, "Created project");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: Uuid) -> ProjectResult<Option<Project>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(|m| m.into()))
    }

    async fn find_by_name(&self, name: &str) -> ProjectResult<Vec<Project>> {
        let models = entity::Entity::find()
            .filter(entity::Column::Name.eq(name))
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn list_all(&self) -> ProjectResult<Vec<Project>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::CreatedAt)
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn list_by_status(
        &self,
        status: ProjectStatus,
        page_size: u64,
        cursor: Option<Cursor>,
    ) -> ProjectResult<(Vec<Project>, Option<Cursor>)> {
        let mut query = entity::Entity::find().filter(entity::Column::Status.eq(status));

        // keyset resume: strictly past (created_at, id)
        if let Some(c) = cursor {
            let after: sea_orm::prelude::DateTimeWithTimeZone = c.created_at.into();
            query = query.filter(
                Condition::any()
                    .add(entity::Column::CreatedAt.gt(after))
                    .add(
                        Condition::all()
                            .add(entity::Column::CreatedAt.eq(after))
                            .add(entity::Column::Id.gt(c.id)),
                    ),
            );
        }

        // one extra row tells us whether another page exists
        let mut models = query
            .order_by_asc(entity::Column::CreatedAt)
            .order_by_asc(entity::Column::Id)
            .limit(page_size.saturating_add(1))
            .all(&self.db)
            .await?;

        let has_more = models.len() as u64 > page_size;
        models.truncate(page_size as usize);

        let projects: Vec<Project> = models.into_iter().map(|m| m.into()).collect();
        let next = if has_more {
            projects.last().map(Cursor::after)
        } else {
            None
        };

        Ok((projects, next))
    }

    async fn update(&self, id: Uuid, input: UpdateProject) -> ProjectResult<Option<Project>> {
        let Some(model) = entity::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut active_model = model.into_active_model();
        if let Some(name) = input.name {
            active_model.name = Set(name);
        }
        if let Some(description) = input.description {
            active_model.description = Set(Some(description));
        }
        if let Some(status) = input.status {
            active_model.status = Set(status);
        }
        if let Some(start_date) = input.start_date {
            active_model.start_date = Set(start_date);
        }
        if let Some(end_date) = input.end_date {
            active_model.end_date = Set(Some(end_date));
        }

        let updated = active_model
            .update(&self.db)
            .await
            .map_err(|e| ProjectError::Store(e.to_string()))?;

        Ok(Some(updated.into()))
    }

    async fn delete(&self, id: Uuid) -> ProjectResult<bool> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }
}
