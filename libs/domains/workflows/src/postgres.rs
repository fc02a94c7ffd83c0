use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use crate::{
    entity,
    error::WorkflowResult,
    models::{CreateWorkflow, Workflow},
    repository::WorkflowRepository,
};

pub struct PgWorkflowRepository {
    db: DatabaseConnection,
}

impl PgWorkflowRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl WorkflowRepository for PgWorkflowRepository {
    async fn create(&self, input: CreateWorkflow) -> WorkflowResult<Workflow> {
        let active_model: entity::ActiveModel = input.into();
        let model = entity::Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await?;

        tracing::info!(workflow_id = %model.id, project_id = %model.project_id, "Created workflow");
        Ok(model.into())
    }

    async fn list_by_project(&self, project_id: Uuid) -> WorkflowResult<Vec<Workflow>> {
        let models = entity::Entity::find()
            .filter(entity::Column::ProjectId.eq(project_id))
            .order_by_desc(entity::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn delete_by_project(&self, project_id: Uuid) -> WorkflowResult<()> {
        entity::Entity::delete_many()
            .filter(entity::Column::ProjectId.eq(project_id))
            .exec(&self.db)
            .await?;

        Ok(())
    }
}
