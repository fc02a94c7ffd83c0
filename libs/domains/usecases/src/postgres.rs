use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::{
    entity,
    error::UsecaseResult,
    models::{CreateUsecase, Usecase},
    repository::UsecaseRepository,
};

pub struct PgUsecaseRepository {
    db: DatabaseConnection,
}

impl PgUsecaseRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UsecaseRepository for PgUsecaseRepository {
    async fn create(&self, input: CreateUsecase) -> UsecaseResult<Usecase> {
        let active_model: entity::ActiveModel = input.into();
        let model = entity::Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await?;

        tracing::info!(usecase_id = %model.id, project_id = %model.project_id, "Created usecase");
        Ok(model.into())
    }

    async fn list_by_project(&self, project_id: Uuid) -> UsecaseResult<Vec<Usecase>> {
        let models = entity::Entity::find()
            .filter(entity::Column::ProjectId.eq(project_id))
            .order_by_desc(entity::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn count_by_project(&self, project_id: Uuid) -> UsecaseResult<u64> {
        let count = entity::Entity::find()
            .filter(entity::Column::ProjectId.eq(project_id))
            .count(&self.db)
            .await?;

        Ok(count)
    }

    async fn delete_by_project(&self, project_id: Uuid) -> UsecaseResult<()> {
        entity::Entity::delete_many()
            .filter(entity::Column::ProjectId.eq(project_id))
            .exec(&self.db)
            .await?;

        Ok(())
    }
}
