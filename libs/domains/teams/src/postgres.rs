use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use uuid::Uuid;

use crate::{
    entity,
    error::TeamResult,
    models::{Role, Team},
    repository::TeamRepository,
};

pub struct PgTeamRepository {
    db: DatabaseConnection,
}

impl PgTeamRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TeamRepository for PgTeamRepository {
    async fn provision(&self, project_id: Uuid, team_id: Uuid, roles: &[Role]) -> TeamResult<Team> {
        let team = Team::provisioned(project_id, team_id, roles);
        let active_model: entity::ActiveModel = team.clone().into();

        entity::Entity::insert(active_model).exec(&self.db).await?;

        tracing::info!(project_id = %project_id, team_id = %team.team_id, "Provisioned team");
        Ok(team)
    }

    async fn get_by_project(&self, project_id: Uuid) -> TeamResult<Option<Team>> {
        let model = entity::Entity::find()
            .filter(entity::Column::ProjectId.eq(project_id))
            .one(&self.db)
            .await?;

        Ok(model.map(|m| m.into()))
    }

    async fn delete_by_project(&self, project_id: Uuid) -> TeamResult<()> {
        entity::Entity::delete_many()
            .filter(entity::Column::ProjectId.eq(project_id))
            .exec(&self.db)
            .await?;

        Ok(())
    }
}
