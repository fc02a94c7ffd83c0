use crate::error::{TeamError, TeamResult};
use crate::models::{Role, Team};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Storage contract for team records.
///
/// Teams are keyed by their owning project; each project has at most one.
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Create an empty team for a project, with every role present. The
    /// team id is assigned by the caller alongside the project id.
    async fn provision(&self, project_id: Uuid, team_id: Uuid, roles: &[Role]) -> TeamResult<Team>;

    /// Fetch the team attached to a project, if one exists.
    async fn get_by_project(&self, project_id: Uuid) -> TeamResult<Option<Team>>;

    /// Remove the team attached to a project. No-op when absent.
    async fn delete_by_project(&self, project_id: Uuid) -> TeamResult<()>;
}

/// In-memory team repository for tests and local development.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTeamRepository {
    teams: Arc<RwLock<HashMap<Uuid, Team>>>,
}

impl InMemoryTeamRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a fully-formed team record, replacing any existing one.
    pub async fn insert(&self, team: Team) {
        self.teams.write().await.insert(team.project_id, team);
    }
}

#[async_trait]
impl TeamRepository for InMemoryTeamRepository {
    async fn provision(&self, project_id: Uuid, team_id: Uuid, roles: &[Role]) -> TeamResult<Team> {
        let team = Team::provisioned(project_id, team_id, roles);
        let mut teams = self.teams.write().await;
        if teams.contains_key(&project_id) {
            return Err(TeamError::Store(format!(
                "Project {project_id} already has a team"
            )));
        }
        teams.insert(project_id, team.clone());
        Ok(team)
    }

    async fn get_by_project(&self, project_id: Uuid) -> TeamResult<Option<Team>> {
        Ok(self.teams.read().await.get(&project_id).cloned())
    }

    async fn delete_by_project(&self, project_id: Uuid) -> TeamResult<()> {
        self.teams.write().await.remove(&project_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_provision_then_get() {
        let repo = InMemoryTeamRepository::new();
        let project_id = Uuid::new_v4();

        let team = repo
            .provision(project_id, Uuid::new_v4(), &Role::all())
            .await
            .unwrap();
        assert_eq!(team.project_id, project_id);
        assert_eq!(team.members.len(), 7);

        let fetched = repo.get_by_project(project_id).await.unwrap().unwrap();
        assert_eq!(fetched.team_id, team.team_id);
    }

    #[tokio::test]
    async fn test_provision_twice_fails() {
        let repo = InMemoryTeamRepository::new();
        let project_id = Uuid::new_v4();

        repo.provision(project_id, Uuid::new_v4(), &Role::all())
            .await
            .unwrap();
        let result = repo.provision(project_id, Uuid::new_v4(), &Role::all()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let repo = InMemoryTeamRepository::new();
        let found = repo.get_by_project(Uuid::new_v4()).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let repo = InMemoryTeamRepository::new();
        let project_id = Uuid::new_v4();

        repo.provision(project_id, Uuid::new_v4(), &Role::all())
            .await
            .unwrap();
        repo.delete_by_project(project_id).await.unwrap();
        repo.delete_by_project(project_id).await.unwrap();

        assert!(repo.get_by_project(project_id).await.unwrap().is_none());
    }
}
