use crate::error::UsecaseResult;
use crate::models::{CreateUsecase, Usecase};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Storage contract for usecase records.
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait UsecaseRepository: Send + Sync {
    /// Create a new usecase attached to a project.
    async fn create(&self, input: CreateUsecase) -> UsecaseResult<Usecase>;

    /// List all usecases attached to a project, newest first.
    async fn list_by_project(&self, project_id: Uuid) -> UsecaseResult<Vec<Usecase>>;

    /// Count the usecases attached to a project without loading them.
    async fn count_by_project(&self, project_id: Uuid) -> UsecaseResult<u64>;

    /// Remove all usecases attached to a project. No-op when none exist.
    async fn delete_by_project(&self, project_id: Uuid) -> UsecaseResult<()>;
}

/// In-memory usecase repository for tests and local development.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUsecaseRepository {
    usecases: Arc<RwLock<HashMap<Uuid, Usecase>>>,
}

impl InMemoryUsecaseRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UsecaseRepository for InMemoryUsecaseRepository {
    async fn create(&self, input: CreateUsecase) -> UsecaseResult<Usecase> {
        let usecase = Usecase {
            id: Uuid::new_v4(),
            project_id: input.project_id,
            name: input.name,
            description: input.description,
            created_at: Utc::now(),
        };
        self.usecases
            .write()
            .await
            .insert(usecase.id, usecase.clone());
        Ok(usecase)
    }

    async fn list_by_project(&self, project_id: Uuid) -> UsecaseResult<Vec<Usecase>> {
        let usecases = self.usecases.read().await;
        let mut matching: Vec<Usecase> = usecases
            .values()
            .filter(|u| u.project_id == project_id)
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matching)
    }

    async fn count_by_project(&self, project_id: Uuid) -> UsecaseResult<u64> {
        let usecases = self.usecases.read().await;
        Ok(usecases
            .values()
            .filter(|u| u.project_id == project_id)
            .count() as u64)
    }

    async fn delete_by_project(&self, project_id: Uuid) -> UsecaseResult<()> {
        self.usecases
            .write()
            .await
            .retain(|_, u| u.project_id != project_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_input(project_id: Uuid, name: &str) -> CreateUsecase {
        CreateUsecase {
            project_id,
            name: name.to_string(),
            description: None,
        }
    }

    #[tokio::test]
    async fn test_count_only_counts_own_project() {
        let repo = InMemoryUsecaseRepository::new();
        let project_a = Uuid::new_v4();
        let project_b = Uuid::new_v4();

        repo.create(create_input(project_a, "ingest")).await.unwrap();
        repo.create(create_input(project_a, "report")).await.unwrap();
        repo.create(create_input(project_b, "export")).await.unwrap();

        assert_eq!(repo.count_by_project(project_a).await.unwrap(), 2);
        assert_eq!(repo.count_by_project(project_b).await.unwrap(), 1);
        assert_eq!(repo.count_by_project(Uuid::new_v4()).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_list_by_project_filters() {
        let repo = InMemoryUsecaseRepository::new();
        let project_id = Uuid::new_v4();

        repo.create(create_input(project_id, "first")).await.unwrap();
        repo.create(create_input(Uuid::new_v4(), "other")).await.unwrap();

        let listed = repo.list_by_project(project_id).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "first");
    }

    #[tokio::test]
    async fn test_delete_by_project_removes_all() {
        let repo = InMemoryUsecaseRepository::new();
        let project_id = Uuid::new_v4();

        repo.create(create_input(project_id, "a")).await.unwrap();
        repo.create(create_input(project_id, "b")).await.unwrap();

        repo.delete_by_project(project_id).await.unwrap();
        assert_eq!(repo.count_by_project(project_id).await.unwrap(), 0);
    }
}
