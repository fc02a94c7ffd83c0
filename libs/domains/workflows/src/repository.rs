use crate::error::WorkflowResult;
use crate::models::{CreateWorkflow, Workflow};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Storage contract for workflow records.
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait WorkflowRepository: Send + Sync {
    /// Create a new workflow attached to a project.
    async fn create(&self, input: CreateWorkflow) -> WorkflowResult<Workflow>;

    /// List all workflows attached to a project, newest first.
    async fn list_by_project(&self, project_id: Uuid) -> WorkflowResult<Vec<Workflow>>;

    /// Remove all workflows attached to a project. No-op when none exist.
    async fn delete_by_project(&self, project_id: Uuid) -> WorkflowResult<()>;
}

/// In-memory workflow repository for tests and local development.
#[derive(Debug, Clone, Default)]
pub struct InMemoryWorkflowRepository {
    workflows: Arc<RwLock<HashMap<Uuid, Workflow>>>,
}

impl InMemoryWorkflowRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WorkflowRepository for InMemoryWorkflowRepository {
    async fn create(&self, input: CreateWorkflow) -> WorkflowResult<Workflow> {
        let workflow = Workflow {
            id: Uuid::new_v4(),
            project_id: input.project_id,
            name: input.name,
            description: input.description,
            created_at: Utc::now(),
        };
        self.workflows
            .write()
            .await
            .insert(workflow.id, workflow.clone());
        Ok(workflow)
    }

    async fn list_by_project(&self, project_id: Uuid) -> WorkflowResult<Vec<Workflow>> {
        let workflows = self.workflows.read().await;
        let mut matching: Vec<Workflow> = workflows
            .values()
            .filter(|w| w.project_id == project_id)
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matching)
    }

    async fn delete_by_project(&self, project_id: Uuid) -> WorkflowResult<()> {
        self.workflows
            .write()
            .await
            .retain(|_, w| w.project_id != project_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_input(project_id: Uuid, name: &str) -> CreateWorkflow {
        CreateWorkflow {
            project_id,
            name: name.to_string(),
            description: None,
        }
    }

    #[tokio::test]
    async fn test_list_by_project_filters() {
        let repo = InMemoryWorkflowRepository::new();
        let project_id = Uuid::new_v4();

        repo.create(create_input(project_id, "review")).await.unwrap();
        repo.create(create_input(Uuid::new_v4(), "other")).await.unwrap();

        let listed = repo.list_by_project(project_id).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "review");
    }

    #[tokio::test]
    async fn test_list_unknown_project_is_empty() {
        let repo = InMemoryWorkflowRepository::new();
        assert!(repo.list_by_project(Uuid::new_v4()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_by_project_removes_all() {
        let repo = InMemoryWorkflowRepository::new();
        let project_id = Uuid::new_v4();

        repo.create(create_input(project_id, "a")).await.unwrap();
        repo.create(create_input(project_id, "b")).await.unwrap();

        repo.delete_by_project(project_id).await.unwrap();
        assert!(repo.list_by_project(project_id).await.unwrap().is_empty());
    }
}
