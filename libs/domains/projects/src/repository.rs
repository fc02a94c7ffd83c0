use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::cursor::Cursor;
use crate::error::{ProjectError, ProjectResult};
use crate::models::{Project, ProjectStatus, UpdateProject};

/// Repository trait for project persistence.
///
/// Writes go through the primary key; reads additionally use two secondary
/// access paths, lookup by name and the status-partitioned listing index
/// ordered ascending by `(created_at, id)`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Persist a fully-formed project record.
    async fn insert(&self, project: Project) -> ProjectResult<Project>;

    /// Get a project by ID
    async fn get_by_id(&self, id: Uuid) -> ProjectResult<Option<Project>>;

    /// Look up projects by exact name. The name index is non-unique at the
    /// store level; a non-empty result means the name is taken.
    async fn find_by_name(&self, name: &str) -> ProjectResult<Vec<Project>>;

    /// Unfiltered scan of every project.
    async fn list_all(&self) -> ProjectResult<Vec<Project>>;

    /// One page of the status partition, resuming after `cursor`.
    ///
    /// Keyset pagination over `(created_at, id)` ascending. Records inserted
    /// behind the cursor are never re-surfaced; records inserted past it
    /// show up on later pages. The returned cursor is present only when the
    /// partition may hold more records.
    async fn list_by_status(
        &self,
        status: ProjectStatus,
        page_size: u64,
        cursor: Option<Cursor>,
    ) -> ProjectResult<(Vec<Project>, Option<Cursor>)>;

    /// Merge the supplied fields into an existing record and return the full
    /// post-update record. `None` means the id is unknown.
    async fn update(&self, id: Uuid, input: UpdateProject) -> ProjectResult<Option<Project>>;

    /// Hard-delete a project. Returns whether a record was removed.
    async fn delete(&self, id: Uuid) -> ProjectResult<bool>;
}

/// In-memory implementation of ProjectRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryProjectRepository {
    projects: Arc<RwLock<HashMap<Uuid, Project>>>,
}

impl InMemoryProjectRepository {
    pub fn new() -> Self {
        Self {
            projects: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

fn merge_update(project: &mut Project, input: UpdateProject) {
    if let Some(name) = input.name {
        project.name = name;
    }
    if let Some(description) = input.description {
        project.description = Some(description);
    }
    if let Some(status) = input.status {
        project.status = status;
    }
    if let Some(start_date) = input.start_date {
        project.start_date = start_date;
    }
    if let Some(end_date) = input.end_date {
        project.end_date = Some(end_date);
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn insert(&self, project: Project) -> ProjectResult<Project> {
        let mut projects = self.projects.write().await;
        if projects.contains_key(&project.id) {
            return Err(ProjectError::Store(format!(
                "Project {} already exists",
                project.id
            )));
        }
        projects.insert(project.id, project.clone());

        tracing::info!(project_id = %project.id, "Created project");
        Ok(project)
    }

    async fn get_by_id(&self, id: Uuid) -> ProjectResult<Option<Project>> {
        let projects = self.projects.read().await;
        Ok(projects.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> ProjectResult<Vec<Project>> {
        let projects = self.projects.read().await;
        Ok(projects
            .values()
            .filter(|p| p.name == name)
            .cloned()
            .collect())
    }

    async fn list_all(&self) -> ProjectResult<Vec<Project>> {
        let projects = self.projects.read().await;
        let mut result: Vec<Project> = projects.values().cloned().collect();
        result.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(result)
    }

    async fn list_by_status(
        &self,
        status: ProjectStatus,
        page_size: u64,
        cursor: Option<Cursor>,
    ) -> ProjectResult<(Vec<Project>, Option<Cursor>)> {
        let projects = self.projects.read().await;

        let mut partition: Vec<Project> = projects
            .values()
            .filter(|p| p.status == status)
            .filter(|p| match cursor {
                Some(c) => (p.created_at, p.id) > (c.created_at, c.id),
                None => true,
            })
            .cloned()
            .collect();
        partition.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));

        let has_more = partition.len() as u64 > page_size;
        partition.truncate(page_size as usize);

        let next = if has_more {
            partition.last().map(Cursor::after)
        } else {
            None
        };

        Ok((partition, next))
    }

    async fn update(&self, id: Uuid, input: UpdateProject) -> ProjectResult<Option<Project>> {
        let mut projects = self.projects.write().await;
        match projects.get_mut(&id) {
            Some(project) => {
                merge_update(project, input);
                Ok(Some(project.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: Uuid) -> ProjectResult<bool> {
        let mut projects = self.projects.write().await;
        Ok(projects.remove(&id).is_some())
    }
}
