use futures::future::try_join_all;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use domain_teams::{Role, TeamRepository};
use domain_usecases::UsecaseRepository;
use domain_workflows::{Workflow, WorkflowRepository};

use crate::cursor::Cursor;
use crate::error::{ProjectError, ProjectResult};
use crate::models::{
    CreateProject, EnrichedProject, ListProjectsQuery, Project, ProjectListing, ProjectStatus,
    TeamView, UpdateProject,
};
use crate::repository::ProjectRepository;

/// Tunables injected at service construction.
#[derive(Debug, Clone)]
pub struct ProjectServiceConfig {
    /// Page size used when a listing request does not name one.
    pub default_page_size: u64,
    /// Upper bound on the page size; client-supplied limits are clamped
    /// into `1..=max_page_size`.
    pub max_page_size: u64,
    /// Role vocabulary provisioned onto every new team.
    pub provision_roles: Vec<Role>,
}

impl Default for ProjectServiceConfig {
    fn default() -> Self {
        Self {
            default_page_size: 3,
            max_page_size: 100,
            provision_roles: Role::all(),
        }
    }
}

/// Service layer for project business logic: the write path and the
/// listing aggregation pipeline.
#[derive(Clone)]
pub struct ProjectService<R, T, U, W>
where
    R: ProjectRepository,
    T: TeamRepository,
    U: UsecaseRepository,
    W: WorkflowRepository,
{
    projects: Arc<R>,
    teams: Arc<T>,
    usecases: Arc<U>,
    workflows: Arc<W>,
    config: ProjectServiceConfig,
}

impl<R, T, U, W> ProjectService<R, T, U, W>
where
    R: ProjectRepository,
    T: TeamRepository,
    U: UsecaseRepository,
    W: WorkflowRepository,
{
    pub fn new(projects: R, teams: T, usecases: U, workflows: W) -> Self {
        Self::with_config(
            projects,
            teams,
            usecases,
            workflows,
            ProjectServiceConfig::default(),
        )
    }

    pub fn with_config(
        projects: R,
        teams: T,
        usecases: U,
        workflows: W,
        config: ProjectServiceConfig,
    ) -> Self {
        Self {
            projects: Arc::new(projects),
            teams: Arc::new(teams),
            usecases: Arc::new(usecases),
            workflows: Arc::new(workflows),
            config,
        }
    }

    /// Create a project and provision its team.
    ///
    /// Two separate writes, no transaction across the stores. On a
    /// provisioning failure the freshly inserted project is deleted again;
    /// if that compensation itself fails, the orphan is logged for offline
    /// reconciliation and listing tolerates it with an empty roster.
    pub async fn create_project(&self, input: CreateProject) -> ProjectResult<Project> {
        input
            .validate()
            .map_err(|e| ProjectError::Validation(e.to_string()))?;

        let taken = self.projects.find_by_name(&input.name).await?;
        if !taken.is_empty() {
            return Err(ProjectError::DuplicateName(input.name));
        }

        let project = self.projects.insert(Project::new(input)).await?;

        if let Err(err) = self
            .teams
            .provision(project.id, project.team_id, &self.config.provision_roles)
            .await
        {
            tracing::warn!(project_id = %project.id, error = %err, "Team provisioning failed, rolling back project");
            if let Err(rollback_err) = self.projects.delete(project.id).await {
                tracing::error!(
                    project_id = %project.id,
                    error = %rollback_err,
                    "Rollback of project after failed team provisioning also failed; orphaned record needs reconciliation"
                );
            }
            return Err(ProjectError::TeamProvisioning {
                project_id: project.id,
                reason: err.to_string(),
            });
        }

        Ok(project)
    }

    /// One enriched page of the status-filtered listing.
    ///
    /// Pulls a page from the status-ordered index, fans out per project to
    /// fetch the usecase count and team roster concurrently, and reassembles
    /// the results keyed by project id so the page keeps index order no
    /// matter which enrichment finishes first. Any enrichment failure fails
    /// the whole page.
    pub async fn list_projects(&self, query: ListProjectsQuery) -> ProjectResult<ProjectListing> {
        let status = query.status.unwrap_or(ProjectStatus::Pending);
        let page_size = query
            .limit
            .unwrap_or(self.config.default_page_size)
            .clamp(1, self.config.max_page_size);
        let cursor = query.cursor.as_deref().map(Cursor::decode).transpose()?;

        let (page, next) = self
            .projects
            .list_by_status(status, page_size, cursor)
            .await?;

        let enrichments = try_join_all(page.iter().map(|p| self.enrich(p.id))).await?;
        let mut by_id: HashMap<Uuid, (u64, Vec<Uuid>)> = enrichments.into_iter().collect();

        let data = page
            .into_iter()
            .map(|project| {
                let (usecase_count, team) = by_id.remove(&project.id).unwrap_or((0, Vec::new()));
                EnrichedProject {
                    project,
                    usecase_count,
                    team,
                }
            })
            .collect();

        Ok(ProjectListing {
            data,
            cursor: next.map(|c| c.encode()),
        })
    }

    /// Fetch both aggregates of one project concurrently.
    ///
    /// A missing team record is a known store state (failed provisioning
    /// rollback); it enriches as an empty roster instead of failing the page.
    async fn enrich(&self, project_id: Uuid) -> ProjectResult<(Uuid, (u64, Vec<Uuid>))> {
        let (count, team) = tokio::try_join!(
            async { self.usecases.count_by_project(project_id).await.map_err(ProjectError::from) },
            async { self.teams.get_by_project(project_id).await.map_err(ProjectError::from) },
        )?;

        let members = match team {
            Some(team) => team.flatten_members(),
            None => {
                tracing::warn!(project_id = %project_id, "Project has no team record, listing with empty roster");
                Vec::new()
            }
        };

        Ok((project_id, (count, members)))
    }

    /// Get a project by ID
    pub async fn get_project(&self, id: Uuid) -> ProjectResult<Project> {
        self.projects
            .get_by_id(id)
            .await?
            .ok_or(ProjectError::NotFound(id))
    }

    /// Unfiltered plain listing, no enrichment.
    pub async fn list_all_projects(&self) -> ProjectResult<Vec<Project>> {
        self.projects.list_all().await
    }

    /// Partially update a project.
    pub async fn update_project(&self, id: Uuid, input: UpdateProject) -> ProjectResult<Project> {
        input
            .validate()
            .map_err(|e| ProjectError::Validation(e.to_string()))?;

        if let Some(new_name) = input.name.as_deref() {
            let taken = self.projects.find_by_name(new_name).await?;
            if taken.iter().any(|p| p.id != id) {
                return Err(ProjectError::DuplicateName(new_name.to_string()));
            }
        }

        self.projects
            .update(id, input)
            .await?
            .ok_or(ProjectError::NotFound(id))
    }

    /// Delete a project. Idempotent: deleting an unknown id is a success.
    pub async fn delete_project(&self, id: Uuid) -> ProjectResult<()> {
        let removed = self.projects.delete(id).await?;
        if !removed {
            tracing::debug!(project_id = %id, "Delete of unknown project, treating as success");
        }
        Ok(())
    }

    /// Flattened roster view of a project's team.
    pub async fn get_team(&self, project_id: Uuid) -> ProjectResult<TeamView> {
        let project = self.get_project(project_id).await?;

        let members = match self.teams.get_by_project(project_id).await? {
            Some(team) => team.flatten_members(),
            None => Vec::new(),
        };

        Ok(TeamView {
            project_id: project.id,
            team_id: project.team_id,
            members,
        })
    }

    /// Workflows attached to a project, newest first.
    pub async fn get_workflows(&self, project_id: Uuid) -> ProjectResult<Vec<Workflow>> {
        self.get_project(project_id).await?;
        Ok(self.workflows.list_by_project(project_id).await?)
    }
}
