use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestUuidResponse, BadRequestValidationResponse, ConflictResponse,
        InternalServerErrorResponse, NotFoundResponse,
    },
    UuidPath, ValidatedJson,
};
use std::sync::Arc;
use utoipa::OpenApi;

use domain_teams::TeamRepository;
use domain_usecases::UsecaseRepository;
use domain_workflows::{Workflow, WorkflowListing, WorkflowRepository};

use crate::error::ProjectResult;
use crate::models::{
    CreateProject, EnrichedProject, ListProjectsQuery, Project, ProjectListing, TeamView,
    UpdateProject,
};
use crate::repository::ProjectRepository;
use crate::service::ProjectService;

const TAG: &str = "projects";

/// OpenAPI documentation for the Projects API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_projects,
        list_all_projects,
        create_project,
        get_project,
        update_project,
        delete_project,
        get_project_team,
        get_project_workflows,
    ),
    components(
        schemas(
            Project,
            CreateProject,
            UpdateProject,
            ProjectListing,
            EnrichedProject,
            TeamView,
            Workflow,
            WorkflowListing
        ),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            ConflictResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Project management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the projects router with all HTTP endpoints
pub fn router<R, T, U, W>(service: ProjectService<R, T, U, W>) -> Router
where
    R: ProjectRepository + 'static,
    T: TeamRepository + 'static,
    U: UsecaseRepository + 'static,
    W: WorkflowRepository + 'static,
{
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_projects).post(create_project))
        .route("/all", get(list_all_projects))
        .route(
            "/{id}",
            get(get_project)
                .patch(update_project)
                .delete(delete_project),
        )
        .route("/{id}/team", get(get_project_team))
        .route("/{id}/workflow", get(get_project_workflows))
        .with_state(shared_service)
}

/// List one enriched page of the status-filtered listing
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    params(ListProjectsQuery),
    responses(
        (status = 200, description = "One page of enriched projects", body = ProjectListing),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_projects<R, T, U, W>(
    State(service): State<Arc<ProjectService<R, T, U, W>>>,
    Query(query): Query<ListProjectsQuery>,
) -> ProjectResult<Json<ProjectListing>>
where
    R: ProjectRepository,
    T: TeamRepository,
    U: UsecaseRepository,
    W: WorkflowRepository,
{
    let listing = service.list_projects(query).await?;
    Ok(Json(listing))
}

/// List every project without enrichment
#[utoipa::path(
    get,
    path = "/all",
    tag = TAG,
    responses(
        (status = 200, description = "All projects", body = Vec<Project>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_all_projects<R, T, U, W>(
    State(service): State<Arc<ProjectService<R, T, U, W>>>,
) -> ProjectResult<Json<Vec<Project>>>
where
    R: ProjectRepository,
    T: TeamRepository,
    U: UsecaseRepository,
    W: WorkflowRepository,
{
    let projects = service.list_all_projects().await?;
    Ok(Json(projects))
}

/// Create a new project and provision its team
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateProject,
    responses(
        (status = 201, description = "Project created successfully", body = Project),
        (status = 400, response = BadRequestValidationResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_project<R, T, U, W>(
    State(service): State<Arc<ProjectService<R, T, U, W>>>,
    ValidatedJson(input): ValidatedJson<CreateProject>,
) -> ProjectResult<impl IntoResponse>
where
    R: ProjectRepository,
    T: TeamRepository,
    U: UsecaseRepository,
    W: WorkflowRepository,
{
    let project = service.create_project(input).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// Get a project by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = uuid::Uuid, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "Project found", body = Project),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_project<R, T, U, W>(
    State(service): State<Arc<ProjectService<R, T, U, W>>>,
    UuidPath(id): UuidPath,
) -> ProjectResult<Json<Project>>
where
    R: ProjectRepository,
    T: TeamRepository,
    U: UsecaseRepository,
    W: WorkflowRepository,
{
    let project = service.get_project(id).await?;
    Ok(Json(project))
}

/// Partially update a project
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = uuid::Uuid, Path, description = "Project ID")
    ),
    request_body = UpdateProject,
    responses(
        (status = 200, description = "Project updated successfully", body = Project),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_project<R, T, U, W>(
    State(service): State<Arc<ProjectService<R, T, U, W>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateProject>,
) -> ProjectResult<Json<Project>>
where
    R: ProjectRepository,
    T: TeamRepository,
    U: UsecaseRepository,
    W: WorkflowRepository,
{
    let project = service.update_project(id, input).await?;
    Ok(Json(project))
}

/// Delete a project
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = uuid::Uuid, Path, description = "Project ID")
    ),
    responses(
        (status = 204, description = "Project deleted (or already absent)"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_project<R, T, U, W>(
    State(service): State<Arc<ProjectService<R, T, U, W>>>,
    UuidPath(id): UuidPath,
) -> ProjectResult<impl IntoResponse>
where
    R: ProjectRepository,
    T: TeamRepository,
    U: UsecaseRepository,
    W: WorkflowRepository,
{
    service.delete_project(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Get the flattened team roster of a project
#[utoipa::path(
    get,
    path = "/{id}/team",
    tag = TAG,
    params(
        ("id" = uuid::Uuid, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "Flattened team roster", body = TeamView),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_project_team<R, T, U, W>(
    State(service): State<Arc<ProjectService<R, T, U, W>>>,
    UuidPath(id): UuidPath,
) -> ProjectResult<Json<TeamView>>
where
    R: ProjectRepository,
    T: TeamRepository,
    U: UsecaseRepository,
    W: WorkflowRepository,
{
    let team = service.get_team(id).await?;
    Ok(Json(team))
}

/// List the workflows attached to a project
#[utoipa::path(
    get,
    path = "/{id}/workflow",
    tag = TAG,
    params(
        ("id" = uuid::Uuid, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "Workflows attached to the project", body = WorkflowListing),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_project_workflows<R, T, U, W>(
    State(service): State<Arc<ProjectService<R, T, U, W>>>,
    UuidPath(id): UuidPath,
) -> ProjectResult<Json<WorkflowListing>>
where
    R: ProjectRepository,
    T: TeamRepository,
    U: UsecaseRepository,
    W: WorkflowRepository,
{
    let workflows = service.get_workflows(id).await?;
    Ok(Json(WorkflowListing { workflows }))
}
