use utoipa::OpenApi;

/// Combined OpenAPI documentation for the whole API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Project Management API",
        description = "Project CRUD with cursor-paginated, aggregate-enriched listing"
    ),
    nest(
        (path = "/api/projects", api = domain_projects::handlers::ApiDoc),
        (path = "/api/users", api = domain_users::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;
