use axum::Router;
use domain_projects::{handlers, PgProjectRepository, ProjectService, ProjectServiceConfig};
use domain_teams::PgTeamRepository;
use domain_usecases::PgUsecaseRepository;
use domain_workflows::PgWorkflowRepository;

pub fn router(state: &crate::state::AppState) -> Router {
    let projects = PgProjectRepository::new(state.db.clone());
    let teams = PgTeamRepository::new(state.db.clone());
    let usecases = PgUsecaseRepository::new(state.db.clone());
    let workflows = PgWorkflowRepository::new(state.db.clone());

    let config = ProjectServiceConfig {
        default_page_size: state.config.listing_page_size,
        ..Default::default()
    };
    let service = ProjectService::with_config(projects, teams, usecases, workflows, config);
    handlers::router(service)
}
