use axum::Router;

pub mod health;
pub mod projects;
pub mod users;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix is added by the `create_router` helper.
///
/// Takes a reference to AppState and wires every domain service; the
/// returned router is stateless (all sub-routers have state applied).
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new()
        .nest("/projects", projects::router(state))
        .nest("/users", users::router(state))
}

/// Creates a router with the /ready endpoint that performs actual health checks.
///
/// Merged with the stateless app router from `create_router`; the /ready
/// endpoint pings the database connection.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
