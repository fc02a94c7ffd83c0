//! Handler tests for the Projects domain
//!
//! These tests verify that HTTP handlers work correctly:
//! - Request deserialization (JSON → Rust structs)
//! - Response serialization (Rust structs → JSON)
//! - HTTP status codes
//! - Error responses
//!
//! They exercise only the projects domain router over in-memory stores,
//! not the full application with routing and middleware.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use domain_projects::*;
use domain_teams::{InMemoryTeamRepository, TeamRepository};
use domain_usecases::{CreateUsecase, InMemoryUsecaseRepository, UsecaseRepository};
use domain_workflows::{CreateWorkflow, InMemoryWorkflowRepository, WorkflowRepository};
use http_body_util::BodyExt;
use serde_json::json;
use test_utils::TestDataBuilder;
use tower::ServiceExt; // For oneshot()

struct TestApp {
    app: Router,
    teams: InMemoryTeamRepository,
    usecases: InMemoryUsecaseRepository,
    workflows: InMemoryWorkflowRepository,
}

fn test_app() -> TestApp {
    let teams = InMemoryTeamRepository::new();
    let usecases = InMemoryUsecaseRepository::new();
    let workflows = InMemoryWorkflowRepository::new();
    let service = ProjectService::new(
        InMemoryProjectRepository::new(),
        teams.clone(),
        usecases.clone(),
        workflows.clone(),
    );
    TestApp {
        app: handlers::router(service),
        teams,
        usecases,
        workflows,
    }
}

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn create_request(name: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "name": name,
                "description": "Handler test",
                "start_date": "2024-01-15"
            }))
            .unwrap(),
        ))
        .unwrap()
}

async fn create_project(app: &Router, name: &str) -> Project {
    let response = app.clone().oneshot(create_request(name)).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    json_body(response.into_body()).await
}

#[tokio::test]
async fn test_create_project_handler_returns_201() {
    let TestApp { app, .. } = test_app();
    let builder = TestDataBuilder::from_test_name("handler_create_201");

    let name = builder.name("project", "test");
    let project = create_project(&app, &name).await;

    assert_eq!(project.name, name);
    assert_eq!(project.status, ProjectStatus::Pending);
    assert_eq!(project.start_date.to_string(), "2024-01-15");
}

#[tokio::test]
async fn test_create_project_handler_validates_input() {
    let TestApp { app, .. } = test_app();

    // empty name fails validation before any write
    let response = app.oneshot(create_request("")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_duplicate_name_returns_409() {
    let TestApp { app, .. } = test_app();
    let builder = TestDataBuilder::from_test_name("handler_duplicate");
    let name = builder.name("project", "dup");

    create_project(&app, &name).await;

    let response = app.oneshot(create_request(&name)).await.unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_get_project_handler() {
    let TestApp { app, .. } = test_app();
    let builder = TestDataBuilder::from_test_name("handler_get");
    let created = create_project(&app, &builder.name("project", "get")).await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/{}", created.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let fetched: Project = json_body(response.into_body()).await;
    assert_eq!(fetched.id, created.id);

    // unknown id
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/{}", uuid::Uuid::new_v4()))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // malformed id
    let response = app
        .oneshot(
            Request::builder()
                .uri("/not-a-uuid")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_patch_project_merges_fields() {
    let TestApp { app, .. } = test_app();
    let builder = TestDataBuilder::from_test_name("handler_patch");
    let created = create_project(&app, &builder.name("project", "patch")).await;

    let response = app
        .oneshot(
            Request::builder()
                .method("PATCH")
                .uri(format!("/{}", created.id))
                .header("content-type", "application/json")
                .body(Body::from(r#"{"status":"completed"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let updated: Project = json_body(response.into_body()).await;
    assert_eq!(updated.status, ProjectStatus::Completed);
    assert_eq!(updated.name, created.name);
    assert_eq!(updated.description, created.description);
}

#[tokio::test]
async fn test_delete_project_returns_204_even_when_absent() {
    let TestApp { app, .. } = test_app();
    let builder = TestDataBuilder::from_test_name("handler_delete");
    let created = create_project(&app, &builder.name("project", "del")).await;

    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/{}", created.id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }
}

#[tokio::test]
async fn test_listing_returns_enriched_page_with_cursor() {
    let TestApp { app, teams, usecases, .. } = test_app();
    let builder = TestDataBuilder::from_test_name("handler_listing");

    let mut created = Vec::new();
    for i in 0..4 {
        created.push(create_project(&app, &builder.name("project", &i.to_string())).await);
        // creation order and index order agree when timestamps are distinct
        tokio::time::sleep(std::time::Duration::from_millis(2)).await;
    }

    // attach aggregates to the first project
    let first = &created[0];
    usecases
        .create(CreateUsecase {
            project_id: first.id,
            name: "ingest".to_string(),
            description: None,
        })
        .await
        .unwrap();
    let member = builder.user_id();
    let mut team = teams.get_by_project(first.id).await.unwrap().unwrap();
    for role in [domain_teams::Role::UxTeam, domain_teams::Role::Testing] {
        team.members.get_mut(&role).unwrap().insert(member);
    }
    teams.insert(team).await;

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let page1: ProjectListing = json_body(response.into_body()).await;

    // default page size is 3; page order follows the index
    assert_eq!(page1.data.len(), 3);
    for (enriched, expected) in page1.data.iter().zip(created.iter()) {
        assert_eq!(enriched.project.id, expected.id);
    }
    assert_eq!(page1.data[0].usecase_count, 1);
    assert_eq!(page1.data[0].team, vec![member]);
    assert_eq!(page1.data[1].usecase_count, 0);

    let cursor = page1.cursor.expect("a fourth record remains");
    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/?cursor={cursor}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let page2: ProjectListing = json_body(response.into_body()).await;
    assert_eq!(page2.data.len(), 1);
    assert_eq!(page2.data[0].project.id, created[3].id);
    assert!(page2.cursor.is_none());
}

#[tokio::test]
async fn test_listing_rejects_malformed_cursor() {
    let TestApp { app, .. } = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/?cursor=%21%21bogus%21%21")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_listing_survives_oversized_limit() {
    let TestApp { app, .. } = test_app();
    let builder = TestDataBuilder::from_test_name("handler_oversized_limit");

    create_project(&app, &builder.name("project", "a")).await;
    create_project(&app, &builder.name("project", "b")).await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/?limit=18446744073709551615")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let listing: ProjectListing = json_body(response.into_body()).await;
    assert_eq!(listing.data.len(), 2);
    assert!(listing.cursor.is_none());
}

#[tokio::test]
async fn test_listing_filters_by_status() {
    let TestApp { app, .. } = test_app();
    let builder = TestDataBuilder::from_test_name("handler_status_filter");

    let done = create_project(&app, &builder.name("project", "done")).await;
    create_project(&app, &builder.name("project", "open")).await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PATCH")
                .uri(format!("/{}", done.id))
                .header("content-type", "application/json")
                .body(Body::from(r#"{"status":"completed"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/?status=completed")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let listing: ProjectListing = json_body(response.into_body()).await;
    assert_eq!(listing.data.len(), 1);
    assert_eq!(listing.data[0].project.id, done.id);
}

#[tokio::test]
async fn test_list_all_returns_plain_records() {
    let TestApp { app, .. } = test_app();
    let builder = TestDataBuilder::from_test_name("handler_list_all");

    create_project(&app, &builder.name("project", "a")).await;
    create_project(&app, &builder.name("project", "b")).await;

    let response = app
        .oneshot(Request::builder().uri("/all").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let projects: Vec<Project> = json_body(response.into_body()).await;
    assert_eq!(projects.len(), 2);
}

#[tokio::test]
async fn test_workflow_endpoint_lists_project_workflows() {
    let TestApp { app, workflows, .. } = test_app();
    let builder = TestDataBuilder::from_test_name("handler_workflow");
    let created = create_project(&app, &builder.name("project", "wf")).await;

    for name in ["design review", "release"] {
        workflows
            .create(CreateWorkflow {
                project_id: created.id,
                name: name.to_string(),
                description: None,
            })
            .await
            .unwrap();
    }

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/{}/workflow", created.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let listing: domain_workflows::WorkflowListing = json_body(response.into_body()).await;
    assert_eq!(listing.workflows.len(), 2);
    assert!(listing.workflows.iter().all(|w| w.project_id == created.id));

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/{}/workflow", uuid::Uuid::new_v4()))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_team_endpoint_returns_flattened_roster() {
    let TestApp { app, teams, .. } = test_app();
    let builder = TestDataBuilder::from_test_name("handler_team");
    let created = create_project(&app, &builder.name("project", "team")).await;

    let member = builder.user_id();
    let mut team = teams.get_by_project(created.id).await.unwrap().unwrap();
    team.members
        .get_mut(&domain_teams::Role::ProjectManager)
        .unwrap()
        .insert(member);
    team.members
        .get_mut(&domain_teams::Role::Marketing)
        .unwrap()
        .insert(member);
    teams.insert(team).await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/{}/team", created.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let view: TeamView = json_body(response.into_body()).await;
    assert_eq!(view.team_id, created.team_id);
    assert_eq!(view.members, vec![member]);

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/{}/team", uuid::Uuid::new_v4()))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
