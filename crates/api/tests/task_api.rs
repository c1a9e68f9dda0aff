//! HTTP-level integration tests for the `/api/tasks` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_project, create_task, delete, get, post_json, put_json};
use tracker_api::config::Environment;
use tracker_db::Store;

#[tokio::test]
async fn create_task_defaults_to_todo() {
    let (app, _) = common::build_test_app();
    let project = create_project(&app, "P").await;
    let project_id = project["id"].as_str().unwrap();

    let response = post_json(
        &app,
        "/api/tasks",
        serde_json::json!({"title": "Write docs", "projectId": project_id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["title"], "Write docs");
    assert_eq!(json["data"]["status"], "todo");
    assert_eq!(json["data"]["projectId"], project_id);
    assert!(json["data"]["description"].is_null());
}

#[tokio::test]
async fn create_task_without_project_is_allowed() {
    let (app, _) = common::build_test_app();
    let response = post_json(&app, "/api/tasks", serde_json::json!({"title": "Loose"})).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert!(body_json(response).await["data"]["projectId"].is_null());
}

#[tokio::test]
async fn create_task_for_unknown_project_is_allowed() {
    let (app, _) = common::build_test_app();
    let project_id = uuid::Uuid::new_v4().to_string();
    let task = create_task(&app, "Orphan", &project_id).await;
    assert_eq!(task["projectId"], project_id.as_str());
}

#[tokio::test]
async fn create_task_with_malformed_project_id_returns_400() {
    let (app, _) = common::build_test_app();
    let response = post_json(
        &app,
        "/api/tasks",
        serde_json::json!({"title": "T", "projectId": "abc"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message"], "Invalid project id `abc`");
}

#[tokio::test]
async fn create_task_validates_title_and_status() {
    let (app, _) = common::build_test_app();
    let response = post_json(
        &app,
        "/api/tasks",
        serde_json::json!({"title": "   ", "status": "blocked"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(
        json["message"],
        "Task title is required, `blocked` is not a valid enum value for path `status`."
    );
}

#[tokio::test]
async fn create_task_failure_is_opaque_even_in_development() {
    let config = tracker_api::config::ServerConfig {
        environment: Environment::Development,
        ..common::test_config()
    };
    let (app, store) = common::build_test_app_with(config);
    store.close().await;

    let response = post_json(&app, "/api/tasks", serde_json::json!({"title": "T"})).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({"success": false, "message": "Server error"})
    );
}

#[tokio::test]
async fn list_tasks_newest_first() {
    let (app, _) = common::build_test_app();
    let project = create_project(&app, "P").await;
    let project_id = project["id"].as_str().unwrap();
    let first = create_task(&app, "first", project_id).await;
    let second = create_task(&app, "second", project_id).await;

    let response = get(&app, "/api/tasks").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["count"], 2);
    assert_eq!(json["data"][0]["id"], second["id"]);
    assert_eq!(json["data"][1]["id"], first["id"]);
}

#[tokio::test]
async fn list_by_project_filters_tasks() {
    let (app, _) = common::build_test_app();
    let project = create_project(&app, "P").await;
    let other = create_project(&app, "Q").await;
    let project_id = project["id"].as_str().unwrap();
    create_task(&app, "mine", project_id).await;
    create_task(&app, "theirs", other["id"].as_str().unwrap()).await;

    let json = body_json(get(&app, &format!("/api/tasks/project/{project_id}")).await).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["count"], 1);
    assert_eq!(json["data"][0]["title"], "mine");
}

#[tokio::test]
async fn list_by_project_without_tasks_is_empty() {
    let (app, _) = common::build_test_app();
    let project = create_project(&app, "Empty").await;
    let project_id = project["id"].as_str().unwrap();

    let response = get(&app, &format!("/api/tasks/project/{project_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({"success": true, "count": 0, "data": []})
    );
}

#[tokio::test]
async fn list_by_project_with_malformed_id_is_empty() {
    let (app, _) = common::build_test_app();
    let response = get(&app, "/api/tasks/project/nope").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["count"], 0);
    assert_eq!(json["data"], serde_json::json!([]));
}

#[tokio::test]
async fn get_task_by_id() {
    let (app, _) = common::build_test_app();
    let task = create_task(&app, "Find me", &uuid::Uuid::new_v4().to_string()).await;
    let id = task["id"].as_str().unwrap();

    let response = get(&app, &format!("/api/tasks/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"], task);
}

#[tokio::test]
async fn get_nonexistent_task_returns_404() {
    let (app, _) = common::build_test_app();
    let id = uuid::Uuid::new_v4();
    let response = get(&app, &format!("/api/tasks/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({"success": false, "message": "Task not found"})
    );

    let response = get(&app, "/api/tasks/garbage").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_task_status() {
    let (app, _) = common::build_test_app();
    let task = create_task(&app, "Move me", &uuid::Uuid::new_v4().to_string()).await;
    let id = task["id"].as_str().unwrap();

    let response = put_json(
        &app,
        &format!("/api/tasks/{id}"),
        serde_json::json!({"status": "in-progress", "description": "started"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "in-progress");
    assert_eq!(json["data"]["description"], "started");
    assert_eq!(json["data"]["title"], "Move me");
    assert_eq!(json["data"]["projectId"], task["projectId"]);
}

#[tokio::test]
async fn update_task_null_project_id_detaches_it() {
    let (app, _) = common::build_test_app();
    let task = create_task(&app, "Detach", &uuid::Uuid::new_v4().to_string()).await;
    let id = task["id"].as_str().unwrap();

    let response = put_json(
        &app,
        &format!("/api/tasks/{id}"),
        serde_json::json!({"projectId": null}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await["data"]["projectId"].is_null());
}

#[tokio::test]
async fn update_task_with_unknown_status_returns_400() {
    let (app, _) = common::build_test_app();
    let task = create_task(&app, "T", &uuid::Uuid::new_v4().to_string()).await;
    let id = task["id"].as_str().unwrap();

    let response = put_json(
        &app,
        &format!("/api/tasks/{id}"),
        serde_json::json!({"status": "completed"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["message"],
        "`completed` is not a valid enum value for path `status`."
    );

    let json = body_json(get(&app, &format!("/api/tasks/{id}")).await).await;
    assert_eq!(json["data"]["status"], "todo");
}

#[tokio::test]
async fn update_nonexistent_task_returns_404() {
    let (app, _) = common::build_test_app();
    let id = uuid::Uuid::new_v4();
    let response = put_json(
        &app,
        &format!("/api/tasks/{id}"),
        serde_json::json!({"status": "done"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "Task not found");
}

#[tokio::test]
async fn delete_task_then_gone() {
    let (app, _) = common::build_test_app();
    let project = create_project(&app, "P").await;
    let project_id = project["id"].as_str().unwrap();
    let task = create_task(&app, "Bye", project_id).await;
    let id = task["id"].as_str().unwrap();

    let response = delete(&app, &format!("/api/tasks/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({"success": true, "data": {}})
    );

    let response = delete(&app, &format!("/api/tasks/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(get(&app, &format!("/api/projects/{project_id}")).await).await;
    assert_eq!(json["data"]["taskCount"], 0);
}
