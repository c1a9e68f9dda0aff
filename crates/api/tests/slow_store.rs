//! A store whose calls are slow must still be answered with the normal
//! envelope; the server never cancels an in-flight request.

mod common;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::http::StatusCode;
use common::{body_json, get};
use tracker_api::router::build_app_router;
use tracker_api::state::AppState;
use tracker_core::types::DbId;
use tracker_db::models::project::{NewProject, Project, ProjectPatch};
use tracker_db::models::task::{NewTask, Task, TaskPatch};
use tracker_db::{MemoryStore, Store, StoreResult};

const DELAY: Duration = Duration::from_millis(1500);

/// Delegates to [`MemoryStore`], delaying every task listing.
struct SlowStore {
    inner: MemoryStore,
}

#[async_trait]
impl Store for SlowStore {
    async fn ping(&self) -> StoreResult<()> {
        self.inner.ping().await
    }

    async fn close(&self) {
        self.inner.close().await
    }

    async fn insert_project(&self, input: &NewProject) -> StoreResult<Project> {
        self.inner.insert_project(input).await
    }

    async fn list_projects(&self) -> StoreResult<Vec<Project>> {
        self.inner.list_projects().await
    }

    async fn find_project(&self, id: DbId) -> StoreResult<Option<Project>> {
        self.inner.find_project(id).await
    }

    async fn update_project(
        &self,
        id: DbId,
        patch: &ProjectPatch,
    ) -> StoreResult<Option<Project>> {
        self.inner.update_project(id, patch).await
    }

    async fn delete_project(&self, id: DbId) -> StoreResult<Option<Project>> {
        self.inner.delete_project(id).await
    }

    async fn count_tasks_for_project(&self, project_id: DbId) -> StoreResult<i64> {
        self.inner.count_tasks_for_project(project_id).await
    }

    async fn insert_task(&self, input: &NewTask) -> StoreResult<Task> {
        self.inner.insert_task(input).await
    }

    async fn list_tasks(&self) -> StoreResult<Vec<Task>> {
        tokio::time::sleep(DELAY).await;
        self.inner.list_tasks().await
    }

    async fn list_tasks_by_project(&self, project_id: DbId) -> StoreResult<Vec<Task>> {
        self.inner.list_tasks_by_project(project_id).await
    }

    async fn find_task(&self, id: DbId) -> StoreResult<Option<Task>> {
        self.inner.find_task(id).await
    }

    async fn update_task(&self, id: DbId, patch: &TaskPatch) -> StoreResult<Option<Task>> {
        self.inner.update_task(id, patch).await
    }

    async fn delete_task(&self, id: DbId) -> StoreResult<Option<Task>> {
        self.inner.delete_task(id).await
    }
}

#[tokio::test]
async fn slow_listing_completes_with_envelope() {
    let state = AppState {
        store: Arc::new(SlowStore {
            inner: MemoryStore::new(),
        }),
        config: Arc::new(common::test_config()),
    };
    let app = build_app_router(state);

    let response = get(&app, "/api/tasks").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({"success": true, "count": 0, "data": []})
    );
}
