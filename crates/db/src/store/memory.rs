//! In-process [`Store`] used by tests and local runs without a database.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracker_core::types::{DbId, Timestamp};

use crate::error::{StoreError, StoreResult};
use crate::models::project::{NewProject, Project, ProjectPatch};
use crate::models::task::{NewTask, Task, TaskPatch};
use crate::store::Store;

/// Records are kept in insertion order; listings are sorted newest first.
#[derive(Default)]
pub struct MemoryStore {
    projects: RwLock<Vec<Project>>,
    tasks: RwLock<Vec<Task>>,
    closed: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_open(&self) -> StoreResult<()> {
        if self.closed.load(Ordering::Acquire) {
            Err(StoreError::Closed)
        } else {
            Ok(())
        }
    }
}

/// Newest first. Ties keep reverse insertion order.
fn newest_first<T: Clone>(items: &[T], created_at: impl Fn(&T) -> Timestamp) -> Vec<T> {
    let mut out: Vec<T> = items.iter().rev().cloned().collect();
    out.sort_by(|a, b| created_at(b).cmp(&created_at(a)));
    out
}

#[async_trait]
impl Store for MemoryStore {
    async fn ping(&self) -> StoreResult<()> {
        self.ensure_open()
    }

    async fn close(&self) {
        self.closed.store(true, Ordering::Release);
    }

    async fn insert_project(&self, input: &NewProject) -> StoreResult<Project> {
        self.ensure_open()?;
        let now = chrono::Utc::now();
        let project = Project {
            id: uuid::Uuid::now_v7(),
            title: input.title.clone(),
            description: input.description.clone(),
            status: input.status,
            created_at: now,
            updated_at: now,
        };
        self.projects.write().await.push(project.clone());
        Ok(project)
    }

    async fn list_projects(&self) -> StoreResult<Vec<Project>> {
        self.ensure_open()?;
        Ok(newest_first(self.projects.read().await.as_slice(), |p| p.created_at))
    }

    async fn find_project(&self, id: DbId) -> StoreResult<Option<Project>> {
        self.ensure_open()?;
        Ok(self.projects.read().await.iter().find(|p| p.id == id).cloned())
    }

    async fn update_project(
        &self,
        id: DbId,
        patch: &ProjectPatch,
    ) -> StoreResult<Option<Project>> {
        self.ensure_open()?;
        let mut projects = self.projects.write().await;
        Ok(projects.iter_mut().find(|p| p.id == id).map(|project| {
            patch.apply_to(project);
            project.updated_at = chrono::Utc::now();
            project.clone()
        }))
    }

    async fn delete_project(&self, id: DbId) -> StoreResult<Option<Project>> {
        self.ensure_open()?;
        let mut projects = self.projects.write().await;
        Ok(projects
            .iter()
            .position(|p| p.id == id)
            .map(|index| projects.remove(index)))
    }

    async fn count_tasks_for_project(&self, project_id: DbId) -> StoreResult<i64> {
        self.ensure_open()?;
        let count = self
            .tasks
            .read()
            .await
            .iter()
            .filter(|t| t.project_id == Some(project_id))
            .count();
        Ok(count as i64)
    }

    async fn insert_task(&self, input: &NewTask) -> StoreResult<Task> {
        self.ensure_open()?;
        let now = chrono::Utc::now();
        let task = Task {
            id: uuid::Uuid::now_v7(),
            title: input.title.clone(),
            description: input.description.clone(),
            status: input.status,
            project_id: input.project_id,
            created_at: now,
            updated_at: now,
        };
        self.tasks.write().await.push(task.clone());
        Ok(task)
    }

    async fn list_tasks(&self) -> StoreResult<Vec<Task>> {
        self.ensure_open()?;
        Ok(newest_first(self.tasks.read().await.as_slice(), |t| t.created_at))
    }

    async fn list_tasks_by_project(&self, project_id: DbId) -> StoreResult<Vec<Task>> {
        self.ensure_open()?;
        let tasks = self.tasks.read().await;
        let owned: Vec<Task> = tasks
            .iter()
            .filter(|t| t.project_id == Some(project_id))
            .cloned()
            .collect();
        Ok(newest_first(owned.as_slice(), |t| t.created_at))
    }

    async fn find_task(&self, id: DbId) -> StoreResult<Option<Task>> {
        self.ensure_open()?;
        Ok(self.tasks.read().await.iter().find(|t| t.id == id).cloned())
    }

    async fn update_task(&self, id: DbId, patch: &TaskPatch) -> StoreResult<Option<Task>> {
        self.ensure_open()?;
        let mut tasks = self.tasks.write().await;
        Ok(tasks.iter_mut().find(|t| t.id == id).map(|task| {
            patch.apply_to(task);
            task.updated_at = chrono::Utc::now();
            task.clone()
        }))
    }

    async fn delete_task(&self, id: DbId) -> StoreResult<Option<Task>> {
        self.ensure_open()?;
        let mut tasks = self.tasks.write().await;
        Ok(tasks
            .iter()
            .position(|t| t.id == id)
            .map(|index| tasks.remove(index)))
    }
}
