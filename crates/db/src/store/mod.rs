//! The store handle used by the HTTP layer.
//!
//! Handlers never touch a connection pool directly; they go through an
//! explicitly constructed [`Store`] held in application state. Tests use
//! [`MemoryStore`].
//!
//! [`MemoryStore`]: memory::MemoryStore

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use tracker_core::types::DbId;

use crate::error::StoreResult;
use crate::models::project::{NewProject, Project, ProjectPatch};
use crate::models::task::{NewTask, Task, TaskPatch};

/// Persistence primitives for projects and tasks.
///
/// Listing operations return records newest first. Deletes return the
/// removed record, or `None` when nothing matched. No operation enforces a
/// relation between tasks and projects.
#[async_trait]
pub trait Store: Send + Sync {
    /// Check that the backing store is reachable.
    async fn ping(&self) -> StoreResult<()>;

    /// Release the underlying resources. Safe to call more than once.
    async fn close(&self);

    // -- Projects --------------------------------------------------------

    async fn insert_project(&self, input: &NewProject) -> StoreResult<Project>;

    async fn list_projects(&self) -> StoreResult<Vec<Project>>;

    async fn find_project(&self, id: DbId) -> StoreResult<Option<Project>>;

    async fn update_project(&self, id: DbId, patch: &ProjectPatch)
        -> StoreResult<Option<Project>>;

    async fn delete_project(&self, id: DbId) -> StoreResult<Option<Project>>;

    /// Number of tasks whose `project_id` equals `project_id`.
    async fn count_tasks_for_project(&self, project_id: DbId) -> StoreResult<i64>;

    // -- Tasks -----------------------------------------------------------

    async fn insert_task(&self, input: &NewTask) -> StoreResult<Task>;

    async fn list_tasks(&self) -> StoreResult<Vec<Task>>;

    async fn list_tasks_by_project(&self, project_id: DbId) -> StoreResult<Vec<Task>>;

    async fn find_task(&self, id: DbId) -> StoreResult<Option<Task>>;

    async fn update_task(&self, id: DbId, patch: &TaskPatch) -> StoreResult<Option<Task>>;

    async fn delete_task(&self, id: DbId) -> StoreResult<Option<Task>>;
}
