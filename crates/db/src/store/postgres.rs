//! PostgreSQL-backed [`Store`].

use async_trait::async_trait;
use tracker_core::types::DbId;

use crate::error::StoreResult;
use crate::models::project::{NewProject, Project, ProjectPatch};
use crate::models::task::{NewTask, Task, TaskPatch};
use crate::repositories::{ProjectRepo, TaskRepo};
use crate::store::Store;
use crate::DbPool;

/// Store handle wrapping a `sqlx` connection pool.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    /// Connect, verify the connection and apply pending migrations.
    ///
    /// Any failure here is meant to abort process startup.
    pub async fn connect(database_url: &str) -> StoreResult<Self> {
        let pool = crate::create_pool(database_url).await?;
        tracing::info!("Database connection pool created");

        crate::health_check(&pool).await?;
        tracing::info!("Database health check passed");

        crate::run_migrations(&pool).await?;
        tracing::info!("Database migrations applied");

        Ok(Self { pool })
    }

    /// Wrap an existing pool. Migrations are assumed to be applied.
    pub fn from_pool(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl Store for PgStore {
    async fn ping(&self) -> StoreResult<()> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }

    async fn close(&self) {
        if !self.pool.is_closed() {
            self.pool.close().await;
            tracing::info!("Database connection pool closed");
        }
    }

    async fn insert_project(&self, input: &NewProject) -> StoreResult<Project> {
        Ok(ProjectRepo::create(&self.pool, input).await?)
    }

    async fn list_projects(&self) -> StoreResult<Vec<Project>> {
        Ok(ProjectRepo::list(&self.pool).await?)
    }

    async fn find_project(&self, id: DbId) -> StoreResult<Option<Project>> {
        Ok(ProjectRepo::find_by_id(&self.pool, id).await?)
    }

    async fn update_project(
        &self,
        id: DbId,
        patch: &ProjectPatch,
    ) -> StoreResult<Option<Project>> {
        Ok(ProjectRepo::update(&self.pool, id, patch).await?)
    }

    async fn delete_project(&self, id: DbId) -> StoreResult<Option<Project>> {
        Ok(ProjectRepo::delete(&self.pool, id).await?)
    }

    async fn count_tasks_for_project(&self, project_id: DbId) -> StoreResult<i64> {
        Ok(TaskRepo::count_by_project(&self.pool, project_id).await?)
    }

    async fn insert_task(&self, input: &NewTask) -> StoreResult<Task> {
        Ok(TaskRepo::create(&self.pool, input).await?)
    }

    async fn list_tasks(&self) -> StoreResult<Vec<Task>> {
        Ok(TaskRepo::list(&self.pool).await?)
    }

    async fn list_tasks_by_project(&self, project_id: DbId) -> StoreResult<Vec<Task>> {
        Ok(TaskRepo::list_by_project(&self.pool, project_id).await?)
    }

    async fn find_task(&self, id: DbId) -> StoreResult<Option<Task>> {
        Ok(TaskRepo::find_by_id(&self.pool, id).await?)
    }

    async fn update_task(&self, id: DbId, patch: &TaskPatch) -> StoreResult<Option<Task>> {
        Ok(TaskRepo::update(&self.pool, id, patch).await?)
    }

    async fn delete_task(&self, id: DbId) -> StoreResult<Option<Task>> {
        Ok(TaskRepo::delete(&self.pool, id).await?)
    }
}
