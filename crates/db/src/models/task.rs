//! Task entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tracker_core::status::TaskStatus;
use tracker_core::task::{check_description, check_project_id, check_title};
use tracker_core::types::{DbId, Timestamp};
use tracker_core::validation::{self, trimmed, ValidationErrors};

use super::double_option;

/// A row from the `tasks` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    #[sqlx(try_from = "String")]
    pub status: TaskStatus,
    /// Owning project. Not checked against `projects`.
    pub project_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for creating a task.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTask {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Defaults to `todo` when missing or empty.
    pub status: Option<String>,
    pub project_id: Option<String>,
}

/// A validated task ready to insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub project_id: Option<DbId>,
}

impl CreateTask {
    pub fn validate(self) -> Result<NewTask, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let title = trimmed(self.title);
        let title = check_title(&mut errors, title.as_deref()).map(str::to_owned);

        let description = trimmed(self.description);
        if let Some(description) = description.as_deref() {
            check_description(&mut errors, description);
        }

        let status = match self.status.as_deref() {
            None | Some("") => Some(TaskStatus::default()),
            Some(raw) => validation::status(&mut errors, raw),
        };

        let project_id = match trimmed(self.project_id).as_deref() {
            None | Some("") => None,
            Some(raw) => check_project_id(&mut errors, raw),
        };

        match (title, status) {
            (Some(title), Some(status)) => errors.finish(NewTask {
                title,
                description,
                status,
                project_id,
            }),
            _ => Err(errors),
        }
    }
}

/// Request body for updating a task.
///
/// Absent fields keep their stored value. An explicit `null` for
/// `description` or `projectId` clears it; `null` for `title` or `status`
/// is treated as absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTask {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub project_id: Option<Option<String>>,
}

/// A validated set of task changes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub status: Option<TaskStatus>,
    pub project_id: Option<Option<DbId>>,
}

impl UpdateTask {
    /// Validate only the supplied fields.
    pub fn validate(self) -> Result<TaskPatch, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let mut patch = TaskPatch::default();

        if let Some(title) = trimmed(self.title) {
            patch.title = check_title(&mut errors, Some(title.as_str())).map(str::to_owned);
        }

        if let Some(description) = self.description {
            let description = trimmed(description);
            if let Some(description) = description.as_deref() {
                check_description(&mut errors, description);
            }
            patch.description = Some(description);
        }

        if let Some(raw) = self.status.as_deref() {
            patch.status = validation::status(&mut errors, raw);
        }

        if let Some(project_id) = self.project_id {
            patch.project_id = match trimmed(project_id).as_deref() {
                None | Some("") => Some(None),
                Some(raw) => check_project_id(&mut errors, raw).map(Some),
            };
        }

        errors.finish(patch)
    }
}

impl TaskPatch {
    /// Merge the changes into `task`. Does not touch timestamps.
    pub fn apply_to(&self, task: &mut Task) {
        if let Some(title) = &self.title {
            task.title = title.clone();
        }
        if let Some(description) = &self.description {
            task.description = description.clone();
        }
        if let Some(status) = self.status {
            task.status = status;
        }
        if let Some(project_id) = self.project_id {
            task.project_id = project_id;
        }
    }
}
