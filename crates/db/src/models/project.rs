//! Project entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tracker_core::project::{check_description, check_title};
use tracker_core::status::ProjectStatus;
use tracker_core::types::{DbId, Timestamp};
use tracker_core::validation::{self, trimmed, ValidationErrors};

use super::double_option;

/// A row from the `projects` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    #[sqlx(try_from = "String")]
    pub status: ProjectStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A project enriched with the number of tasks referencing it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectWithTaskCount {
    #[serde(flatten)]
    pub project: Project,
    pub task_count: i64,
}

/// Request body for creating a project.
///
/// Fields are deserialized leniently and checked by [`CreateProject::validate`]
/// so that every violation is reported at once.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateProject {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Defaults to `open` when missing or empty.
    pub status: Option<String>,
}

/// A validated project ready to insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProject {
    pub title: String,
    pub description: Option<String>,
    pub status: ProjectStatus,
}

impl CreateProject {
    pub fn validate(self) -> Result<NewProject, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let title = trimmed(self.title);
        let title = check_title(&mut errors, title.as_deref()).map(str::to_owned);

        let description = trimmed(self.description);
        if let Some(description) = description.as_deref() {
            check_description(&mut errors, description);
        }

        let status = match self.status.as_deref() {
            None | Some("") => Some(ProjectStatus::default()),
            Some(raw) => validation::status(&mut errors, raw),
        };

        match (title, status) {
            (Some(title), Some(status)) => errors.finish(NewProject {
                title,
                description,
                status,
            }),
            _ => Err(errors),
        }
    }
}

/// Request body for updating a project.
///
/// Absent fields keep their stored value. An explicit `null` description
/// clears it; `null` for `title` or `status` is treated as absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProject {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    #[serde(default)]
    pub status: Option<String>,
}

/// A validated set of project changes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub status: Option<ProjectStatus>,
}

impl UpdateProject {
    /// Validate only the supplied fields.
    pub fn validate(self) -> Result<ProjectPatch, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let mut patch = ProjectPatch::default();

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

        errors.finish(patch)
    }
}

impl ProjectPatch {
    /// Merge the changes into `project`. Does not touch timestamps.
    pub fn apply_to(&self, project: &mut Project) {
        if let Some(title) = &self.title {
            project.title = title.clone();
        }
        if let Some(description) = &self.description {
            project.description = description.clone();
        }
        if let Some(status) = self.status {
            project.status = status;
        }
    }
}
