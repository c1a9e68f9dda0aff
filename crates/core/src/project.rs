//! Project field rules.

use crate::validation::{self, ValidationErrors};

/// Maximum project title length in characters.
pub const MAX_TITLE_LENGTH: usize = 100;

/// Maximum project description length in characters.
pub const MAX_DESCRIPTION_LENGTH: usize = 500;

pub const TITLE_REQUIRED: &str = "Project title is required";
pub const TITLE_TOO_LONG: &str = "Project title cannot exceed 100 characters";
pub const DESCRIPTION_TOO_LONG: &str = "Description cannot exceed 500 characters";

/// Check an already-trimmed title. Returns it when valid.
pub fn check_title<'a>(errors: &mut ValidationErrors, title: Option<&'a str>) -> Option<&'a str> {
    let title = validation::require(errors, "title", title, TITLE_REQUIRED)?;
    let before = errors.violations().len();
    validation::max_chars(errors, "title", title, MAX_TITLE_LENGTH, TITLE_TOO_LONG);
    (errors.violations().len() == before).then_some(title)
}

/// Check an already-trimmed description.
pub fn check_description(errors: &mut ValidationErrors, description: &str) {
    validation::max_chars(
        errors,
        "description",
        description,
        MAX_DESCRIPTION_LENGTH,
        DESCRIPTION_TOO_LONG,
    );
}
