//! Domain types and pure validation logic for the project tracker.
//!
//! Nothing in this crate performs I/O; persistence lives in `tracker-db`
//! and the HTTP surface in `tracker-api`.

pub mod error;
pub mod project;
pub mod status;
pub mod task;
pub mod types;
pub mod validation;
