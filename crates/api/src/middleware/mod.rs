//! Extractors and response middleware.
//!
//! - [`json::ValidJson`] -- JSON body extractor reporting failures in the envelope.
//! - [`error_detail::expose_error_detail`] -- adds failure detail in development.
//! - [`panic::handle_panic`] -- turns handler panics into a 500 envelope.

pub mod error_detail;
pub mod json;
pub mod panic;
