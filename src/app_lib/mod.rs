//! Shared frontend utilities for API access, configuration, errors, and build
//! metadata. Feature modules build on these helpers so request setup and error
//! shaping stay in one place. Nothing here stores credentials; callers must
//! still avoid logging request bodies.

pub mod api;
pub mod build_info;
pub mod config;
pub mod errors;
pub mod paths;

pub use errors::AppError;
