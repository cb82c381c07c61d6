//! Auth feature module covering credential submission, token storage, and
//! display-only token decoding. It keeps authentication logic out of the UI.
//! This module touches security boundaries and must avoid logging passwords or
//! token material.
//!
//! Flow Overview: Login posts credentials once, stores the issued token in the
//! session context, and sends the user to the dashboard. Register posts
//! credentials once and sends the user to the login page without storing
//! anything.

pub mod client;
pub mod flow;
#[cfg(target_arch = "wasm32")]
pub(crate) mod state;
pub mod store;
pub mod token;
pub mod types;
