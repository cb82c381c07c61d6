//! # Tokenboard
//!
//! Client-rendered login, registration, and dashboard pages for an external
//! authentication API that issues bearer tokens.
//!
//! ## Session Model
//!
//! A successful login stores the issued token in a browser-session-scoped
//! [`TokenStore`](features::auth::store::TokenStore). Pages never reach for
//! storage directly; they go through the injected
//! [`SessionContext`](features::auth::store::SessionContext) so tests can swap in
//! an in-memory store.
//!
//! ## Capability Boundary
//!
//! The dashboard decodes the token payload to greet the user. Decoding performs
//! **no signature verification**: decoded claims are display-only and must never
//! drive an access-control decision. Authorization stays on the API.
//!
//! The platform-neutral pieces (store contract, decoder, submit flows, view
//! state, configuration) build on any target. Components, routes, and browser
//! bindings only build for `wasm32`.

pub mod app_lib;
pub mod features;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod routes;

/// Installs the console subscriber and panic hook, then mounts the app.
#[cfg(target_arch = "wasm32")]
pub fn mount() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    tracing::debug!(commit = app_lib::build_info::git_commit_hash(), "mounting app");
    leptos::prelude::mount_to_body(app::App);
}
