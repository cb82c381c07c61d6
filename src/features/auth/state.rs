//! Session context for the component tree. The provider picks the browser
//! store once on mount; pages read it through [`use_session`] instead of
//! touching storage themselves.

use crate::features::auth::store::SessionContext;
use leptos::prelude::*;

/// Provides the session context to all routes.
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    provide_context(SessionContext::browser());

    view! { {children()} }
}

/// Returns the current session context, or a fresh browser-backed one when no
/// provider is mounted.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(SessionContext::browser)
}
