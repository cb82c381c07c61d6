//! Inline error banner for form failures. Messages come from the API or fixed
//! fallbacks and must never include passwords or tokens.

use leptos::prelude::*;

#[component]
pub fn Alert(message: String) -> impl IntoView {
    view! {
        <p class="text-red-500 text-xs text-center animate-pulse" role="alert">
            {message}
        </p>
    }
}
