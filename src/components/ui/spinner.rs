use leptos::prelude::*;

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div
            class="mx-auto h-6 w-6 animate-spin rounded-full border-4 border-pink-200 border-t-pink-600"
            role="status"
            aria-live="polite"
            aria-label="Submitting"
        ></div>
    }
}
