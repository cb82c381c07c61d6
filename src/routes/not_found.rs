//! Fallback page for unknown routes.

use crate::app_lib::paths;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-screen text-center px-4 bg-gray-100 dark:bg-neutral-900">
            <h1 class="text-9xl font-black text-gray-200 dark:text-gray-800 select-none">"404"</h1>
            <p class="mt-4 text-2xl font-bold text-gray-900 dark:text-white">"Page not found"</p>
            <p class="mt-2 text-gray-500 dark:text-gray-400 max-w-sm">
                "The page you requested does not exist."
            </p>
            <A
                href=paths::LOGIN
                {..}
                class="mt-6 inline-flex items-center px-5 py-2.5 text-sm font-medium text-white bg-pink-600 rounded-full hover:bg-pink-700 transition-all"
            >
                "Back to Login"
            </A>
        </div>
    }
}
