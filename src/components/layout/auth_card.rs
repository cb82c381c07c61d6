//! Centered card used by the login and register pages.

use leptos::prelude::*;

/// Background image served from the site root.
const BACKGROUND_URL: &str = "/bg.jpg";

#[component]
pub fn AuthCard(title: &'static str, children: Children) -> impl IntoView {
    let style = format!(
        "background-image: url({BACKGROUND_URL}); background-size: cover; background-position: center; background-repeat: no-repeat;"
    );

    view! {
        <div class="flex items-center justify-center h-screen px-4" style=style>
            <div class="w-full max-w-sm p-10 shadow-xl rounded-2xl bg-white border-0 transition-all duration-300 hover:shadow-pink-300/50">
                <h1 class="text-4xl font-extrabold mb-10 text-center text-pink-700 tracking-tight">
                    {title}
                </h1>
                {children()}
            </div>
        </div>
    }
}
