//! Dashboard route. Reads the stored token once, greets the user with the
//! decoded username, and offers reveal and copy controls for the raw token.
//! Decoded claims are unverified and only ever rendered, never trusted.

use crate::{
    app_lib::{build_info, paths},
    features::{
        auth::state::use_session,
        dashboard::view::{CARDS, DashboardView, FOOTER_TEXT, TokenReveal},
    },
};
use leptos::{prelude::*, task::spawn_local};
use leptos_router::hooks::use_navigate;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let dashboard = DashboardView::from_token(session.token());
    let (reveal, set_reveal) = signal(TokenReveal::default());

    let greeting = dashboard.greeting();
    let role_line = dashboard.role.clone().map(|role| {
        view! { <p class="-mt-8 mb-10 text-sm text-neutral-500 dark:text-neutral-400">"Role: " {role}</p> }
    });

    let token_section = dashboard.token.clone().map(|token| {
        let shown = token.clone();
        view! {
            <section class="mb-10 p-6 rounded-xl bg-white dark:bg-neutral-800 shadow-lg border border-neutral-200 dark:border-neutral-700">
                <p class="text-sm text-neutral-600 dark:text-neutral-400 mb-3 font-medium">
                    "Your Bearer Token:"
                </p>
                <div class="flex items-center gap-3 mb-3 flex-wrap">
                    <button
                        type="button"
                        class="text-xs px-3 py-1 rounded-md bg-gray-200 hover:bg-gray-300 dark:bg-gray-700 dark:hover:bg-gray-600 text-green-600 font-semibold transition"
                        on:click=move |_| set_reveal.update(|state| *state = state.toggled())
                    >
                        {move || reveal.get().toggle_label()}
                    </button>
                    <button
                        type="button"
                        class="text-xs px-3 py-1 rounded-md bg-green-600 hover:bg-green-700 text-white font-semibold transition"
                        on:click=move |_| copy_to_clipboard(&token)
                    >
                        "Copy"
                    </button>
                </div>
                <p class="bg-gray-100 text-neutral-800 dark:bg-gray-700 dark:text-neutral-200 p-4 rounded-md break-words text-xs w-full max-w-full font-mono">
                    {move || reveal.get().render(&shown)}
                </p>
            </section>
        }
    });

    let cards = CARDS
        .iter()
        .map(|card| {
            view! {
                <div class="p-6 rounded-xl bg-white dark:bg-neutral-800 shadow-lg border border-neutral-200 dark:border-neutral-700 transition-all hover:-translate-y-1">
                    <h2 class="text-xl font-bold mb-2 text-neutral-800 dark:text-white">
                        {card.title}
                    </h2>
                    <p class="text-neutral-600 dark:text-neutral-400 text-sm">{card.description}</p>
                </div>
            }
        })
        .collect_view();

    let sign_out = move |_| {
        session.clear();
        navigate(paths::LOGIN, Default::default());
    };

    view! {
        <div class="min-h-screen bg-gray-100 dark:bg-neutral-900 p-6 font-sans">
            <div class="flex items-start justify-between">
                <h1 class="text-4xl font-extrabold mb-10 text-green-600 dark:text-green-400 tracking-wide">
                    {greeting}
                </h1>
                <button
                    type="button"
                    class="text-sm px-4 py-2 rounded-md border border-neutral-300 dark:border-neutral-600 text-neutral-700 dark:text-neutral-200 hover:bg-neutral-200 dark:hover:bg-neutral-800 transition"
                    on:click=sign_out
                >
                    "Sign out"
                </button>
            </div>
            {role_line}
            {token_section}
            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">{cards}</div>
            <footer class="mt-12 text-center text-xs text-neutral-400">
                <p>{FOOTER_TEXT}</p>
                <p class="mt-1 font-mono">"build " {build_info::git_commit_hash()}</p>
            </footer>
        </div>
    }
}

/// Writes the token to the clipboard. No confirmation is shown either way.
fn copy_to_clipboard(text: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let promise = window.navigator().clipboard().write_text(text);
    spawn_local(async move {
        if wasm_bindgen_futures::JsFuture::from(promise).await.is_err() {
            tracing::warn!("clipboard write was rejected");
        }
    });
}
