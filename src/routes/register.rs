//! Registration route. Posts the entered credentials once per submit and sends
//! the user to the login page on success. Nothing is written to the session.

use crate::{
    app_lib::paths,
    components::{Alert, AuthCard, Button, Spinner},
    features::auth::{client::HttpAuthApi, flow, types::Credentials},
};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::{components::A, hooks::use_navigate};

const INPUT_CLASS: &str = "w-full rounded-lg bg-white border border-gray-200 text-gray-800 placeholder-gray-400 focus:border-pink-500 focus:ring-2 focus:ring-pink-500/40 transition-all text-base px-3 py-4";
const LINK_CLASS: &str = "text-sm text-pink-600 hover:text-pink-700 transition-colors";

#[component]
pub fn RegisterPage() -> impl IntoView {
    let navigate = use_navigate();
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let register_action = Action::new_local(move |input: &Credentials| {
        let input = input.clone();
        async move {
            let api = HttpAuthApi::from_config();
            flow::submit_register(&api, &input).await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = register_action.value().get() {
            match result {
                Ok(path) => navigate(path, Default::default()),
                Err(message) => set_error.set(Some(message)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        register_action.dispatch(Credentials::new(
            username.get_untracked(),
            password.get_untracked(),
        ));
    };

    view! {
        <AuthCard title="Create Account">
            <form class="space-y-6" on:submit=on_submit>
                <input
                    id="username"
                    type="text"
                    class=INPUT_CLASS
                    autocomplete="username"
                    placeholder="Username"
                    prop:value=move || username.get()
                    on:input=move |event| set_username.set(event_target_value(&event))
                />
                <input
                    id="password"
                    type="password"
                    class=INPUT_CLASS
                    autocomplete="new-password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |event| set_password.set(event_target_value(&event))
                />
                {move || error.get().map(|message| view! { <Alert message=message /> })}
                <Button button_type="submit" disabled=register_action.pending()>
                    "Register"
                </Button>
                {move || {
                    register_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="mt-4"><Spinner /></div> })
                }}
            </form>

            <div class="mt-8 text-center">
                <A href=paths::LOGIN {..} class=LINK_CLASS>
                    "← Back to Login"
                </A>
            </div>
        </AuthCard>
    }
}
