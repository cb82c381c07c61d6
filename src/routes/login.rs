//! Login route. Posts the entered credentials once per submit, stores the
//! issued token in the session context, and moves on to the dashboard. Field
//! rules are left to the API.

use crate::{
    app_lib::paths,
    components::{Alert, AuthCard, Button, Spinner},
    features::auth::{client::HttpAuthApi, flow, state::use_session, types::Credentials},
};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::{components::A, hooks::use_navigate};

const INPUT_CLASS: &str = "w-full rounded-lg bg-white border border-gray-200 text-gray-800 placeholder-gray-400 focus:border-pink-500 focus:ring-2 focus:ring-pink-500/40 transition-all text-base px-3 py-4";
const LINK_CLASS: &str = "text-sm text-pink-600 hover:text-pink-700 transition-colors";

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let login_action = Action::new_local(move |input: &Credentials| {
        let input = input.clone();
        let session = session.clone();
        async move {
            let api = HttpAuthApi::from_config();
            flow::submit_login(&api, &session, &input).await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(path) => navigate(path, Default::default()),
                Err(message) => set_error.set(Some(message)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        login_action.dispatch(Credentials::new(
            username.get_untracked(),
            password.get_untracked(),
        ));
    };

    view! {
        <AuthCard title="Welcome Back">
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
                    autocomplete="current-password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |event| set_password.set(event_target_value(&event))
                />
                {move || error.get().map(|message| view! { <Alert message=message /> })}
                <Button button_type="submit" disabled=login_action.pending()>
                    "Log In"
                </Button>
                {move || {
                    login_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="mt-4"><Spinner /></div> })
                }}
            </form>

            <div class="mt-8 flex justify-between text-center">
                <A href=paths::REGISTER {..} class=LINK_CLASS>
                    "Create an account"
                </A>
                <A href=paths::FORGOT_PASSWORD {..} class=LINK_CLASS>
                    "Forgot password?"
                </A>
            </div>
        </AuthCard>
    }
}
