//! Register page: name and email posted to the users API.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[cfg(feature = "hydrate")]
use crate::net::api::{BrowserTransport, submit_register};
use crate::state::forms::RegistrationInput;
#[cfg(feature = "hydrate")]
use crate::util::navigation::RouterNavigator;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let form = RwSignal::new(RegistrationInput::default());
    // Only the browser build submits; SSR renders the form and stops there.
    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    let navigate = use_navigate();

    // Not guarded against double submission; each submit posts again.
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        #[cfg(feature = "hydrate")]
        {
            let input = form.get_untracked();
            let navigator = RouterNavigator::new(navigate.clone());
            leptos::task::spawn_local(async move {
                // Outcome is ignored: the page shows no feedback on rejection or failure.
                submit_register(&input, &BrowserTransport, &navigator).await;
            });
        }
    };

    view! {
        <div class="auth-page">
            <h1>"Register"</h1>
            <form class="auth-form" on:submit=on_submit>
                <input
                    class="auth-input"
                    type="text"
                    placeholder="Name"
                    required=true
                    prop:value=move || form.get().name
                    on:input=move |ev| {
                        form.set(form.get_untracked().with_name(event_target_value(&ev)));
                    }
                />
                <input
                    class="auth-input"
                    type="email"
                    placeholder="Email"
                    required=true
                    prop:value=move || form.get().email
                    on:input=move |ev| {
                        form.set(form.get_untracked().with_email(event_target_value(&ev)));
                    }
                />
                <button class="button button--primary" type="submit">
                    "Register"
                </button>
            </form>
        </div>
    }
}
