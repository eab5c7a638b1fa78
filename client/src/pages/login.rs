//! Login page: one email field posted to the users API.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[cfg(feature = "hydrate")]
use crate::net::api::{BrowserTransport, submit_login};
use crate::state::forms::Credentials;
#[cfg(feature = "hydrate")]
use crate::util::navigation::RouterNavigator;

/// Login form. A 2xx response navigates to the dashboard; any other result
/// leaves the page as it is.
#[component]
pub fn LoginPage() -> impl IntoView {
    let form = RwSignal::new(Credentials::default());
    // Only the browser build submits; SSR renders the form and stops there.
    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        #[cfg(feature = "hydrate")]
        {
            let credentials = form.get_untracked();
            let navigator = RouterNavigator::new(navigate.clone());
            leptos::task::spawn_local(async move {
                // Outcome is ignored: the page shows no feedback on rejection or failure.
                submit_login(&credentials, &BrowserTransport, &navigator).await;
            });
        }
    };

    view! {
        <div class="auth-page">
            <h1>"Login"</h1>
            <form class="auth-form" on:submit=on_submit>
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
                    "Login"
                </button>
            </form>
        </div>
    }
}
