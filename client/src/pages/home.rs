//! Landing page linking to the two auth forms.

use leptos::prelude::*;

use crate::app::{LOGIN_PATH, REGISTER_PATH};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"Splitter"</h1>
            <div class="home-page__actions">
                <a href=LOGIN_PATH class="button button--primary">
                    "Sign In"
                </a>
                <a href=REGISTER_PATH class="button button--secondary">
                    "Sign Up"
                </a>
            </div>
        </div>
    }
}
