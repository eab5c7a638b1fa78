//! Users API calls made by the auth pages.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): no transport exists; submit handlers only run in the
//! browser, so nothing here is reachable during rendering.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::submit::{FormKind, Navigator, SubmitOutcome, Transport, submit_json};
#[cfg(feature = "hydrate")]
use super::submit::TransportError;
use crate::state::forms::{Credentials, RegistrationInput};

/// Users collection on the dev API. Login and registration both post here.
pub const USERS_ENDPOINT: &str = "https://api.dev.splitter.mriyam.com/v1/users";

/// Browser `fetch` transport.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[cfg(feature = "hydrate")]
impl Transport for BrowserTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<u16, TransportError> {
        let resp = gloo_net::http::Request::post(url)
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|e| TransportError(e.to_string()))?
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;
        Ok(resp.status())
    }
}

/// Submit the login form to the users endpoint.
pub async fn submit_login<T, N>(form: &Credentials, transport: &T, navigator: &N) -> SubmitOutcome
where
    T: Transport,
    N: Navigator,
{
    submit_json(FormKind::Login, USERS_ENDPOINT, form, transport, navigator).await
}

/// Submit the register form to the users endpoint.
pub async fn submit_register<T, N>(
    form: &RegistrationInput,
    transport: &T,
    navigator: &N,
) -> SubmitOutcome
where
    T: Transport,
    N: Navigator,
{
    submit_json(FormKind::Register, USERS_ENDPOINT, form, transport, navigator).await
}
