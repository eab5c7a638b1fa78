//! Form submission flow shared by the login and register pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! A page's submit handler snapshots its view state and hands it here. The
//! body is serialized to JSON, posted once through a [`Transport`], and a
//! 2xx status navigates to the dashboard through a [`Navigator`]. Both seams
//! are traits so the flow runs under plain unit tests; the browser versions
//! live in `net::api` and `util::navigation`.
//!
//! ERROR HANDLING
//! ==============
//! Nothing is surfaced to the user. Transport and encoding failures are
//! logged once at error level; non-2xx statuses are logged at warn level and
//! otherwise ignored. The returned [`SubmitOutcome`] reports which path ran.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use serde::Serialize;

use crate::app::DASHBOARD_PATH;

/// Network-level failure: DNS, offline, CORS, aborted fetch.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Why a submission produced no HTTP status.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("could not encode request body: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("request failed: {0}")]
    Transport(#[from] TransportError),
}

/// Result of one submit, after logging and navigation have happened.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// 2xx response; navigated to the dashboard.
    Navigated,
    /// Non-2xx response; nothing else happened.
    Rejected(u16),
    /// No response; one diagnostic entry was logged.
    Failed(SubmitError),
}

/// Which form is submitting. Only used to label diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormKind {
    Login,
    Register,
}

impl FormKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Register => "Registration",
        }
    }
}

/// Sends a JSON body and reports the response status.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// POST `body` to `url` with `Content-Type: application/json`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when no response was received.
    async fn post_json(&self, url: &str, body: String) -> Result<u16, TransportError>;
}

/// Client-side route changes.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// Matches the fetch API's `Response.ok`.
#[must_use]
pub fn is_ok_status(status: u16) -> bool {
    (200..=299).contains(&status)
}

/// Serialize `body`, POST it to `url`, and navigate to the dashboard on 2xx.
///
/// Never panics and never returns an error to the caller; see the module
/// docs for what each failure path does.
pub async fn submit_json<B, T, N>(
    kind: FormKind,
    url: &str,
    body: &B,
    transport: &T,
    navigator: &N,
) -> SubmitOutcome
where
    B: Serialize + ?Sized,
    T: Transport,
    N: Navigator,
{
    let result = match serde_json::to_string(body) {
        Ok(payload) => transport.post_json(url, payload).await.map_err(SubmitError::from),
        Err(e) => Err(SubmitError::from(e)),
    };

    match result {
        Ok(status) if is_ok_status(status) => {
            navigator.navigate(DASHBOARD_PATH);
            SubmitOutcome::Navigated
        }
        Ok(status) => {
            // No user feedback on rejection; the console entry is the only trace.
            log::warn!("{} rejected: status {status}", kind.label());
            SubmitOutcome::Rejected(status)
        }
        Err(e) => {
            log::error!("{} failed: {e}", kind.label());
            SubmitOutcome::Failed(e)
        }
    }
}
