//! Networking for the auth forms.
//!
//! SYSTEM CONTEXT
//! ==============
//! `submit` owns the post-then-navigate flow behind `Transport`/`Navigator`
//! traits; `api` binds it to the users endpoint and the browser `fetch`.

pub mod api;
pub mod submit;
