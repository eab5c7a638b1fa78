//! Client-side view state.
//!
//! Pages own their state directly; nothing here is shared between routes.

pub mod forms;
