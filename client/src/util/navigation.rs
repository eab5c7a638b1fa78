//! Router-backed [`Navigator`].
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages obtain the navigate closure from `use_navigate()` while rendering
//! and wrap it here so the submit flow can change routes after an await.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use leptos_router::NavigateOptions;

use crate::net::submit::Navigator;

/// Adapts a `leptos_router` navigate function to [`Navigator`].
#[derive(Clone)]
pub struct RouterNavigator<F> {
    navigate: F,
}

impl<F> RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    pub fn new(navigate: F) -> Self {
        Self { navigate }
    }
}

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    fn navigate(&self, path: &str) {
        (self.navigate)(path, NavigateOptions::default());
    }
}
