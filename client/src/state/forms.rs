//! Per-page form view state.
//!
//! DESIGN
//! ======
//! Each page owns one of these in an `RwSignal` for the lifetime of the page
//! view. Edits build a fresh value and replace the signal contents, so the
//! value handed to the submit flow is never aliased by a later keystroke.
//! The same structs are the JSON request bodies.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use serde::{Deserialize, Serialize};

/// Login form state; serialized as `{"email": ...}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
}

impl Credentials {
    /// Replace the email field.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }
}

/// Register form state; serialized as `{"name": ..., "email": ...}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationInput {
    pub name: String,
    pub email: String,
}

impl RegistrationInput {
    /// Replace the name field, keeping the email.
    #[must_use]
    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self { name: name.into(), ..self }
    }

    /// Replace the email field, keeping the name.
    #[must_use]
    pub fn with_email(self, email: impl Into<String>) -> Self {
        Self { email: email.into(), ..self }
    }
}
