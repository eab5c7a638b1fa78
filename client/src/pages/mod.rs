//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its view state and submit handler. Pages share nothing;
//! the only hand-off between them is navigation.

pub mod home;
pub mod login;
pub mod register;
