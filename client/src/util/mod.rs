//! Small page helpers that do not belong to a single route.

pub mod navigation;
