//! Shared helpers: input limits and argument validation.

pub mod validation;
