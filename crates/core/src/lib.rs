//! Shared domain types and errors for the anubad translation service.

pub mod error;
pub mod types;
