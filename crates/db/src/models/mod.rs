//! Entity models and DTOs, one module per table.

pub mod session;
pub mod translation;
pub mod user;
