//! HTTP handlers, one module per resource.

pub mod auth;
pub mod history;
pub mod pages;
pub mod translate;
