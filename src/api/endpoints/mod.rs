//! API endpoint handlers.

pub mod query;
pub mod service;
pub mod sessions;
