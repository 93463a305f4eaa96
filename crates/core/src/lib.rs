//! Domain layer for the movies API: record types, payload validation, the
//! in-memory store and the cross-origin allow-list. No HTTP dependencies.

pub mod error;
pub mod movie;
pub mod origin;
pub mod schema;
pub mod store;
