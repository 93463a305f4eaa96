//! Request middleware.
//!
//! - [`origin::enforce_origin_policy`] -- Rejects browser requests from origins
//!   outside the configured allow-list before they reach any handler.

pub mod origin;
