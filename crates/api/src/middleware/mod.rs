//! Request extractors for authentication.
//!
//! - [`session::FuneralSession`] -- Requires signed funeral-home session cookies.
//! - [`admin::RequireAdmin`] -- Requires the admin API key as a Bearer token.

pub mod admin;
pub mod session;
