//! Domain types, constants, and validation for the flowerdesk platform.
//!
//! This crate has no I/O: everything here is pure logic shared by the
//! database layer, the HTTP server, and the command-line tools.

pub mod category;
pub mod completion;
pub mod diagnostics;
pub mod error;
pub mod funeral;
pub mod hashing;
pub mod notice;
pub mod password;
pub mod pagination;
pub mod session;
pub mod sms;
pub mod types;
