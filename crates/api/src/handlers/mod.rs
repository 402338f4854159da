pub mod auth;
pub mod categories;
pub mod completions;
pub mod diagnostics;
pub mod funerals;
pub mod notices;
pub mod sms;
