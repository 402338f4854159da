//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create/save DTO for inserts
//! - An update DTO (all `Option` fields) where rows are patched

pub mod completion;
pub mod funeral;
pub mod funeral_home;
pub mod notice;
