//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod completion_repo;
pub mod funeral_home_repo;
pub mod funeral_repo;
pub mod notice_repo;

pub use completion_repo::CompletionRepo;
pub use funeral_home_repo::FuneralHomeRepo;
pub use funeral_repo::FuneralRepo;
pub use notice_repo::NoticeRepo;
