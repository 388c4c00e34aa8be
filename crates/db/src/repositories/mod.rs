//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that accept
//! `&PgPool` (or any Postgres executor, when the call must also run inside a
//! transaction) as the first argument.

pub mod client_repo;
pub mod desk_repo;
pub mod group_repo;
pub mod queue_entry_repo;
pub mod queue_repo;
pub mod service_repo;

pub use client_repo::ClientRepo;
pub use desk_repo::DeskRepo;
pub use group_repo::GroupRepo;
pub use queue_entry_repo::QueueEntryRepo;
pub use queue_repo::QueueRepo;
pub use service_repo::ServiceRepo;
