//! Domain model structs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct matching
//! the database row, plus any read-side views assembled from joins. Admin
//! create/update DTOs live outside this service.

pub mod client;
pub mod desk;
pub mod queue;
pub mod queue_entry;
pub mod service;
