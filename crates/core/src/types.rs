//! Shared scalar types.

/// Primary keys of every table (PostgreSQL `BIGSERIAL`).
pub type DbId = i64;

/// Stored instants. Service windows are compared in UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Queue priority (`queues.priority`, an `INT` column). Smaller values are
/// served first.
pub type Priority = i32;
