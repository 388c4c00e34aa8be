//! Shared response envelope types for API handlers.
//!
//! All API responses use a `{ "data": ... }` envelope. An idle desk or an
//! empty queue serializes as `{ "data": null }`.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
