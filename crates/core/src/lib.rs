//! Pure domain logic for queue admission and desk dispatch.
//!
//! This crate has zero internal dependencies so it can be shared by the
//! repository layer, the API server, and any future tooling.

pub mod dispatch;
pub mod error;
pub mod ids;
pub mod position;
pub mod routing;
pub mod service_window;
pub mod types;
