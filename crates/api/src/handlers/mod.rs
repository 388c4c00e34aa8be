//! Request handlers.
//!
//! Handlers extract path/body parameters, delegate to the admission engine
//! held in [`AppState`](crate::state::AppState), and wrap results in the
//! `{ "data": ... }` envelope. Errors are mapped via [`AppError`](crate::error::AppError).

pub mod admission;
pub mod desk;
pub mod queue;
pub mod service;
