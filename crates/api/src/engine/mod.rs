//! Queue admission and dispatch engine.
//!
//! Each operation lives on its own type, constructed with the database pool
//! (which reaches the queue catalog, group membership index, client
//! directory, and waiting room through the repositories) and the
//! service-window mode its call path uses.

pub mod attach;
pub mod dispatch;
pub mod position;
pub mod router;

pub use attach::QueueAttacher;
pub use dispatch::{CallOutcome, DeskDispatcher};
pub use position::PositionTracker;
pub use router::QueueRouter;
