//! Group synchronization: pure planning plus the engine that applies it.

pub mod engine;
pub mod plan;

pub use engine::{sync_group, SyncOptions, SyncReport, SyncRequest};
pub use plan::{plan_sync, SyncPlan};
