//! Shared call context.

pub mod core;

pub use self::core::{Session, SessionBuilder, SessionStats, StatsSnapshot};
