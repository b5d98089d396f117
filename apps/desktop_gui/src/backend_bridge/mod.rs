//! Bridge between the UI thread and the async clipboard worker.

pub mod commands;
pub mod runtime;
