//! Run configuration and entry points

mod context;

pub use context::*;
