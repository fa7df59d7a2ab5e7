pub mod codes;
pub mod config;
mod error;
pub mod extract;
pub mod fetch;
pub mod fsutil;
pub mod markdown;
pub mod names;
pub mod pipeline;
pub mod problem;
pub mod render;
pub mod slug;
pub mod telemetry;

pub use error::{BoxError, Error, Result};
