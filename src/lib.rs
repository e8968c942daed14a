pub mod collector;
pub mod config;
pub mod error;
pub mod exec;
pub mod job;
pub mod node;
pub mod pipeline;
pub mod report;

pub use error::{Error, Result};
