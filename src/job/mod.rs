mod job;
mod registry;

pub use job::JobInfo;
pub use registry::JobRegistry;
