mod hostname;
mod node;
mod registry;
pub mod status;

pub use hostname::HostTransform;
pub use node::NodeStatus;
pub use registry::NodeRegistry;
