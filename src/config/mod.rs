mod config;

pub use config::{
    CommandSpec, Config, ENV_HOST_INFIX, ENV_INTERVAL, ENV_JOBS_CMD, ENV_NODES_CMD,
    ENV_SERVERS, ENV_THROUGHPUT_CMD, ENV_TOP_LINES,
};
