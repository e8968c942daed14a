mod stats;
mod throughput;

pub use stats::{ServerStat, Totals};
pub use throughput::{collect, parse_report};
