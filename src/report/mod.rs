mod json;
mod metric;
mod report;

pub use json::{JsonReport, Rankings};
pub use metric::{rank, Metric};
pub use report::{summarize, Reporter, Row, HEADER};

/// How the report is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}
