use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to start `{program}`: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("`{program}` exited with {status}: {stderr}")]
    Exit {
        program: String,
        status: String,
        stderr: String,
    },

    #[error("`{program}` produced non-utf8 output: {source}")]
    Output {
        program: String,
        source: std::string::FromUtf8Error,
    },

    #[error("throughput report line {line}: {reason}")]
    Row { line: usize, reason: String },

    #[error("total {field} does not fit in 64 bits")]
    Overflow { field: &'static str },

    #[error("malformed xml from {source_name}: {source}")]
    Xml {
        source_name: String,
        source: quick_xml::DeError,
    },

    #[error("<{element}> #{index} has no <{field}>")]
    MissingField {
        element: &'static str,
        field: &'static str,
        index: usize,
    },

    #[error("node {node}: malformed status token {token:?}")]
    StatusToken { node: String, token: String },

    #[error("unknown host {host}: no scheduler node named {node}")]
    UnknownHost { host: String, node: String },

    #[error("unknown job {job} on node {node}")]
    UnknownJob { job: String, node: String },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("cannot read config {path:?}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot parse config {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
