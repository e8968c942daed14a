use std::fmt::{self, Display, Formatter};
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};

pub const ENV_SERVERS: &str = "JOBTOP_SERVERS";
pub const ENV_TOP_LINES: &str = "JOBTOP_TOP_LINES";
pub const ENV_INTERVAL: &str = "JOBTOP_INTERVAL";
pub const ENV_HOST_INFIX: &str = "JOBTOP_HOST_INFIX";
pub const ENV_THROUGHPUT_CMD: &str = "JOBTOP_THROUGHPUT_CMD";
pub const ENV_NODES_CMD: &str = "JOBTOP_NODES_CMD";
pub const ENV_JOBS_CMD: &str = "JOBTOP_JOBS_CMD";

/// Everything the pipeline needs to know about the cluster it reports on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Storage servers polled by the throughput tool.
    pub servers: Vec<String>,
    /// Rows printed per ranking.
    pub top_lines: usize,
    /// Polling interval in seconds handed to the throughput tool.
    pub interval: u32,
    /// Substring removed from a storage-client hostname to get the scheduler node name.
    pub host_infix: String,
    pub throughput: CommandSpec,
    pub nodes: CommandSpec,
    pub jobs: CommandSpec,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            servers: Vec::new(),
            top_lines: 10,
            interval: 10,
            host_infix: "ib".to_string(),
            throughput: CommandSpec::new("lltop", &[]),
            nodes: CommandSpec::new("pbsnodes", &["-x"]),
            jobs: CommandSpec::new("qstat", &["-t", "-f", "-x"]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CommandSpec {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new(program: &str, args: &[&str]) -> Self {
        CommandSpec {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }
}

impl FromStr for CommandSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut words = s.split_whitespace().map(str::to_string);
        let program = words
            .next()
            .ok_or_else(|| Error::Config("empty command line".to_string()))?;
        Ok(CommandSpec {
            program,
            args: words.collect(),
        })
    }
}

impl Display for CommandSpec {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

impl Config {
    /// Load from an optional TOML file, then apply `JOBTOP_*` environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                debug!("no config file given, using defaults");
                Config::default()
            }
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        info!("Loading config from {:?}", path);
        let contents = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Overwrite fields from whatever `lookup` returns for the `JOBTOP_*` keys.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(servers) = lookup(ENV_SERVERS) {
            self.servers = servers
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
        }
        if let Some(value) = lookup(ENV_TOP_LINES) {
            self.top_lines = parse_var(ENV_TOP_LINES, &value)?;
        }
        if let Some(value) = lookup(ENV_INTERVAL) {
            self.interval = parse_var(ENV_INTERVAL, &value)?;
        }
        if let Some(infix) = lookup(ENV_HOST_INFIX) {
            self.host_infix = infix;
        }
        if let Some(cmd) = lookup(ENV_THROUGHPUT_CMD) {
            self.throughput = cmd.parse()?;
        }
        if let Some(cmd) = lookup(ENV_NODES_CMD) {
            self.nodes = cmd.parse()?;
        }
        if let Some(cmd) = lookup(ENV_JOBS_CMD) {
            self.jobs = cmd.parse()?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.top_lines == 0 {
            return Err(Error::Config("top_lines must be at least 1".to_string()));
        }
        for (name, cmd) in [
            ("throughput", &self.throughput),
            ("nodes", &self.nodes),
            ("jobs", &self.jobs),
        ] {
            if cmd.program.trim().is_empty() {
                return Err(Error::Config(format!("{} command has no program", name)));
            }
        }
        Ok(())
    }
}

fn parse_var<T: FromStr>(key: &str, value: &str) -> Result<T>
where
    T::Err: Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| Error::Config(format!("{}={:?}: {}", key, value, e)))
}
