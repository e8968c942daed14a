use serde::Serialize;

use crate::error::{Error, Result};

/// One storage server's throughput over a polling interval.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ServerStat {
    pub hostname: String,
    pub write_mb: u64,
    pub read_mb: u64,
    pub requests: u64,
}

impl ServerStat {
    pub fn new(hostname: &str, write_mb: u64, read_mb: u64, requests: u64) -> Self {
        ServerStat {
            hostname: hostname.to_string(),
            write_mb,
            read_mb,
            requests,
        }
    }
}

#[derive(Debug, Serialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub write_mb: u64,
    pub read_mb: u64,
    pub requests: u64,
}

impl Totals {
    pub fn add(&mut self, stat: &ServerStat) -> Result<()> {
        self.write_mb = checked("write MB", self.write_mb, stat.write_mb)?;
        self.read_mb = checked("read MB", self.read_mb, stat.read_mb)?;
        self.requests = checked("requests", self.requests, stat.requests)?;
        Ok(())
    }

    pub fn sum(stats: &[ServerStat]) -> Result<Self> {
        let mut totals = Totals::default();
        for stat in stats {
            totals.add(stat)?;
        }
        Ok(totals)
    }
}

fn checked(field: &'static str, total: u64, value: u64) -> Result<u64> {
    total.checked_add(value).ok_or(Error::Overflow { field })
}
