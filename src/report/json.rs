use std::io::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::metric::Metric;
use super::report::{Reporter, Row};
use crate::collector::{ServerStat, Totals};
use crate::error::Result;

/// Machine-readable form of the three rankings plus totals.
#[derive(Debug, Serialize)]
pub struct JsonReport {
    pub collected_at: DateTime<Utc>,
    pub rankings: Rankings,
    pub totals: Totals,
}

/// Serialized in report order.
#[derive(Debug, Serialize)]
pub struct Rankings {
    pub writes: Vec<Row>,
    pub reads: Vec<Row>,
    pub iops: Vec<Row>,
}

impl JsonReport {
    pub fn build(
        reporter: &Reporter,
        stats: &[ServerStat],
        collected_at: DateTime<Utc>,
    ) -> Result<Self> {
        let rankings = Rankings {
            writes: reporter.ranking(stats, Metric::Write)?,
            reads: reporter.ranking(stats, Metric::Read)?,
            iops: reporter.ranking(stats, Metric::Requests)?,
        };
        Ok(JsonReport {
            collected_at,
            rankings,
            totals: Totals::sum(stats)?,
        })
    }

    pub fn write<W: Write>(&self, out: &mut W) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out)?;
        out.flush()?;
        Ok(())
    }
}
