use std::io::Write;

use serde::Serialize;
use tracing::debug;

use super::metric::{rank, Metric};
use crate::collector::{ServerStat, Totals};
use crate::error::{Error, Result};
use crate::job::{JobInfo, JobRegistry};
use crate::node::{HostTransform, NodeRegistry};

pub const HEADER: &str = "host          write MB    read MB     reqs   jobid(user)";

/// A ranked server and the jobs running on its scheduler node.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Row {
    #[serde(flatten)]
    pub stat: ServerStat,
    pub jobs: Vec<JobInfo>,
}

impl Row {
    pub fn to_line(&self) -> String {
        let mut line = format!(
            "{:>10} {:>10} {:>10} {:>10}",
            self.stat.hostname, self.stat.write_mb, self.stat.read_mb, self.stat.requests
        );
        for job in &self.jobs {
            line.push_str("   ");
            line.push_str(&job.to_string());
        }
        line
    }
}

/// Joins server stats with the scheduler's node and job records.
pub struct Reporter<'a> {
    nodes: &'a NodeRegistry,
    jobs: &'a JobRegistry,
    transform: HostTransform,
    top: usize,
}

impl<'a> Reporter<'a> {
    pub fn new(
        nodes: &'a NodeRegistry,
        jobs: &'a JobRegistry,
        transform: HostTransform,
        top: usize,
    ) -> Self {
        Reporter {
            nodes,
            jobs,
            transform,
            top,
        }
    }

    /// Attach the jobs running on `stat`'s node.
    pub fn resolve(&self, stat: &ServerStat) -> Result<Row> {
        let node_name = self.transform.node_name(&stat.hostname);
        let node = self.nodes.get(&node_name).ok_or_else(|| Error::UnknownHost {
            host: stat.hostname.clone(),
            node: node_name.clone(),
        })?;

        let jobs = node
            .jobs
            .iter()
            .map(|id| {
                self.jobs.get(id).cloned().ok_or_else(|| Error::UnknownJob {
                    job: id.clone(),
                    node: node_name.clone(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Row {
            stat: stat.clone(),
            jobs,
        })
    }

    pub fn ranking(&self, stats: &[ServerStat], metric: Metric) -> Result<Vec<Row>> {
        rank(stats, metric, self.top)
            .iter()
            .map(|stat| self.resolve(stat))
            .collect()
    }

    /// Print one ranked table under `metric`'s title.
    ///
    /// Every row is resolved before anything is written, and the section is
    /// flushed on return, so a failing section leaves earlier ones intact.
    pub fn rank_and_print<W: Write>(
        &self,
        out: &mut W,
        stats: &[ServerStat],
        metric: Metric,
    ) -> Result<()> {
        let rows = self.ranking(stats, metric)?;
        debug!("printing {} rows for {}", rows.len(), metric.title());

        writeln!(out, "{}", metric.title())?;
        writeln!(out, "{}", HEADER)?;
        for row in &rows {
            writeln!(out, "{}", row.to_line())?;
        }
        out.flush()?;
        Ok(())
    }
}

/// Print totals over every collected server, ranked or not.
pub fn summarize<W: Write>(out: &mut W, stats: &[ServerStat]) -> Result<Totals> {
    let totals = Totals::sum(stats)?;
    writeln!(
        out,
        "Total: writes {} MB, reads {} MB, iops {}",
        totals.write_mb, totals.read_mb, totals.requests
    )?;
    out.flush()?;
    Ok(totals)
}
