use std::io::Write;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::collector::{self, ServerStat};
use crate::config::Config;
use crate::error::Result;
use crate::job::JobRegistry;
use crate::node::{HostTransform, NodeRegistry};
use crate::report::{self, Format, JsonReport, Metric, Reporter};

/// The three data sets a report is built from.
#[derive(Debug, Clone)]
pub struct Inventory {
    pub collected_at: DateTime<Utc>,
    pub stats: Vec<ServerStat>,
    pub nodes: NodeRegistry,
    pub jobs: JobRegistry,
}

/// Run the throughput tool and both scheduler queries concurrently.
///
/// The first failure wins; the other commands are killed when their futures drop.
pub async fn fetch(config: &Config) -> Result<Inventory> {
    let collected_at = Utc::now();
    let (stats, nodes, jobs) = futures::try_join!(
        collector::collect(&config.throughput, &config.servers, config.interval),
        NodeRegistry::load(&config.nodes),
        JobRegistry::load(&config.jobs),
    )?;
    Ok(Inventory {
        collected_at,
        stats,
        nodes,
        jobs,
    })
}

/// Write the rankings by write, read and request count, then the totals.
pub fn render<W: Write>(config: &Config, inventory: &Inventory, format: Format, out: &mut W) -> Result<()> {
    let reporter = Reporter::new(
        &inventory.nodes,
        &inventory.jobs,
        HostTransform::new(&config.host_infix),
        config.top_lines,
    );

    match format {
        Format::Text => {
            for metric in Metric::ALL {
                reporter.rank_and_print(out, &inventory.stats, metric)?;
            }
            report::summarize(out, &inventory.stats)?;
        }
        Format::Json => {
            JsonReport::build(&reporter, &inventory.stats, inventory.collected_at)?.write(out)?;
        }
    }
    Ok(())
}

pub async fn run<W: Write>(config: &Config, format: Format, out: &mut W) -> Result<()> {
    let inventory = fetch(config).await?;
    info!(
        "Joining {} servers against {} nodes and {} jobs",
        inventory.stats.len(),
        inventory.nodes.len(),
        inventory.jobs.len()
    );
    render(config, &inventory, format, out)
}
