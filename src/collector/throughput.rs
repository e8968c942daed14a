use tracing::{debug, info};

use super::stats::ServerStat;
use crate::config::CommandSpec;
use crate::error::{Error, Result};
use crate::exec;

/// Poll `servers` through the throughput tool and parse its report.
///
/// Rows come back in the order the tool printed them.
pub async fn collect(spec: &CommandSpec, servers: &[String], interval: u32) -> Result<Vec<ServerStat>> {
    info!("[COLLECTOR] Polling {} storage servers", servers.len());
    let output = exec::run(spec, &report_args(servers, interval)).await?;
    let stats = parse_report(&output)?;
    info!("[COLLECTOR] Collected {} server rows", stats.len());
    Ok(stats)
}

fn report_args(servers: &[String], interval: u32) -> Vec<String> {
    let mut args = vec!["-i".to_string(), interval.to_string(), "-l".to_string()];
    args.extend(servers.iter().cloned());
    args
}

/// Parse `<hostname> <writeMB> <readMB> <requests>` rows after a header line.
pub fn parse_report(output: &str) -> Result<Vec<ServerStat>> {
    let mut stats = Vec::new();
    for (i, line) in output.lines().enumerate().skip(1) {
        if line.trim().is_empty() {
            continue;
        }
        stats.push(parse_row(i + 1, line)?);
    }
    Ok(stats)
}

fn parse_row(line_no: usize, line: &str) -> Result<ServerStat> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 4 {
        return Err(Error::Row {
            line: line_no,
            reason: format!("expected 4 columns, found {}", fields.len()),
        });
    }

    let number = |name: &str, value: &str| {
        value.parse::<u64>().map_err(|_| Error::Row {
            line: line_no,
            reason: format!("{} {:?} is not an integer", name, value),
        })
    };

    let stat = ServerStat {
        hostname: fields[0].to_string(),
        write_mb: number("write MB", fields[1])?,
        read_mb: number("read MB", fields[2])?,
        requests: number("requests", fields[3])?,
    };
    debug!("parsed {:?}", stat);
    Ok(stat)
}
