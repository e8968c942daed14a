use crate::collector::ServerStat;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Write,
    Read,
    Requests,
}

impl Metric {
    /// Ranking order of the report.
    pub const ALL: [Metric; 3] = [Metric::Write, Metric::Read, Metric::Requests];

    pub fn value(&self, stat: &ServerStat) -> u64 {
        match self {
            Metric::Write => stat.write_mb,
            Metric::Read => stat.read_mb,
            Metric::Requests => stat.requests,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Metric::Write => "top writers",
            Metric::Read => "top readers",
            Metric::Requests => "top iops",
        }
    }
}

/// The `top` largest stats by `metric`, largest first.
///
/// Works on a copy; equal values keep their collected order.
pub fn rank(stats: &[ServerStat], metric: Metric, top: usize) -> Vec<ServerStat> {
    let mut ranked = stats.to_vec();
    ranked.sort_by(|a, b| metric.value(b).cmp(&metric.value(a)));
    ranked.truncate(top);
    ranked
}
