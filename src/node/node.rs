use serde::Serialize;

use super::status;
use crate::error::Result;

/// A scheduler node and the jobs it is running right now.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NodeStatus {
    pub name: String,
    pub raw_status: String,
    pub jobs: Vec<String>,
}

impl NodeStatus {
    /// Build a node from its name and raw `key=value,...` status field.
    pub fn new(name: &str, raw_status: &str) -> Result<Self> {
        let fields = status::parse(name, raw_status)?;
        let jobs = status::jobs(&fields);
        Ok(NodeStatus {
            name: name.to_string(),
            raw_status: raw_status.to_string(),
            jobs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_jobs_from_status() {
        let n = NodeStatus::new("c1", "rectime=1,jobs=55.sched 56.sched,state=free").unwrap();
        assert_eq!(n.jobs, vec!["55.sched", "56.sched"]);
        assert_eq!(n.raw_status, "rectime=1,jobs=55.sched 56.sched,state=free");
    }

    #[test]
    fn no_jobs_token_means_no_jobs() {
        let n = NodeStatus::new("c2", "rectime=1,state=free").unwrap();
        assert!(n.jobs.is_empty());
    }
}
