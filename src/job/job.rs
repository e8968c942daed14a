use std::fmt::{self, Display, Formatter};

use serde::Serialize;

/// A scheduler job and its owner.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct JobInfo {
    /// Full dotted ID, e.g. `123.scheduler.cluster`.
    pub id: String,
    /// `user@host` as reported by the scheduler.
    pub owner: String,
}

impl JobInfo {
    pub fn new(id: &str, owner: &str) -> Self {
        JobInfo {
            id: id.to_string(),
            owner: owner.to_string(),
        }
    }

    /// The numeric part of the ID, before the first `.`.
    pub fn short_id(&self) -> &str {
        self.id.split('.').next().unwrap_or(&self.id)
    }

    /// The owner's user name, before the `@`.
    pub fn user(&self) -> &str {
        self.owner.split('@').next().unwrap_or(&self.owner)
    }
}

/// Renders as `jobid(user)`.
impl Display for JobInfo {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}({})", self.short_id(), self.user())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn annotation() {
        let j = JobInfo::new("55.sched", "alice@login");
        assert_eq!(j.short_id(), "55");
        assert_eq!(j.user(), "alice");
        assert_eq!(j.to_string(), "55(alice)");
    }

    #[test]
    fn plain_fields_pass_through() {
        let j = JobInfo::new("55", "alice");
        assert_eq!(j.to_string(), "55(alice)");
    }
}
