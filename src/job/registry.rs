use std::collections::HashMap;

use serde::Deserialize;
use tracing::info;

use super::job::JobInfo;
use crate::config::CommandSpec;
use crate::error::{Error, Result};
use crate::exec;

#[derive(Debug, Deserialize)]
struct Data {
    #[serde(rename = "Job", default)]
    jobs: Vec<RawJob>,
}

#[derive(Debug, Deserialize)]
struct RawJob {
    #[serde(rename = "Job_Id")]
    id: Option<String>,
    #[serde(rename = "Job_Owner")]
    owner: Option<String>,
}

/// Scheduler jobs keyed by full job ID.
#[derive(Debug, Clone, Default)]
pub struct JobRegistry {
    jobs: HashMap<String, JobInfo>,
}

impl JobRegistry {
    pub async fn load(spec: &CommandSpec) -> Result<Self> {
        let output = exec::run(spec, &[]).await?;
        let registry = Self::from_xml(&spec.program, &output)?;
        info!("[JOBS] Loaded {} scheduler jobs", registry.len());
        Ok(registry)
    }

    /// Parse a `<Data><Job><Job_Id/><Job_Owner/>...</Job>...</Data>` document.
    ///
    /// The scheduler prints nothing at all when no jobs exist.
    pub fn from_xml(source_name: &str, xml: &str) -> Result<Self> {
        let mut jobs = HashMap::new();
        if xml.trim().is_empty() {
            return Ok(JobRegistry { jobs });
        }

        let data: Data = quick_xml::de::from_str(xml).map_err(|source| Error::Xml {
            source_name: source_name.to_string(),
            source,
        })?;

        for (index, raw) in data.jobs.into_iter().enumerate() {
            let missing = |field| Error::MissingField {
                element: "Job",
                field,
                index,
            };
            let id = raw.id.ok_or_else(|| missing("Job_Id"))?;
            let owner = raw.owner.ok_or_else(|| missing("Job_Owner"))?;
            jobs.insert(id.clone(), JobInfo { id, owner });
        }

        Ok(JobRegistry { jobs })
    }

    pub fn get(&self, id: &str) -> Option<&JobInfo> {
        self.jobs.get(id)
    }

    pub fn insert(&mut self, job: JobInfo) {
        self.jobs.insert(job.id.clone(), job);
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}
