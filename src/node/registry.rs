use std::collections::HashMap;

use serde::Deserialize;
use tracing::info;

use super::node::NodeStatus;
use crate::config::CommandSpec;
use crate::error::{Error, Result};
use crate::exec;

#[derive(Debug, Deserialize)]
struct Data {
    #[serde(rename = "Node", default)]
    nodes: Vec<RawNode>,
}

#[derive(Debug, Deserialize)]
struct RawNode {
    name: Option<String>,
    status: Option<String>,
}

/// Scheduler nodes keyed by node name.
#[derive(Debug, Clone, Default)]
pub struct NodeRegistry {
    nodes: HashMap<String, NodeStatus>,
}

impl NodeRegistry {
    pub async fn load(spec: &CommandSpec) -> Result<Self> {
        let output = exec::run(spec, &[]).await?;
        let registry = Self::from_xml(&spec.program, &output)?;
        info!("[NODES] Loaded {} scheduler nodes", registry.len());
        Ok(registry)
    }

    /// Parse a `<Data><Node><name/><status/></Node>...</Data>` document.
    pub fn from_xml(source_name: &str, xml: &str) -> Result<Self> {
        let mut nodes = HashMap::new();
        if xml.trim().is_empty() {
            return Ok(NodeRegistry { nodes });
        }

        let data: Data = quick_xml::de::from_str(xml).map_err(|source| Error::Xml {
            source_name: source_name.to_string(),
            source,
        })?;

        for (index, raw) in data.nodes.into_iter().enumerate() {
            let missing = |field| Error::MissingField {
                element: "Node",
                field,
                index,
            };
            let name = raw.name.ok_or_else(|| missing("name"))?;
            let status = raw.status.ok_or_else(|| missing("status"))?;
            let node = NodeStatus::new(&name, &status)?;
            nodes.insert(name, node);
        }

        Ok(NodeRegistry { nodes })
    }

    pub fn get(&self, name: &str) -> Option<&NodeStatus> {
        self.nodes.get(name)
    }

    pub fn insert(&mut self, node: NodeStatus) {
        self.nodes.insert(node.name.clone(), node);
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
