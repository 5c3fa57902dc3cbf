//! Caller-supplied options for cluster operations
//!
//! Every field is optional, so a defaulted struct is equivalent to omitting
//! the options argument entirely. Concepts that address nodes or fields come
//! in a singular and a plural spelling; resolution collapses the pair into a
//! single ordered list (see [`resolve_name_list`]).

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use serde::{Deserialize, Serialize};

/// Collapse a singular/plural option pair into one ordered list.
///
/// Plural wins over singular within a source, and call-time values win over
/// config defaults entirely. An empty plural value counts as absent. The
/// returned list is empty when nothing resolved, which downstream path
/// building treats as "no segment".
pub(crate) fn resolve_name_list(
    plural: Option<&[String]>,
    singular: Option<&str>,
    default_plural: Option<&[String]>,
    default_singular: Option<&str>,
) -> Vec<String> {
    if let Some(values) = plural {
        if !values.is_empty() {
            return values.to_vec();
        }
    }
    if let Some(value) = singular {
        return vec![value.to_string()];
    }
    if let Some(values) = default_plural {
        if !values.is_empty() {
            return values.to_vec();
        }
    }
    if let Some(value) = default_singular {
        return vec![value.to_string()];
    }
    Vec::new()
}

/// Options for per-field fielddata statistics
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct FieldStatsOptions {
    pub field: Option<String>,
    pub fields: Option<Vec<String>>,
    pub os: Option<bool>,
    pub process: Option<bool>,
}

impl FieldStatsOptions {
    /// At least one field is required; there is no config default to fall
    /// back to.
    pub(crate) fn resolve_fields(&self) -> Result<Vec<String>> {
        let fields = resolve_name_list(self.fields.as_deref(), self.field.as_deref(), None, None);
        if fields.is_empty() {
            return Err(ClientError::MissingRequiredOption("field"));
        }
        Ok(fields)
    }
}

/// Options for the cluster health operation
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct HealthOptions {
    /// Detail level: `cluster`, `indices` or `shards`
    pub level: Option<String>,
    /// Answer from the local node instead of the elected master
    pub local: Option<bool>,
    /// How long to wait for the requested status, e.g. `30s`
    pub timeout: Option<String>,
    /// Wait until this many nodes are up; accepts comparators like `>=2`
    pub wait_for_nodes: Option<String>,
    pub wait_for_relocating_shards: Option<u32>,
    /// Wait until the cluster reaches `green`, `yellow` or `red`
    pub wait_for_status: Option<String>,
}

/// Options for node information
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct NodeInfoOptions {
    pub node: Option<String>,
    pub nodes: Option<Vec<String>>,
}

impl NodeInfoOptions {
    pub(crate) fn resolve_nodes(&self, config: &ClientConfig) -> Vec<String> {
        resolve_name_list(
            self.nodes.as_deref(),
            self.node.as_deref(),
            config.nodes.as_deref(),
            config.node.as_deref(),
        )
    }
}

/// Options for node statistics.
///
/// Only a single node can be addressed; the engine's multi-node stats path
/// is not supported by this client.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct NodeStatsOptions {
    pub node: Option<String>,
}

impl NodeStatsOptions {
    pub(crate) fn resolve_node(&self, config: &ClientConfig) -> Option<String> {
        self.node.clone().or_else(|| config.node.clone())
    }
}

/// Options for the cluster state operation
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct StateOptions {
    pub filter_blocks: Option<bool>,
    pub filter_index_templates: Option<bool>,
    pub filter_indices: Option<bool>,
    pub filter_metadata: Option<bool>,
    pub filter_nodes: Option<bool>,
    pub filter_routing_table: Option<bool>,
}
