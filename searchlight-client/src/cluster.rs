//! Cluster administration endpoints
//!
//! Each operation compiles its options into a [`RequestDescriptor`] and
//! performs exactly one dispatch through the transport. Compilation is
//! synchronous and pure: identical options and configuration always produce
//! an identical descriptor, and a validation failure means nothing is sent.

use crate::config::ClientConfig;
use crate::error::Result;
use crate::metrics::RequestTimer;
use crate::options::{
    FieldStatsOptions, HealthOptions, NodeInfoOptions, NodeStatsOptions, StateOptions,
};
use crate::request::{Method, PathBuilder, QueryString, RequestDescriptor};
use crate::transport::Transport;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Cluster administration namespace.
///
/// Obtained from [`Client::cluster`](crate::Client::cluster). Holds only
/// shared handles, so it is cheap to clone and calls never interfere with
/// each other.
#[derive(Clone)]
pub struct Cluster {
    config: Arc<ClientConfig>,
    transport: Arc<dyn Transport>,
}

impl Cluster {
    pub(crate) fn new(config: Arc<ClientConfig>, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    /// Fielddata memory statistics for one or more fields across nodes
    pub async fn field_stats(&self, options: Option<FieldStatsOptions>) -> Result<Value> {
        let request = field_stats_request(options)?;
        self.dispatch("cluster.field_stats", request).await
    }

    /// Cluster health summary
    pub async fn health(&self, options: Option<HealthOptions>) -> Result<Value> {
        let request = health_request(options);
        self.dispatch("cluster.health", request).await
    }

    /// Information about cluster nodes.
    ///
    /// Without an explicit node selection, falls back to the nodes
    /// configured on the client, and to the whole cluster when neither is
    /// set.
    pub async fn node_info(&self, options: Option<NodeInfoOptions>) -> Result<Value> {
        let request = node_info_request(&self.config, options);
        self.dispatch("cluster.node_info", request).await
    }

    /// Statistics for a single node, or for all nodes when none is selected
    pub async fn node_stats(&self, options: Option<NodeStatsOptions>) -> Result<Value> {
        let request = node_stats_request(&self.config, options);
        self.dispatch("cluster.node_stats", request).await
    }

    /// Current cluster-wide settings
    pub async fn settings(&self) -> Result<Value> {
        let request = settings_request();
        self.dispatch("cluster.settings", request).await
    }

    /// Cluster state, optionally narrowed by filter flags
    pub async fn state(&self, options: Option<StateOptions>) -> Result<Value> {
        let request = state_request(options);
        self.dispatch("cluster.state", request).await
    }

    /// Update cluster-wide settings.
    ///
    /// The settings document is forwarded to the engine unmodified.
    pub async fn update_settings(&self, settings: Value) -> Result<Value> {
        let request = update_settings_request(settings);
        self.dispatch("cluster.update_settings", request).await
    }

    async fn dispatch(&self, endpoint: &'static str, request: RequestDescriptor) -> Result<Value> {
        let timer = RequestTimer::new(endpoint, request.method.as_str());
        debug!("{} {}", request.method, request.path);
        match self.transport.execute(request).await {
            Ok(response) => {
                timer.success();
                Ok(response)
            }
            Err(e) => {
                timer.error(e.error_type());
                Err(e)
            }
        }
    }
}

fn field_stats_request(options: Option<FieldStatsOptions>) -> Result<RequestDescriptor> {
    let options = options.unwrap_or_default();
    let fields = options.resolve_fields()?;

    let mut query = QueryString::new();
    query.append("os", options.os);
    query.append("process", options.process);

    let path = PathBuilder::new()
        .push("_nodes")
        .push("stats")
        .push("indices")
        .push("fielddata")
        .push_list(&fields)
        .build();

    Ok(RequestDescriptor::new(Method::Get, path + &query.encode()))
}

fn health_request(options: Option<HealthOptions>) -> RequestDescriptor {
    let options = options.unwrap_or_default();

    let mut query = QueryString::new();
    query.append("level", options.level.as_deref());
    query.append("local", options.local);
    query.append("timeout", options.timeout.as_deref());
    query.append("wait_for_nodes", options.wait_for_nodes.as_deref());
    query.append("wait_for_relocating_shards", options.wait_for_relocating_shards);
    query.append("wait_for_status", options.wait_for_status.as_deref());

    let path = PathBuilder::new().push("_cluster").push("health").build();

    RequestDescriptor::new(Method::Get, path + &query.encode())
}

fn node_info_request(config: &ClientConfig, options: Option<NodeInfoOptions>) -> RequestDescriptor {
    let options = options.unwrap_or_default();
    let nodes = options.resolve_nodes(config);

    let path = PathBuilder::new()
        .push("_cluster")
        .push("nodes")
        .push_list(&nodes)
        .build();

    RequestDescriptor::new(Method::Get, path)
}

fn node_stats_request(
    config: &ClientConfig,
    options: Option<NodeStatsOptions>,
) -> RequestDescriptor {
    let options = options.unwrap_or_default();
    let node = options.resolve_node(config).map_or_else(Vec::new, |n| vec![n]);

    let path = PathBuilder::new()
        .push("_cluster")
        .push("nodes")
        .push_list(&node)
        .push("stats")
        .build();

    RequestDescriptor::new(Method::Get, path)
}

fn settings_request() -> RequestDescriptor {
    let path = PathBuilder::new().push("_cluster").push("settings").build();
    RequestDescriptor::new(Method::Get, path)
}

fn state_request(options: Option<StateOptions>) -> RequestDescriptor {
    let options = options.unwrap_or_default();

    let mut query = QueryString::new();
    query.append("filter_blocks", options.filter_blocks);
    query.append("filter_index_templates", options.filter_index_templates);
    query.append("filter_indices", options.filter_indices);
    query.append("filter_metadata", options.filter_metadata);
    query.append("filter_nodes", options.filter_nodes);
    query.append("filter_routing_table", options.filter_routing_table);

    let path = PathBuilder::new().push("_cluster").push("state").build();

    RequestDescriptor::new(Method::Get, path + &query.encode())
}

fn update_settings_request(settings: Value) -> RequestDescriptor {
    let path = PathBuilder::new().push("_cluster").push("settings").build();
    RequestDescriptor::new(Method::Put, path).with_body(settings)
}
