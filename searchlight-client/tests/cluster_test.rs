//! End-to-end tests for the cluster namespace over a capturing transport

use async_trait::async_trait;
use searchlight_client::{
    Client, ClientConfig, ClientError, FieldStatsOptions, HealthOptions, Method, NodeInfoOptions,
    NodeStatsOptions, RequestDescriptor, StateOptions, Transport,
};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

/// Records every descriptor it is handed and answers with a canned body.
struct RecordingTransport {
    requests: Mutex<Vec<RequestDescriptor>>,
}

impl RecordingTransport {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
        })
    }

    fn last(&self) -> RequestDescriptor {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was dispatched")
    }

    fn count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn execute(&self, request: RequestDescriptor) -> searchlight_client::Result<Value> {
        self.requests.lock().unwrap().push(request);
        Ok(json!({ "acknowledged": true }))
    }
}

/// Always fails, standing in for a broken connection.
struct FailingTransport;

#[async_trait]
impl Transport for FailingTransport {
    async fn execute(&self, _request: RequestDescriptor) -> searchlight_client::Result<Value> {
        Err(ClientError::Transport("connection reset".to_string()))
    }
}

fn client_with(config: ClientConfig) -> (Client, Arc<RecordingTransport>) {
    let transport = RecordingTransport::new();
    let client = Client::with_transport(config, transport.clone());
    (client, transport)
}

fn default_client() -> (Client, Arc<RecordingTransport>) {
    client_with(ClientConfig::default())
}

// ===================================================================
// field_stats
// ===================================================================

#[tokio::test]
async fn test_field_stats_single_field() {
    let (client, transport) = default_client();

    let options = FieldStatsOptions {
        field: Some("breed".to_string()),
        ..Default::default()
    };
    client.cluster().field_stats(Some(options)).await.unwrap();

    let request = transport.last();
    assert_eq!(request.method, Method::Get);
    assert_eq!(request.path, "_nodes/stats/indices/fielddata/breed");
}

#[tokio::test]
async fn test_field_stats_fields_array_with_flags() {
    let (client, transport) = default_client();

    let options = FieldStatsOptions {
        fields: Some(vec!["breed".to_string(), "name".to_string()]),
        os: Some(true),
        process: Some(true),
        ..Default::default()
    };
    client.cluster().field_stats(Some(options)).await.unwrap();

    let request = transport.last();
    assert_eq!(request.method, Method::Get);
    assert_eq!(
        request.path,
        "_nodes/stats/indices/fielddata/breed,name?os=true&process=true"
    );
}

#[tokio::test]
async fn test_field_stats_requires_field() {
    let (client, transport) = default_client();

    let err = client.cluster().field_stats(None).await.unwrap_err();
    assert!(matches!(err, ClientError::MissingRequiredOption("field")));
    // Validation failures never reach the transport
    assert_eq!(transport.count(), 0);
}

// ===================================================================
// health
// ===================================================================

#[tokio::test]
async fn test_health() {
    let (client, transport) = default_client();

    client.cluster().health(Some(HealthOptions::default())).await.unwrap();

    let request = transport.last();
    assert_eq!(request.method, Method::Get);
    assert_eq!(request.path, "_cluster/health");
}

#[tokio::test]
async fn test_health_options_optional() {
    let (client, transport) = default_client();

    client.cluster().health(None).await.unwrap();
    let omitted = transport.last();

    client.cluster().health(Some(HealthOptions::default())).await.unwrap();
    let empty = transport.last();

    assert_eq!(omitted, empty);
}

#[tokio::test]
async fn test_health_wait_flags() {
    let (client, transport) = default_client();

    let options = HealthOptions {
        timeout: Some("30s".to_string()),
        wait_for_status: Some("green".to_string()),
        ..Default::default()
    };
    client.cluster().health(Some(options)).await.unwrap();

    assert_eq!(
        transport.last().path,
        "_cluster/health?timeout=30s&wait_for_status=green"
    );
}

// ===================================================================
// node_info
// ===================================================================

#[tokio::test]
async fn test_node_info() {
    let (client, transport) = default_client();

    client.cluster().node_info(None).await.unwrap();

    let request = transport.last();
    assert_eq!(request.method, Method::Get);
    assert_eq!(request.path, "_cluster/nodes");
}

#[tokio::test]
async fn test_node_info_single_node() {
    let (client, transport) = default_client();

    let options = NodeInfoOptions {
        node: Some("superman".to_string()),
        ..Default::default()
    };
    client.cluster().node_info(Some(options)).await.unwrap();

    assert_eq!(transport.last().path, "_cluster/nodes/superman");
}

#[tokio::test]
async fn test_node_info_multiple_nodes() {
    let (client, transport) = default_client();

    let options = NodeInfoOptions {
        nodes: Some(vec!["superman".to_string(), "batman".to_string()]),
        ..Default::default()
    };
    client.cluster().node_info(Some(options)).await.unwrap();

    assert_eq!(transport.last().path, "_cluster/nodes/superman,batman");
}

#[tokio::test]
async fn test_node_info_default_node_from_config() {
    let (client, transport) = client_with(ClientConfig {
        node: Some("batman".to_string()),
        ..Default::default()
    });

    client.cluster().node_info(None).await.unwrap();

    assert_eq!(transport.last().path, "_cluster/nodes/batman");
}

#[tokio::test]
async fn test_node_info_default_nodes_from_config() {
    let (client, transport) = client_with(ClientConfig {
        nodes: Some(vec!["superman".to_string(), "batman".to_string()]),
        ..Default::default()
    });

    client.cluster().node_info(None).await.unwrap();

    assert_eq!(transport.last().path, "_cluster/nodes/superman,batman");
}

#[tokio::test]
async fn test_node_info_plural_wins_over_singular() {
    let (client, transport) = default_client();

    let options = NodeInfoOptions {
        node: Some("robin".to_string()),
        nodes: Some(vec!["superman".to_string(), "batman".to_string()]),
    };
    client.cluster().node_info(Some(options)).await.unwrap();

    assert_eq!(transport.last().path, "_cluster/nodes/superman,batman");
}

#[tokio::test]
async fn test_node_info_call_options_win_over_config() {
    let (client, transport) = client_with(ClientConfig {
        nodes: Some(vec!["superman".to_string(), "batman".to_string()]),
        ..Default::default()
    });

    let options = NodeInfoOptions {
        node: Some("robin".to_string()),
        ..Default::default()
    };
    client.cluster().node_info(Some(options)).await.unwrap();

    assert_eq!(transport.last().path, "_cluster/nodes/robin");
}

// ===================================================================
// node_stats
// ===================================================================

#[tokio::test]
async fn test_node_stats() {
    let (client, transport) = default_client();

    client.cluster().node_stats(None).await.unwrap();

    let request = transport.last();
    assert_eq!(request.method, Method::Get);
    assert_eq!(request.path, "_cluster/nodes/stats");
}

#[tokio::test]
async fn test_node_stats_single_node() {
    let (client, transport) = default_client();

    let options = NodeStatsOptions {
        node: Some("superman".to_string()),
    };
    client.cluster().node_stats(Some(options)).await.unwrap();

    assert_eq!(transport.last().path, "_cluster/nodes/superman/stats");
}

#[tokio::test]
async fn test_node_stats_default_node_from_config() {
    let (client, transport) = client_with(ClientConfig {
        node: Some("batman".to_string()),
        ..Default::default()
    });

    client.cluster().node_stats(None).await.unwrap();

    assert_eq!(transport.last().path, "_cluster/nodes/batman/stats");
}

// ===================================================================
// settings / state / update_settings
// ===================================================================

#[tokio::test]
async fn test_settings() {
    let (client, transport) = default_client();

    client.cluster().settings().await.unwrap();

    let request = transport.last();
    assert_eq!(request.method, Method::Get);
    assert_eq!(request.path, "_cluster/settings");
    assert!(request.body.is_none());
}

#[tokio::test]
async fn test_state_with_filter() {
    let (client, transport) = default_client();

    let options = StateOptions {
        filter_nodes: Some(true),
        ..Default::default()
    };
    client.cluster().state(Some(options)).await.unwrap();

    let request = transport.last();
    assert_eq!(request.method, Method::Get);
    assert_eq!(request.path, "_cluster/state?filter_nodes=true");
}

#[tokio::test]
async fn test_state_options_optional() {
    let (client, transport) = default_client();

    client.cluster().state(None).await.unwrap();

    assert_eq!(transport.last().path, "_cluster/state");
}

#[tokio::test]
async fn test_update_settings_forwards_body() {
    let (client, transport) = default_client();

    let update = json!({
        "transient": { "discovery.zen.minimum_master_nodes": 2 }
    });
    client.cluster().update_settings(update.clone()).await.unwrap();

    let request = transport.last();
    assert_eq!(request.method, Method::Put);
    assert_eq!(request.path, "_cluster/settings");
    assert_eq!(request.body, Some(update));
}

// ===================================================================
// shared behavior
// ===================================================================

#[tokio::test]
async fn test_identical_calls_produce_identical_descriptors() {
    let (client, transport) = client_with(ClientConfig {
        node: Some("batman".to_string()),
        ..Default::default()
    });

    client.cluster().node_info(None).await.unwrap();
    let first = transport.last();
    client.cluster().node_info(None).await.unwrap();
    let second = transport.last();

    assert_eq!(first, second);
    assert_eq!(transport.count(), 2);
}

#[tokio::test]
async fn test_transport_errors_pass_through_unchanged() {
    let client = Client::with_transport(ClientConfig::default(), Arc::new(FailingTransport));

    let err = client.cluster().health(None).await.unwrap_err();
    match err {
        ClientError::Transport(reason) => assert_eq!(reason, "connection reset"),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_concurrent_calls_do_not_interfere() {
    let (client, transport) = default_client();
    let cluster = client.cluster();

    let health = cluster.health(None);
    let state = cluster.state(None);
    let (health, state) = tokio::join!(health, state);
    health.unwrap();
    state.unwrap();

    assert_eq!(transport.count(), 2);
}
