//! Client library for the Searchlight distributed search engine HTTP API
//!
//! This crate compiles caller options into canonical request descriptors
//! and dispatches them through a pluggable transport. It currently covers
//! the cluster administration namespace:
//!
//! - `GET _cluster/health` - Cluster health
//! - `GET _cluster/nodes[/{nodes}]` - Node information
//! - `GET _cluster/nodes[/{node}]/stats` - Node statistics
//! - `GET _cluster/settings` / `PUT _cluster/settings` - Cluster settings
//! - `GET _cluster/state` - Cluster state
//! - `GET _nodes/stats/indices/fielddata/{fields}` - Fielddata statistics
//!
//! # Example
//!
//! ```no_run
//! use searchlight_client::{Client, ClientConfig, HealthOptions};
//!
//! # async fn run() -> searchlight_client::Result<()> {
//! let client = Client::new(ClientConfig::default())?;
//! let health = client
//!     .cluster()
//!     .health(Some(HealthOptions {
//!         wait_for_status: Some("yellow".to_string()),
//!         ..Default::default()
//!     }))
//!     .await?;
//! println!("{health}");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod metrics;
pub mod options;
pub mod request;
pub mod transport;

mod client;
mod cluster;

pub use client::Client;
pub use cluster::Cluster;
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use options::{
    FieldStatsOptions, HealthOptions, NodeInfoOptions, NodeStatsOptions, StateOptions,
};
pub use request::{Method, RequestDescriptor};
pub use transport::{HttpTransport, Transport};
