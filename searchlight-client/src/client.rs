//! Client entry point

use crate::cluster::Cluster;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::transport::{HttpTransport, Transport};
use std::sync::Arc;

/// Root handle for talking to the engine.
///
/// Owns the configuration and the transport; namespace accessors hand out
/// cheap clones of both.
#[derive(Clone)]
pub struct Client {
    config: Arc<ClientConfig>,
    transport: Arc<dyn Transport>,
}

impl Client {
    /// Create a client with the default HTTP transport
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a client over a custom transport
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            config: Arc::new(config),
            transport,
        }
    }

    /// The configuration this client was built with
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Cluster administration operations
    pub fn cluster(&self) -> Cluster {
        Cluster::new(self.config.clone(), self.transport.clone())
    }
}
