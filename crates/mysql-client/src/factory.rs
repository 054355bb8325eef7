//! Connection factories.

use std::fmt;
use std::sync::Arc;

use crate::config::ConnectConfig;

/// Static description of a connection factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionFactoryMetadata {
    name: &'static str,
}

impl ConnectionFactoryMetadata {
    /// Create factory metadata.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }

    /// Get the product name of the database the factory connects to.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

/// Opens sessions for one resolved configuration.
pub trait ConnectionFactory: fmt::Debug + Send + Sync {
    /// Get the factory metadata.
    fn metadata(&self) -> ConnectionFactoryMetadata;
}

/// Connection factory for MySQL servers.
///
/// Holds the configuration it was created with; sessions opened from it all
/// share that configuration.
#[derive(Debug, Clone)]
pub struct MySqlConnectionFactory {
    configuration: Arc<ConnectConfig>,
}

impl MySqlConnectionFactory {
    /// Product name reported in the factory metadata.
    pub const PRODUCT_NAME: &'static str = "MySQL";

    /// Create a factory for a configuration.
    #[must_use]
    pub fn new(configuration: ConnectConfig) -> Self {
        Self {
            configuration: Arc::new(configuration),
        }
    }

    /// Get the configuration.
    #[must_use]
    pub fn configuration(&self) -> &ConnectConfig {
        &self.configuration
    }
}

impl ConnectionFactory for MySqlConnectionFactory {
    fn metadata(&self) -> ConnectionFactoryMetadata {
        ConnectionFactoryMetadata::new(Self::PRODUCT_NAME)
    }
}
