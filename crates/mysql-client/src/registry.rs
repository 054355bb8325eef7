//! Driver discovery.

use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::factory::ConnectionFactory;
use crate::options::{ConnectionOptions, DRIVER, OptionValue};
use crate::provider::{ConnectionFactoryProvider, MySqlConnectionFactoryProvider};

/// A registry of driver providers.
///
/// Providers are probed in registration order; the first one whose
/// [`supports`](ConnectionFactoryProvider::supports) accepts the options
/// creates the factory.
pub struct ConnectionFactories {
    providers: Vec<Box<dyn ConnectionFactoryProvider>>,
}

impl ConnectionFactories {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Add a provider.
    #[must_use]
    pub fn with_provider(mut self, provider: impl ConnectionFactoryProvider + 'static) -> Self {
        self.register(Box::new(provider));
        self
    }

    /// Add a provider in place.
    pub fn register(&mut self, provider: Box<dyn ConnectionFactoryProvider>) {
        self.providers.push(provider);
    }

    /// Get the identifiers of the registered drivers.
    pub fn drivers(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.providers.iter().map(|p| p.driver())
    }

    /// Check whether any registered driver handles the options.
    #[must_use]
    pub fn supports(&self, options: &ConnectionOptions) -> bool {
        self.providers.iter().any(|p| p.supports(options))
    }

    /// Create a factory from the first driver that handles the options.
    ///
    /// Returns `Ok(None)` when no driver handles them. Errors from the
    /// selected driver are returned as-is.
    pub fn find(&self, options: &ConnectionOptions) -> Result<Option<Arc<dyn ConnectionFactory>>> {
        let Some(provider) = self.providers.iter().find(|p| p.supports(options)) else {
            return Ok(None);
        };

        tracing::debug!(driver = provider.driver(), "selected connection factory provider");
        provider.create(options).map(Some)
    }

    /// Create a factory from the first driver that handles the options.
    ///
    /// Fails with [`Error::NoDriver`] when no driver handles them.
    pub fn get(&self, options: &ConnectionOptions) -> Result<Arc<dyn ConnectionFactory>> {
        self.find(options)?.ok_or_else(|| Error::NoDriver {
            driver: match options.get(DRIVER) {
                Some(OptionValue::Str(driver)) => Some(driver.clone()),
                _ => None,
            },
        })
    }
}

impl Default for ConnectionFactories {
    fn default() -> Self {
        Self::new().with_provider(MySqlConnectionFactoryProvider::new())
    }
}

impl fmt::Debug for ConnectionFactories {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionFactories")
            .field("drivers", &self.drivers().collect::<Vec<_>>())
            .finish()
    }
}
