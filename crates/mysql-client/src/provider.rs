//! Driver registration.
//!
//! A [`ConnectionFactoryProvider`] lets a generic registry pick a driver from
//! an option set. Probing is split from creation: [`supports`] is cheap and
//! never fails, so a registry can ask many drivers; [`create`] does the full
//! validation.
//!
//! [`supports`]: ConnectionFactoryProvider::supports
//! [`create`]: ConnectionFactoryProvider::create

use std::sync::Arc;

use crate::config::ZeroDate;
use crate::error::{ConfigError, Result};
use crate::factory::{ConnectionFactory, MySqlConnectionFactory};
use crate::options::{ConnectionOptions, DRIVER, OptionValue, ZERO_DATE};
use crate::resolver::resolve;

/// Driver identifier matched against the `driver` option.
pub const MYSQL_DRIVER: &str = "mysql";

/// A driver entry point for a connection factory registry.
pub trait ConnectionFactoryProvider: Send + Sync {
    /// Get the driver identifier.
    fn driver(&self) -> &'static str;

    /// Check whether this driver handles the options.
    ///
    /// Must not fail and must not require connection fields; those are
    /// checked by [`create`](Self::create).
    fn supports(&self, options: &ConnectionOptions) -> bool;

    /// Create a connection factory from the options.
    ///
    /// Performs full validation regardless of whether `supports` was called.
    fn create(&self, options: &ConnectionOptions) -> Result<Arc<dyn ConnectionFactory>>;
}

/// Provider for [`MySqlConnectionFactory`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MySqlConnectionFactoryProvider;

impl MySqlConnectionFactoryProvider {
    /// Create the provider.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Create a MySQL connection factory from the options.
    pub fn create_factory(
        &self,
        options: &ConnectionOptions,
    ) -> std::result::Result<MySqlConnectionFactory, ConfigError> {
        resolve(Some(options)).map(MySqlConnectionFactory::new)
    }
}

impl ConnectionFactoryProvider for MySqlConnectionFactoryProvider {
    fn driver(&self) -> &'static str {
        MYSQL_DRIVER
    }

    fn supports(&self, options: &ConnectionOptions) -> bool {
        match options.get(DRIVER) {
            Some(OptionValue::Str(driver)) if driver == MYSQL_DRIVER => {}
            _ => return false,
        }

        match options.get(ZERO_DATE) {
            None => true,
            Some(OptionValue::Str(value)) if ZeroDate::from_name(value).is_some() => true,
            Some(value) => {
                tracing::debug!(zero_date = ?value, "mysql driver rejects zeroDate option");
                false
            }
        }
    }

    fn create(&self, options: &ConnectionOptions) -> Result<Arc<dyn ConnectionFactory>> {
        let factory = self.create_factory(options)?;
        Ok(Arc::new(factory))
    }
}
