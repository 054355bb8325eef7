//! Connection configuration.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::ConfigError;

/// Default MySQL server port.
pub const DEFAULT_PORT: u16 = 3306;

/// How the server's all-zero date/time value (`0000-00-00 00:00:00`) is
/// interpreted on the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ZeroDate {
    /// Reading the value is an error.
    Exception,
    /// The value reads as SQL NULL.
    #[default]
    UseNull,
    /// The value is rounded to `0001-01-01 00:00:00`.
    Round,
}

impl ZeroDate {
    /// Every policy, in declaration order.
    pub const ALL: [Self; 3] = [Self::Exception, Self::UseNull, Self::Round];

    /// Get the canonical option name of the policy.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Exception => "EXCEPTION",
            Self::UseNull => "USE_NULL",
            Self::Round => "ROUND",
        }
    }

    /// Look up a policy by name, ignoring case.
    #[must_use]
    pub fn from_name(value: &str) -> Option<Self> {
        match value.to_ascii_uppercase().as_str() {
            "EXCEPTION" => Some(Self::Exception),
            "USE_NULL" => Some(Self::UseNull),
            "ROUND" => Some(Self::Round),
            _ => None,
        }
    }
}

impl FromStr for ZeroDate {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ConfigError::InvalidZeroDate {
            value: s.to_string(),
        })
    }
}

impl fmt::Display for ZeroDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A password.
///
/// Never printed by `Debug`. With the `zeroize` feature the memory is
/// cleared when the value is dropped.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Wrap a password.
    pub fn new(password: impl Into<String>) -> Self {
        Self(password.into())
    }

    /// Get the password text.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password([REDACTED])")
    }
}

#[cfg(feature = "zeroize")]
impl Drop for Password {
    fn drop(&mut self) {
        zeroize::Zeroize::zeroize(&mut self.0);
    }
}

/// Resolved configuration for connecting to a MySQL server.
///
/// Immutable once built. Obtain one through [`ConnectConfig::builder`] or
/// [`resolve`](crate::resolve).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectConfig {
    host: String,
    port: u16,
    username: String,
    password: Option<Password>,
    database: Option<String>,
    connect_timeout: Option<Duration>,
    ssl: bool,
    zero_date: ZeroDate,
}

impl ConnectConfig {
    /// Start building a configuration.
    #[must_use]
    pub fn builder() -> ConnectConfigBuilder {
        ConnectConfigBuilder::default()
    }

    /// Get the server host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Get the server port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Get the user name.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Get the password, if any.
    #[must_use]
    pub fn password(&self) -> Option<&Password> {
        self.password.as_ref()
    }

    /// Get the default schema, if any.
    #[must_use]
    pub fn database(&self) -> Option<&str> {
        self.database.as_deref()
    }

    /// Get the connect timeout, if any.
    #[must_use]
    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout
    }

    /// Check if TLS is enabled.
    #[must_use]
    pub fn ssl(&self) -> bool {
        self.ssl
    }

    /// Get the zero-date policy.
    #[must_use]
    pub fn zero_date(&self) -> ZeroDate {
        self.zero_date
    }
}

/// Builder for [`ConnectConfig`].
///
/// Setters only record values. Every check happens in [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct ConnectConfigBuilder {
    host: Option<String>,
    port: Option<u16>,
    username: Option<String>,
    password: Option<Password>,
    database: Option<String>,
    connect_timeout: Option<Duration>,
    ssl: bool,
    zero_date: Option<ZeroDate>,
}

impl ConnectConfigBuilder {
    /// Set the server host.
    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Set the server port.
    #[must_use]
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the user name.
    #[must_use]
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Set the password.
    #[must_use]
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(Password::new(password));
        self
    }

    /// Set the default schema.
    #[must_use]
    pub fn database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    /// Set the connect timeout.
    #[must_use]
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Enable TLS.
    #[must_use]
    pub fn enable_ssl(mut self) -> Self {
        self.ssl = true;
        self
    }

    /// Set the zero-date policy.
    #[must_use]
    pub fn zero_date(mut self, zero_date: ZeroDate) -> Self {
        self.zero_date = Some(zero_date);
        self
    }

    /// Validate and freeze the configuration.
    pub fn build(self) -> Result<ConnectConfig, ConfigError> {
        let host = self
            .host
            .ok_or(ConfigError::MissingRequired { option: "host" })?;
        let username = self
            .username
            .ok_or(ConfigError::MissingRequired { option: "user" })?;

        Ok(ConnectConfig {
            host,
            port: self.port.unwrap_or(DEFAULT_PORT),
            username,
            password: self.password,
            database: self.database,
            connect_timeout: self.connect_timeout,
            ssl: self.ssl,
            zero_date: self.zero_date.unwrap_or_default(),
        })
    }
}
