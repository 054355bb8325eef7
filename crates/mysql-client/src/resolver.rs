//! Resolution of connection options into a [`ConnectConfig`].

use crate::config::{ConnectConfig, ZeroDate};
use crate::error::ConfigError;
use crate::options::{
    CONNECT_TIMEOUT, ConnectionOptions, DATABASE, HOST, PASSWORD, PORT, SSL, USER, ZERO_DATE,
};

/// Resolve an option set into a validated configuration.
///
/// Optional values are transformed and recorded first, then `host` and
/// `user` are required, and a single final step checks and freezes the
/// result. Either a complete configuration is returned or nothing is.
///
/// # Errors
///
/// Returns [`ConfigError`] when `options` is `None`, when `host` or `user`
/// is missing, when `zeroDate` names no [`ZeroDate`] policy, or when a value
/// has the wrong kind.
///
/// # Example
///
/// ```
/// use mysql_client::options::{ConnectionOptions, HOST, USER, ZERO_DATE};
/// use mysql_client::{ZeroDate, resolve};
///
/// let options = ConnectionOptions::new()
///     .option(HOST, "localhost")
///     .option(USER, "root")
///     .option(ZERO_DATE, "round");
///
/// let config = resolve(Some(&options)).unwrap();
/// assert_eq!(config.port(), 3306);
/// assert_eq!(config.zero_date(), ZeroDate::Round);
/// ```
pub fn resolve(options: Option<&ConnectionOptions>) -> Result<ConnectConfig, ConfigError> {
    let options = options.ok_or(ConfigError::MissingOptions)?;
    let mut builder = ConnectConfig::builder();

    if let Some(zero_date) = options.get_str(ZERO_DATE)? {
        builder = builder.zero_date(zero_date.parse::<ZeroDate>()?);
    }

    if let Some(port) = options.get_int(PORT)? {
        builder = builder.port(to_port(port)?);
    }

    if let Some(password) = options.get_str(PASSWORD)? {
        builder = builder.password(password);
    }

    // TLS only when explicitly requested.
    if options.get_bool(SSL)? == Some(true) {
        builder = builder.enable_ssl();
    }

    if let Some(timeout) = options.get_duration(CONNECT_TIMEOUT)? {
        builder = builder.connect_timeout(timeout);
    }

    if let Some(database) = options.get_str(DATABASE)? {
        builder = builder.database(database);
    }

    let config = builder
        .host(options.required_str(HOST)?)
        .username(options.required_str(USER)?)
        .build()?;

    tracing::debug!(
        host = config.host(),
        port = config.port(),
        database = ?config.database(),
        ssl = config.ssl(),
        zero_date = %config.zero_date(),
        "resolved connection configuration"
    );

    Ok(config)
}

fn to_port(value: i64) -> Result<u16, ConfigError> {
    u16::try_from(value)
        .ok()
        .filter(|port| *port != 0)
        .ok_or_else(|| ConfigError::InvalidValue {
            option: PORT.name(),
            reason: format!("{value} is not a valid TCP port"),
        })
}
