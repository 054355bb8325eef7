//! Client error types.

use thiserror::Error;

/// Errors raised while turning connection options into a configuration.
///
/// These are always recoverable: the caller can supply corrected options
/// and try again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// No option set was supplied at all.
    #[error("connection options must not be absent")]
    MissingOptions,

    /// A required option is absent.
    #[error("missing required option `{option}`")]
    MissingRequired {
        /// Option name.
        option: &'static str,
    },

    /// The zero-date policy names no known member.
    #[error("invalid zeroDate `{value}`; expected one of EXCEPTION, USE_NULL, ROUND")]
    InvalidZeroDate {
        /// Rejected value as supplied.
        value: String,
    },

    /// An option is present but its value cannot be used.
    #[error("invalid value for option `{option}`: {reason}")]
    InvalidValue {
        /// Option name.
        option: &'static str,
        /// What was wrong with it.
        reason: String,
    },

    /// A connection URL could not be parsed.
    #[error("invalid connection URL: {0}")]
    InvalidUrl(String),
}

/// Errors that can occur in driver operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Protocol error.
    #[error("protocol error: {0}")]
    Protocol(#[from] mysql_protocol::ProtocolError),

    /// No registered driver accepts the options.
    #[error("no driver supports the connection options (driver: {})", .driver.as_deref().unwrap_or("<none>"))]
    NoDriver {
        /// Value of the `driver` option, if any.
        driver: Option<String>,
    },
}

impl Error {
    /// Check if this error came from option resolution.
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Check if this error came from message encoding.
    #[must_use]
    pub fn is_protocol_error(&self) -> bool {
        matches!(self, Self::Protocol(_))
    }

    /// Check if the session must be aborted.
    ///
    /// A failed encode leaves no partial state to resume from, so the
    /// in-flight command cannot be retried on the same connection.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        self.is_protocol_error()
    }
}

/// Result type for driver operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use mysql_protocol::ProtocolError;

    #[test]
    fn test_error_classification() {
        let config: Error = ConfigError::MissingRequired { option: "host" }.into();
        assert!(config.is_config_error());
        assert!(!config.is_fatal());

        let protocol: Error = ProtocolError::BufferAllocation {
            requested: 1,
            limit: 0,
        }
        .into();
        assert!(protocol.is_protocol_error());
        assert!(protocol.is_fatal());

        let no_driver = Error::NoDriver { driver: None };
        assert!(!no_driver.is_config_error());
        assert!(!no_driver.is_fatal());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ConfigError::MissingRequired { option: "user" }.to_string(),
            "missing required option `user`"
        );
        assert_eq!(
            Error::NoDriver {
                driver: Some("postgres".into())
            }
            .to_string(),
            "no driver supports the connection options (driver: postgres)"
        );
        assert_eq!(
            Error::NoDriver { driver: None }.to_string(),
            "no driver supports the connection options (driver: <none>)"
        );
    }
}
