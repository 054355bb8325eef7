//! Connection options.
//!
//! A [`ConnectionOptions`] is the loosely-typed input to driver selection and
//! configuration resolution: a map from option name to a string, integer,
//! boolean or duration value. It can be built programmatically or parsed from
//! a URL:
//!
//! ```text
//! mysql://[user[:password]@]host[:port][/database][?key=value[&key=value...]]
//! ```

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use crate::error::ConfigError;

/// Name of a connection option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OptionName(&'static str);

impl OptionName {
    /// Create an option name.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// Get the option name as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for OptionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Driver selector; must equal the driver's identifier.
pub const DRIVER: OptionName = OptionName::new("driver");
/// Server host name or address.
pub const HOST: OptionName = OptionName::new("host");
/// Server port.
pub const PORT: OptionName = OptionName::new("port");
/// User name.
pub const USER: OptionName = OptionName::new("user");
/// Password.
pub const PASSWORD: OptionName = OptionName::new("password");
/// Default schema.
pub const DATABASE: OptionName = OptionName::new("database");
/// Timeout for establishing the connection.
pub const CONNECT_TIMEOUT: OptionName = OptionName::new("connectTimeout");
/// Whether to use TLS.
pub const SSL: OptionName = OptionName::new("ssl");
/// Handling of the server's all-zero date/time value.
pub const ZERO_DATE: OptionName = OptionName::new("zeroDate");

/// A single option value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    /// Text value.
    Str(String),
    /// Integer value.
    Int(i64),
    /// Boolean value.
    Bool(bool),
    /// Duration value.
    Duration(Duration),
}

impl OptionValue {
    /// Get a short name for the kind of value held.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Str(_) => "string",
            Self::Int(_) => "integer",
            Self::Bool(_) => "boolean",
            Self::Duration(_) => "duration",
        }
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for OptionValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u16> for OptionValue {
    fn from(value: u16) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Duration> for OptionValue {
    fn from(value: Duration) -> Self {
        Self::Duration(value)
    }
}

/// A set of connection options.
///
/// Typed accessors accept the natural kind of each value and also its text
/// form, so options parsed from a URL resolve the same way as options built
/// in code.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ConnectionOptions {
    options: HashMap<&'static str, OptionValue>,
}

impl ConnectionOptions {
    /// Create an empty option set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an option, replacing any previous value.
    #[must_use]
    pub fn option(mut self, name: OptionName, value: impl Into<OptionValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Set an option in place, replacing any previous value.
    pub fn set(&mut self, name: OptionName, value: impl Into<OptionValue>) {
        self.options.insert(name.name(), value.into());
    }

    /// Get the raw value of an option.
    #[must_use]
    pub fn get(&self, name: OptionName) -> Option<&OptionValue> {
        self.options.get(name.name())
    }

    /// Check if an option is present.
    #[must_use]
    pub fn has(&self, name: OptionName) -> bool {
        self.options.contains_key(name.name())
    }

    /// Get the number of options present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Check if no options are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Get a string option.
    pub fn get_str(&self, name: OptionName) -> Result<Option<&str>, ConfigError> {
        match self.get(name) {
            None => Ok(None),
            Some(OptionValue::Str(s)) => Ok(Some(s)),
            Some(other) => Err(wrong_kind(name, "string", other)),
        }
    }

    /// Get a string option that must be present.
    pub fn required_str(&self, name: OptionName) -> Result<&str, ConfigError> {
        self.get_str(name)?.ok_or(ConfigError::MissingRequired {
            option: name.name(),
        })
    }

    /// Get an integer option.
    pub fn get_int(&self, name: OptionName) -> Result<Option<i64>, ConfigError> {
        match self.get(name) {
            None => Ok(None),
            Some(OptionValue::Int(v)) => Ok(Some(*v)),
            Some(OptionValue::Str(s)) => {
                s.trim()
                    .parse()
                    .map(Some)
                    .map_err(|_| ConfigError::InvalidValue {
                        option: name.name(),
                        reason: format!("`{s}` is not an integer"),
                    })
            }
            Some(other) => Err(wrong_kind(name, "integer", other)),
        }
    }

    /// Get a boolean option.
    pub fn get_bool(&self, name: OptionName) -> Result<Option<bool>, ConfigError> {
        match self.get(name) {
            None => Ok(None),
            Some(OptionValue::Bool(v)) => Ok(Some(*v)),
            Some(OptionValue::Str(s)) => parse_bool(s).map(Some).ok_or_else(|| {
                ConfigError::InvalidValue {
                    option: name.name(),
                    reason: format!("`{s}` is not a boolean"),
                }
            }),
            Some(other) => Err(wrong_kind(name, "boolean", other)),
        }
    }

    /// Get a duration option.
    ///
    /// Integers are read as whole seconds. Text accepts `<n>`, `<n>s` and
    /// `<n>ms`.
    pub fn get_duration(&self, name: OptionName) -> Result<Option<Duration>, ConfigError> {
        match self.get(name) {
            None => Ok(None),
            Some(OptionValue::Duration(d)) => Ok(Some(*d)),
            Some(OptionValue::Int(secs)) => u64::try_from(*secs)
                .map(|secs| Some(Duration::from_secs(secs)))
                .map_err(|_| ConfigError::InvalidValue {
                    option: name.name(),
                    reason: format!("{secs} is not a valid duration"),
                }),
            Some(OptionValue::Str(s)) => parse_duration(s).map(Some).ok_or_else(|| {
                ConfigError::InvalidValue {
                    option: name.name(),
                    reason: format!("`{s}` is not a valid duration"),
                }
            }),
            Some(other) => Err(wrong_kind(name, "duration", other)),
        }
    }

    /// Parse options from a connection URL.
    ///
    /// The scheme becomes the `driver` option. Query parameters keep their
    /// text form and are interpreted during resolution.
    pub fn parse(url: &str) -> Result<Self, ConfigError> {
        let (scheme, rest) = url
            .split_once("://")
            .ok_or_else(|| ConfigError::InvalidUrl(format!("missing scheme in `{url}`")))?;
        if scheme.is_empty() {
            return Err(ConfigError::InvalidUrl(format!("empty scheme in `{url}`")));
        }

        // Schemes are case-insensitive
        let mut options = Self::new().option(DRIVER, scheme.to_ascii_lowercase());

        let (location, query) = match rest.split_once('?') {
            Some((location, query)) => (location, Some(query)),
            None => (rest, None),
        };
        let (authority, path) = match location.split_once('/') {
            Some((authority, path)) => (authority, Some(path)),
            None => (location, None),
        };

        let host_port = match authority.rsplit_once('@') {
            Some((userinfo, host_port)) => {
                let (user, password) = match userinfo.split_once(':') {
                    Some((user, password)) => (user, Some(password)),
                    None => (userinfo, None),
                };
                if !user.is_empty() {
                    options.set(USER, percent_decode(user)?);
                }
                if let Some(password) = password {
                    options.set(PASSWORD, percent_decode(password)?);
                }
                host_port
            }
            None => authority,
        };

        let (host, port) = split_host_port(host_port)?;
        if !host.is_empty() {
            options.set(HOST, percent_decode(host)?);
        }
        if let Some(port) = port {
            options.set(PORT, port);
        }

        let path = path.map(|p| p.strip_suffix('/').unwrap_or(p));
        if let Some(database) = path.filter(|p| !p.is_empty()) {
            options.set(DATABASE, percent_decode(database)?);
        }

        for pair in query.unwrap_or_default().split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair
                .split_once('=')
                .ok_or_else(|| ConfigError::InvalidUrl(format!("invalid query parameter `{pair}`")))?;
            match known_option(key) {
                Some(name) => options.set(name, percent_decode(value)?),
                None => {
                    // Ignore unknown options for forward compatibility
                    tracing::debug!(key = key, "ignoring unknown connection URL option");
                }
            }
        }

        Ok(options)
    }
}

impl fmt::Debug for ConnectionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never expose sensitive data in debug output
        let mut map = f.debug_map();
        for (name, value) in &self.options {
            if *name == PASSWORD.name() {
                map.entry(name, &"[REDACTED]");
            } else {
                map.entry(name, value);
            }
        }
        map.finish()
    }
}

fn wrong_kind(name: OptionName, expected: &str, actual: &OptionValue) -> ConfigError {
    ConfigError::InvalidValue {
        option: name.name(),
        reason: format!("expected {expected}, got {}", actual.kind()),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("yes") || value == "1" {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") || value.eq_ignore_ascii_case("no") || value == "0"
    {
        Some(false)
    } else {
        None
    }
}

fn parse_duration(value: &str) -> Option<Duration> {
    let value = value.trim();
    if let Some(millis) = value.strip_suffix("ms") {
        return millis.trim().parse().ok().map(Duration::from_millis);
    }
    let secs = value.strip_suffix('s').unwrap_or(value);
    secs.trim().parse().ok().map(Duration::from_secs)
}

fn known_option(key: &str) -> Option<OptionName> {
    [
        DRIVER,
        HOST,
        PORT,
        USER,
        PASSWORD,
        DATABASE,
        CONNECT_TIMEOUT,
        SSL,
        ZERO_DATE,
    ]
    .into_iter()
    .find(|name| name.name() == key)
}

fn split_host_port(host_port: &str) -> Result<(&str, Option<u16>), ConfigError> {
    // Bracketed IPv6 literal
    if let Some(rest) = host_port.strip_prefix('[') {
        let (host, after) = rest
            .split_once(']')
            .ok_or_else(|| ConfigError::InvalidUrl(format!("unterminated IPv6 host `{host_port}`")))?;
        return match after.strip_prefix(':') {
            Some(port) => Ok((host, Some(parse_port(port)?))),
            None if after.is_empty() => Ok((host, None)),
            None => Err(ConfigError::InvalidUrl(format!("invalid host `{host_port}`"))),
        };
    }

    match host_port.rsplit_once(':') {
        // IPv6 literals must be bracketed
        Some((host, _)) if host.contains(':') => Err(ConfigError::InvalidUrl(format!(
            "IPv6 host `{host_port}` must be enclosed in brackets"
        ))),
        Some((host, port)) => Ok((host, Some(parse_port(port)?))),
        None => Ok((host_port, None)),
    }
}

fn parse_port(port: &str) -> Result<u16, ConfigError> {
    port.parse()
        .map_err(|_| ConfigError::InvalidUrl(format!("invalid port `{port}`")))
}

fn percent_decode(value: &str) -> Result<String, ConfigError> {
    let bytes = value.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = bytes
                .get(i + 1..i + 3)
                .and_then(|h| std::str::from_utf8(h).ok())
                .and_then(|h| u8::from_str_radix(h, 16).ok())
                .ok_or_else(|| ConfigError::InvalidUrl(format!("invalid escape in `{value}`")))?;
            out.push(hex);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(out)
        .map_err(|_| ConfigError::InvalidUrl(format!("`{value}` is not valid UTF-8")))
}
