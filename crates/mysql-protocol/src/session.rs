//! Session context supplied to message encoders.

use bitflags::bitflags;

/// Collation ids commonly negotiated as the connection character set.
pub mod charset {
    /// `utf8mb3_general_ci`.
    pub const UTF8_GENERAL_CI: u8 = 33;
    /// `utf8mb4_general_ci`.
    pub const UTF8MB4_GENERAL_CI: u8 = 45;
    /// `binary`.
    pub const BINARY: u8 = 63;
    /// `utf8mb4_0900_ai_ci` (MySQL 8.0 default).
    pub const UTF8MB4_0900_AI_CI: u8 = 255;
}

/// Handshake protocol version spoken by every supported server.
pub const PROTOCOL_VERSION_10: u8 = 10;

bitflags! {
    /// Capability flags exchanged during the handshake.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Capabilities: u32 {
        /// Use the improved version of old password authentication.
        const LONG_PASSWORD = 1;
        /// Report found rows instead of affected rows.
        const FOUND_ROWS = 1 << 1;
        /// Get all column flags.
        const LONG_FLAG = 1 << 2;
        /// A schema name may be specified on connect.
        const CONNECT_WITH_DB = 1 << 3;
        /// Disallow `database.table.column`.
        const NO_SCHEMA = 1 << 4;
        /// Compression protocol supported.
        const COMPRESS = 1 << 5;
        /// Special handling of ODBC behavior.
        const ODBC = 1 << 6;
        /// `LOAD DATA LOCAL` is allowed.
        const LOCAL_FILES = 1 << 7;
        /// Ignore spaces before `(`.
        const IGNORE_SPACE = 1 << 8;
        /// 4.1 protocol.
        const PROTOCOL_41 = 1 << 9;
        /// Interactive client.
        const INTERACTIVE = 1 << 10;
        /// Switch to TLS after the handshake.
        const SSL = 1 << 11;
        /// Do not issue `SIGPIPE` on network failures.
        const IGNORE_SIGPIPE = 1 << 12;
        /// Client knows about transactions.
        const TRANSACTIONS = 1 << 13;
        /// Reserved (old 4.1 protocol flag).
        const RESERVED = 1 << 14;
        /// 4.1 authentication.
        const SECURE_CONNECTION = 1 << 15;
        /// Multiple statements per `COM_QUERY`.
        const MULTI_STATEMENTS = 1 << 16;
        /// Multiple result sets per `COM_QUERY`.
        const MULTI_RESULTS = 1 << 17;
        /// Multiple result sets per `COM_STMT_EXECUTE`.
        const PS_MULTI_RESULTS = 1 << 18;
        /// Pluggable authentication.
        const PLUGIN_AUTH = 1 << 19;
        /// Connection attributes.
        const CONNECT_ATTRS = 1 << 20;
        /// Length-encoded authentication response.
        const PLUGIN_AUTH_LENENC_CLIENT_DATA = 1 << 21;
        /// Expired passwords are handled.
        const CAN_HANDLE_EXPIRED_PASSWORDS = 1 << 22;
        /// Session state change tracking.
        const SESSION_TRACK = 1 << 23;
        /// OK packets replace EOF packets.
        const DEPRECATE_EOF = 1 << 24;
        /// Result set metadata may be omitted.
        const OPTIONAL_RESULTSET_METADATA = 1 << 25;
        /// zstd compression.
        const ZSTD_COMPRESSION_ALGORITHM = 1 << 26;
        /// Query attributes are sent with `COM_QUERY` and `COM_STMT_EXECUTE`.
        const QUERY_ATTRIBUTES = 1 << 27;
    }
}

impl Capabilities {
    /// Capabilities a modern client requests by default.
    pub const DEFAULT_CLIENT: Self = Self::PROTOCOL_41
        .union(Self::SECURE_CONNECTION)
        .union(Self::LONG_PASSWORD)
        .union(Self::TRANSACTIONS)
        .union(Self::MULTI_STATEMENTS)
        .union(Self::MULTI_RESULTS)
        .union(Self::PS_MULTI_RESULTS)
        .union(Self::PLUGIN_AUTH)
        .union(Self::PLUGIN_AUTH_LENENC_CLIENT_DATA)
        .union(Self::CONNECT_WITH_DB)
        .union(Self::DEPRECATE_EOF);
}

/// Negotiated state of a live session, as seen by message encoders.
///
/// Owned by the session collaborator and handed to
/// [`ClientMessage::encode`](crate::ClientMessage::encode) by reference.
/// Encoders only read it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    charset: u8,
    capabilities: Capabilities,
    protocol_version: u8,
}

impl Session {
    /// Create a session context.
    #[must_use]
    pub const fn new(charset: u8, capabilities: Capabilities, protocol_version: u8) -> Self {
        Self {
            charset,
            capabilities,
            protocol_version,
        }
    }

    /// Set the connection character set.
    #[must_use]
    pub const fn with_charset(mut self, charset: u8) -> Self {
        self.charset = charset;
        self
    }

    /// Set the negotiated capabilities.
    #[must_use]
    pub const fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    /// Get the connection character set (collation id).
    #[must_use]
    pub const fn charset(&self) -> u8 {
        self.charset
    }

    /// Get the negotiated capabilities.
    #[must_use]
    pub const fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Get the handshake protocol version.
    #[must_use]
    pub const fn protocol_version(&self) -> u8 {
        self.protocol_version
    }

    /// Check if a capability was negotiated.
    #[must_use]
    pub const fn has(&self, capability: Capabilities) -> bool {
        self.capabilities.contains(capability)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(
            charset::UTF8MB4_GENERAL_CI,
            Capabilities::DEFAULT_CLIENT,
            PROTOCOL_VERSION_10,
        )
    }
}
