//! Command codes.
//!
//! Every command payload begins with a single command byte, followed by
//! zero or more command-specific fields in a fixed order.

use crate::error::ProtocolError;

/// MySQL command code (`COM_*`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CommandCode {
    /// Internal server state.
    Sleep = 0x00,
    /// Close the session.
    Quit = 0x01,
    /// Change the default schema.
    InitDb = 0x02,
    /// Text protocol query.
    Query = 0x03,
    /// List table columns (deprecated).
    FieldList = 0x04,
    /// Create a schema (deprecated).
    CreateDb = 0x05,
    /// Drop a schema (deprecated).
    DropDb = 0x06,
    /// Flush server state (deprecated).
    Refresh = 0x07,
    /// Shut the server down (deprecated).
    Shutdown = 0x08,
    /// Human-readable server statistics.
    Statistics = 0x09,
    /// List active threads (deprecated).
    ProcessInfo = 0x0A,
    /// Internal server state.
    Connect = 0x0B,
    /// Kill a connection (deprecated).
    ProcessKill = 0x0C,
    /// Dump debug information to the server log.
    Debug = 0x0D,
    /// Check the server is alive.
    Ping = 0x0E,
    /// Internal server state.
    Time = 0x0F,
    /// Internal server state.
    DelayedInsert = 0x10,
    /// Re-authenticate as another user.
    ChangeUser = 0x11,
    /// Request a binlog stream.
    BinlogDump = 0x12,
    /// Internal server state.
    TableDump = 0x13,
    /// Internal server state.
    ConnectOut = 0x14,
    /// Register a replica.
    RegisterSlave = 0x15,
    /// Prepare a statement.
    StmtPrepare = 0x16,
    /// Execute a prepared statement.
    StmtExecute = 0x17,
    /// Send long parameter data for a prepared statement.
    StmtSendLongData = 0x18,
    /// Deallocate a prepared statement.
    StmtClose = 0x19,
    /// Reset a prepared statement's accumulated data.
    StmtReset = 0x1A,
    /// Set a session option.
    SetOption = 0x1B,
    /// Fetch rows from a cursor.
    StmtFetch = 0x1C,
    /// Internal server state.
    Daemon = 0x1D,
    /// Request a GTID-based binlog stream.
    BinlogDumpGtid = 0x1E,
    /// Reset the session state.
    ResetConnection = 0x1F,
}

impl CommandCode {
    /// Create a command code from a raw byte value.
    pub fn from_u8(value: u8) -> Result<Self, ProtocolError> {
        match value {
            0x00 => Ok(Self::Sleep),
            0x01 => Ok(Self::Quit),
            0x02 => Ok(Self::InitDb),
            0x03 => Ok(Self::Query),
            0x04 => Ok(Self::FieldList),
            0x05 => Ok(Self::CreateDb),
            0x06 => Ok(Self::DropDb),
            0x07 => Ok(Self::Refresh),
            0x08 => Ok(Self::Shutdown),
            0x09 => Ok(Self::Statistics),
            0x0A => Ok(Self::ProcessInfo),
            0x0B => Ok(Self::Connect),
            0x0C => Ok(Self::ProcessKill),
            0x0D => Ok(Self::Debug),
            0x0E => Ok(Self::Ping),
            0x0F => Ok(Self::Time),
            0x10 => Ok(Self::DelayedInsert),
            0x11 => Ok(Self::ChangeUser),
            0x12 => Ok(Self::BinlogDump),
            0x13 => Ok(Self::TableDump),
            0x14 => Ok(Self::ConnectOut),
            0x15 => Ok(Self::RegisterSlave),
            0x16 => Ok(Self::StmtPrepare),
            0x17 => Ok(Self::StmtExecute),
            0x18 => Ok(Self::StmtSendLongData),
            0x19 => Ok(Self::StmtClose),
            0x1A => Ok(Self::StmtReset),
            0x1B => Ok(Self::SetOption),
            0x1C => Ok(Self::StmtFetch),
            0x1D => Ok(Self::Daemon),
            0x1E => Ok(Self::BinlogDumpGtid),
            0x1F => Ok(Self::ResetConnection),
            _ => Err(ProtocolError::InvalidCommand(value)),
        }
    }

    /// Get the raw command byte.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}
