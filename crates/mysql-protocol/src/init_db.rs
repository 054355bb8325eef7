//! Default schema change (`COM_INIT_DB`).
//!
//! Payload layout:
//! - 1 byte: command code `0x02`
//! - rest of packet: schema name

use bytes::Bytes;

use crate::buffer::BufferAllocator;
use crate::command::CommandCode;
use crate::error::ProtocolError;
use crate::message::{ClientMessage, encode_command};
use crate::session::Session;

/// Changes the default schema of the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitDbMessage {
    database: String,
}

impl InitDbMessage {
    /// Create a new schema change request.
    #[must_use]
    pub fn new(database: impl Into<String>) -> Self {
        Self {
            database: database.into(),
        }
    }

    /// Get the schema name.
    #[must_use]
    pub fn database(&self) -> &str {
        &self.database
    }
}

impl ClientMessage for InitDbMessage {
    fn resets_sequence(&self) -> bool {
        true
    }

    fn encode(
        &self,
        alloc: &dyn BufferAllocator,
        _session: &Session,
    ) -> Result<Bytes, ProtocolError> {
        encode_command(alloc, CommandCode::InitDb, self.database.as_bytes())
    }
}
