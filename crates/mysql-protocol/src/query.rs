//! Text protocol query (`COM_QUERY`).
//!
//! Payload layout:
//! - 1 byte: command code `0x03`
//! - if `CLIENT_QUERY_ATTRIBUTES` was negotiated: length-encoded parameter
//!   count (always 0 here) and parameter set count (always 1)
//! - rest of packet: statement text
//!
//! The statement text is sent as-is; nothing here inspects it.

use bytes::{BufMut, Bytes};

use crate::buffer::BufferAllocator;
use crate::command::CommandCode;
use crate::error::ProtocolError;
use crate::message::ClientMessage;
use crate::session::{Capabilities, Session};

/// Bytes written for an empty query attribute block.
const EMPTY_ATTRIBUTES: [u8; 2] = [0x00, 0x01];

/// Executes a statement using the text protocol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryMessage {
    sql: String,
}

impl QueryMessage {
    /// Create a new query.
    #[must_use]
    pub fn new(sql: impl Into<String>) -> Self {
        Self { sql: sql.into() }
    }

    /// Get the statement text.
    #[must_use]
    pub fn sql(&self) -> &str {
        &self.sql
    }
}

impl ClientMessage for QueryMessage {
    fn resets_sequence(&self) -> bool {
        true
    }

    fn encode(
        &self,
        alloc: &dyn BufferAllocator,
        session: &Session,
    ) -> Result<Bytes, ProtocolError> {
        let attributes: &[u8] = if session.has(Capabilities::QUERY_ATTRIBUTES) {
            &EMPTY_ATTRIBUTES
        } else {
            &[]
        };

        let mut buf = alloc.buffer(1 + attributes.len() + self.sql.len())?;
        buf.put_u8(CommandCode::Query.as_u8());
        buf.put_slice(attributes);
        buf.put_slice(self.sql.as_bytes());
        Ok(Bytes::from(buf))
    }
}
