//! Liveness check (`COM_PING`).

use bytes::Bytes;

use crate::buffer::BufferAllocator;
use crate::command::CommandCode;
use crate::error::ProtocolError;
use crate::message::{ClientMessage, encode_command};
use crate::session::Session;

static INSTANCE: PingMessage = PingMessage { _private: () };

/// Asks the server to answer with an OK packet.
#[derive(Debug, PartialEq, Eq)]
pub struct PingMessage {
    _private: (),
}

impl PingMessage {
    /// Get the shared instance.
    #[must_use]
    pub fn instance() -> &'static Self {
        &INSTANCE
    }
}

impl ClientMessage for PingMessage {
    fn resets_sequence(&self) -> bool {
        true
    }

    fn encode(
        &self,
        alloc: &dyn BufferAllocator,
        _session: &Session,
    ) -> Result<Bytes, ProtocolError> {
        encode_command(alloc, CommandCode::Ping, &[])
    }
}
