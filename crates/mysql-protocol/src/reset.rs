//! Session state reset (`COM_RESET_CONNECTION`).

use bytes::Bytes;

use crate::buffer::BufferAllocator;
use crate::command::CommandCode;
use crate::error::ProtocolError;
use crate::message::{ClientMessage, encode_command};
use crate::session::Session;

static INSTANCE: ResetConnectionMessage = ResetConnectionMessage { _private: () };

/// Resets session state (user variables, temporary tables, prepared
/// statements) without re-authenticating.
#[derive(Debug, PartialEq, Eq)]
pub struct ResetConnectionMessage {
    _private: (),
}

impl ResetConnectionMessage {
    /// Get the shared instance.
    #[must_use]
    pub fn instance() -> &'static Self {
        &INSTANCE
    }
}

impl ClientMessage for ResetConnectionMessage {
    fn resets_sequence(&self) -> bool {
        true
    }

    fn encode(
        &self,
        alloc: &dyn BufferAllocator,
        _session: &Session,
    ) -> Result<Bytes, ProtocolError> {
        encode_command(alloc, CommandCode::ResetConnection, &[])
    }
}
