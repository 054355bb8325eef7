//! Session termination (`COM_QUIT`).

use bytes::Bytes;

use crate::buffer::BufferAllocator;
use crate::command::CommandCode;
use crate::error::ProtocolError;
use crate::message::{ClientMessage, encode_command};
use crate::session::Session;

static INSTANCE: ExitMessage = ExitMessage { _private: () };

/// Tells the server the client is closing the session.
///
/// Carries no fields. There is exactly one instance, obtained with
/// [`ExitMessage::instance`]; it is immutable and can be shared by any number
/// of sessions without synchronization.
///
/// ```
/// use mysql_protocol::{ClientMessage, ExitMessage, HeapAllocator, Session};
///
/// let payload = ExitMessage::instance()
///     .encode(&HeapAllocator::new(), &Session::default())
///     .unwrap();
/// assert_eq!(&payload[..], &[0x01]);
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct ExitMessage {
    _private: (),
}

impl ExitMessage {
    /// Get the shared instance.
    #[must_use]
    pub fn instance() -> &'static Self {
        &INSTANCE
    }
}

impl ClientMessage for ExitMessage {
    fn resets_sequence(&self) -> bool {
        true
    }

    fn encode(
        &self,
        alloc: &dyn BufferAllocator,
        _session: &Session,
    ) -> Result<Bytes, ProtocolError> {
        encode_command(alloc, CommandCode::Quit, &[])
    }
}
