//! The client message capability.

use core::fmt;

use bytes::{BufMut, Bytes};

use crate::buffer::BufferAllocator;
use crate::command::CommandCode;
use crate::error::ProtocolError;
use crate::session::Session;

/// A command the client can send to the server.
///
/// Implementations produce the payload of one logical message. The 4-byte
/// packet header (3-byte little-endian length plus sequence id) is added by
/// the framing layer, see [`packet::write_message`](crate::packet::write_message).
///
/// The trait is object safe so the framing layer can accept any command,
/// including ones defined outside this crate.
pub trait ClientMessage: fmt::Debug + Send + Sync {
    /// Whether sending this message starts a new command phase.
    ///
    /// When `true`, the packet sequence counter is reset to zero before the
    /// message is framed. When `false`, the message continues the sequence
    /// of the current phase.
    fn resets_sequence(&self) -> bool;

    /// Encode the message payload.
    ///
    /// Must be a pure function of the message's fields and `session`. The
    /// returned bytes exclude packet framing.
    fn encode(
        &self,
        alloc: &dyn BufferAllocator,
        session: &Session,
    ) -> Result<Bytes, ProtocolError>;
}

/// Encode a command byte followed by a rest-of-packet string.
pub(crate) fn encode_command(
    alloc: &dyn BufferAllocator,
    code: CommandCode,
    body: &[u8],
) -> Result<Bytes, ProtocolError> {
    let mut buf = alloc.buffer(1 + body.len())?;
    buf.put_u8(code.as_u8());
    buf.put_slice(body);
    Ok(Bytes::from(buf))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::buffer::HeapAllocator;

    #[test]
    fn test_encode_command_layout() {
        let payload = encode_command(&HeapAllocator::new(), CommandCode::InitDb, b"app").unwrap();
        assert_eq!(&payload[..], &[0x02, b'a', b'p', b'p']);
    }

    #[test]
    fn test_encode_command_requests_exact_size() {
        // A limit equal to the payload size is enough.
        let payload =
            encode_command(&HeapAllocator::with_limit(4), CommandCode::Query, b"abc").unwrap();
        assert_eq!(payload.len(), 4);

        let err =
            encode_command(&HeapAllocator::with_limit(3), CommandCode::Query, b"abc").unwrap_err();
        assert_eq!(
            err,
            ProtocolError::BufferAllocation {
                requested: 4,
                limit: 3
            }
        );
    }
}
