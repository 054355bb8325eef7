//! Protocol error types.

use thiserror::Error;

/// Errors raised while encoding client messages or framing packets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ProtocolError {
    /// The buffer allocator could not provide the requested capacity.
    ///
    /// This is fatal to the in-flight command: nothing was written, and the
    /// same input will fail the same way again.
    #[error("buffer allocation failed: requested {requested} bytes (limit {limit})")]
    BufferAllocation {
        /// Requested capacity in bytes.
        requested: usize,
        /// Largest capacity the allocator will hand out.
        limit: usize,
    },

    /// Not enough bytes to read a complete structure.
    #[error("incomplete packet: expected {expected} bytes, got {actual}")]
    IncompletePacket {
        /// Bytes required.
        expected: usize,
        /// Bytes available.
        actual: usize,
    },

    /// Unknown command byte.
    #[error("invalid command code: 0x{0:02X}")]
    InvalidCommand(u8),

    /// A single packet cannot carry this many payload bytes.
    #[error("payload of {size} bytes exceeds the packet maximum of {max}")]
    PayloadTooLarge {
        /// Payload size in bytes.
        size: usize,
        /// Maximum payload size of one packet.
        max: usize,
    },
}

impl ProtocolError {
    /// Check if this error came from buffer allocation.
    #[must_use]
    pub fn is_allocation_failure(&self) -> bool {
        matches!(self, Self::BufferAllocation { .. })
    }
}
