//! Buffer allocation for message encoding.
//!
//! Messages never allocate on their own: they ask a [`BufferAllocator`] for a
//! buffer of the exact size they need and write into it. Surrounding code may
//! back this with a shared pool; the default [`HeapAllocator`] reserves fresh
//! heap memory and reports failure instead of aborting.

use crate::error::ProtocolError;

/// Largest buffer the default allocator hands out (1 GiB).
///
/// Matches the upper bound of the server's `max_allowed_packet`, so no
/// legitimate command payload is refused.
pub const DEFAULT_ALLOCATION_LIMIT: usize = 1 << 30;

/// Source of write buffers for [`ClientMessage::encode`].
///
/// Implementations must be shareable across threads; each returned buffer is
/// owned exclusively by the caller.
///
/// [`ClientMessage::encode`]: crate::ClientMessage::encode
pub trait BufferAllocator: Send + Sync {
    /// Allocate an empty buffer able to hold at least `capacity` bytes.
    fn buffer(&self, capacity: usize) -> Result<Vec<u8>, ProtocolError>;
}

/// Heap allocator with an upper bound on a single buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapAllocator {
    limit: usize,
}

impl HeapAllocator {
    /// Create an allocator with [`DEFAULT_ALLOCATION_LIMIT`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            limit: DEFAULT_ALLOCATION_LIMIT,
        }
    }

    /// Create an allocator that refuses buffers larger than `limit` bytes.
    #[must_use]
    pub const fn with_limit(limit: usize) -> Self {
        Self { limit }
    }

    /// Get the per-buffer limit.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }
}

impl Default for HeapAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl BufferAllocator for HeapAllocator {
    fn buffer(&self, capacity: usize) -> Result<Vec<u8>, ProtocolError> {
        let failed = ProtocolError::BufferAllocation {
            requested: capacity,
            limit: self.limit,
        };

        if capacity > self.limit {
            return Err(failed);
        }

        let mut buf = Vec::new();
        buf.try_reserve_exact(capacity).map_err(|_| failed)?;
        Ok(buf)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_has_requested_capacity() {
        let buf = HeapAllocator::new().buffer(64).unwrap();
        assert!(buf.is_empty());
        assert!(buf.capacity() >= 64);
    }

    #[test]
    fn test_zero_capacity() {
        let buf = HeapAllocator::with_limit(0).buffer(0).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn test_limit_exceeded() {
        let err = HeapAllocator::with_limit(8).buffer(9).unwrap_err();
        assert_eq!(
            err,
            ProtocolError::BufferAllocation {
                requested: 9,
                limit: 8
            }
        );
        assert!(err.is_allocation_failure());
    }

    #[test]
    fn test_reservation_failure_is_reported() {
        // Within the limit but impossible to reserve.
        let alloc = HeapAllocator::with_limit(usize::MAX);
        let err = alloc.buffer(usize::MAX).unwrap_err();
        assert!(err.is_allocation_failure());
    }
}
