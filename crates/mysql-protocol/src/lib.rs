//! # mysql-protocol
//!
//! Client-side encoding of the MySQL client/server protocol.
//!
//! This crate turns typed client commands into the exact payload bytes a
//! MySQL server expects, and provides the 4-byte packet framing those
//! payloads travel in.
//!
//! ## Design Philosophy
//!
//! This crate is intentionally IO-agnostic. It contains no networking logic and
//! makes no assumptions about the async runtime. Encoding is a pure transform of
//! a message's own fields plus the [`Session`] context handed in by the caller.
//!
//! ## Command phases
//!
//! Every command sent by the client opens a new command phase, which restarts
//! the packet sequence counter at zero. Messages report this through
//! [`ClientMessage::resets_sequence`]; [`packet::write_message`] honors it.
//!
//! ```text
//! Idle -> CommandSent -> AwaitingResponse -> Idle
//! ```
//!
//! ## Example
//!
//! ```
//! use mysql_protocol::{ClientMessage, ExitMessage, HeapAllocator, Session};
//!
//! let exit = ExitMessage::instance();
//! let payload = exit.encode(&HeapAllocator::new(), &Session::default()).unwrap();
//!
//! assert!(exit.resets_sequence());
//! assert_eq!(&payload[..], &[0x01]);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod buffer;
pub mod command;
pub mod error;
pub mod exit;
pub mod init_db;
pub mod message;
pub mod packet;
pub mod ping;
pub mod query;
pub mod reset;
pub mod session;

pub use buffer::{BufferAllocator, DEFAULT_ALLOCATION_LIMIT, HeapAllocator};
pub use command::CommandCode;
pub use error::ProtocolError;
pub use exit::ExitMessage;
pub use init_db::InitDbMessage;
pub use message::ClientMessage;
pub use packet::{MAX_PAYLOAD_SIZE, PACKET_HEADER_SIZE, PacketHeader, SequenceId, write_message};
pub use ping::PingMessage;
pub use query::QueryMessage;
pub use reset::ResetConnectionMessage;
pub use session::{Capabilities, Session};
