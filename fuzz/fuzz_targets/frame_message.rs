#![no_main]

use arbitrary::Arbitrary;
use bytes::BytesMut;
use libfuzzer_sys::fuzz_target;
use mysql_protocol::{
    Capabilities, ClientMessage, HeapAllocator, InitDbMessage, QueryMessage, SequenceId, Session,
    write_message,
};

#[derive(Debug, Arbitrary)]
struct Input {
    sql: String,
    database: String,
    charset: u8,
    capabilities: u32,
    sequence: u8,
}

fuzz_target!(|input: Input| {
    let session = Session::new(
        input.charset,
        Capabilities::from_bits_truncate(input.capabilities),
        10,
    );
    let alloc = HeapAllocator::with_limit(1 << 20);

    let query = QueryMessage::new(input.sql);
    let init_db = InitDbMessage::new(input.database);
    let messages: [&dyn ClientMessage; 2] = [&query, &init_db];

    for message in messages {
        let mut sequence = SequenceId::new();
        for _ in 0..input.sequence {
            sequence.next();
        }
        let mut dst = BytesMut::new();
        if let Ok(packets) = write_message(message, &alloc, &session, &mut sequence, &mut dst) {
            // Both commands open a new phase, so ids restart at zero
            assert!(packets >= 1);
            assert_eq!(sequence.current(), packets as u8);
        }
    }
});
