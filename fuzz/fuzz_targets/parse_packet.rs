#![no_main]

use libfuzzer_sys::fuzz_target;
use mysql_protocol::PacketHeader;

fuzz_target!(|data: &[u8]| {
    let mut cursor = data;
    if let Ok(header) = PacketHeader::decode(&mut cursor) {
        // A decoded header must encode back to the same 4 bytes
        assert_eq!(&header.encode_to_bytes()[..], &data[..4]);
    }
});
