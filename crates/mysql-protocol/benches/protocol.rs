//! Benchmarks for client message encoding and packet framing.

#![allow(clippy::unwrap_used, missing_docs)]

use std::hint::black_box;

use bytes::BytesMut;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use mysql_protocol::{
    ClientMessage, ExitMessage, HeapAllocator, PACKET_HEADER_SIZE, PacketHeader, QueryMessage,
    SequenceId, Session, write_message,
};

/// Benchmark packet header encoding.
fn bench_packet_header_encode(c: &mut Criterion) {
    let header = PacketHeader::new(1000, 3).unwrap();

    c.bench_function("packet_header_encode", |b| {
        b.iter(|| {
            let mut buf = BytesMut::with_capacity(PACKET_HEADER_SIZE);
            header.encode(&mut buf);
            black_box(buf)
        })
    });
}

/// Benchmark the session termination command.
fn bench_exit_encode(c: &mut Criterion) {
    let alloc = HeapAllocator::new();
    let session = Session::default();

    c.bench_function("exit_encode", |b| {
        b.iter(|| {
            let encoded = ExitMessage::instance().encode(&alloc, &session).unwrap();
            black_box(encoded)
        })
    });
}

/// Benchmark query encoding and framing with various statement sizes.
fn bench_query_write(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_write");
    let alloc = HeapAllocator::new();
    let session = Session::default();

    let simple_query = "SELECT 1";
    let medium_query = "SELECT id, name, email, created_at, updated_at FROM users WHERE status = 'active' AND organization_id = 12345 ORDER BY created_at DESC LIMIT 100";
    let large_query = medium_query.repeat(64);

    for (name, sql) in [
        ("simple", simple_query),
        ("medium", medium_query),
        ("large", large_query.as_str()),
    ] {
        let message = QueryMessage::new(sql);
        group.throughput(Throughput::Bytes(sql.len() as u64));
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut seq = SequenceId::new();
                let mut dst = BytesMut::new();
                write_message(black_box(&message), &alloc, &session, &mut seq, &mut dst)
                    .unwrap();
                black_box(dst)
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_packet_header_encode,
    bench_exit_encode,
    bench_query_write,
);

criterion_main!(benches);
