#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Parsing and rendering benchmarks over representative URI shapes
use criterion::{Criterion, criterion_group, criterion_main};
use ruri::Uri;
use std::hint::black_box;

fn bench_parse_simple(c: &mut Criterion) {
    let input = "http://example.com/";
    c.bench_function("parse_simple", |b| {
        b.iter(|| Uri::parse(black_box(input)).unwrap());
    });
}

fn bench_parse_complex(c: &mut Criterion) {
    let input = "foo://herp@secure.example.com:8042/path/to/resource?query=value&key=data#section";
    c.bench_function("parse_complex", |b| {
        b.iter(|| Uri::parse(black_box(input)).unwrap());
    });
}

fn bench_parse_ip_literal(c: &mut Criterion) {
    let input = "http://[2001:db8::1]:8080/path";
    c.bench_function("parse_ip_literal", |b| {
        b.iter(|| Uri::parse(black_box(input)).unwrap());
    });
}

fn bench_parse_escaped(c: &mut Criterion) {
    let input = "http://example.com/a%20b/c%2Fd?note=two%20words&flag#sec%20one";
    c.bench_function("parse_escaped", |b| {
        b.iter(|| Uri::parse(black_box(input)).unwrap());
    });
}

fn bench_serialize(c: &mut Criterion) {
    let uri =
        Uri::parse("foo://herp@secure.example.com:8042/path/to/resource?query=value#section")
            .unwrap();
    c.bench_function("serialize_literal", |b| {
        b.iter(|| black_box(&uri).serialize(false));
    });
    c.bench_function("serialize_normalized", |b| {
        b.iter(|| black_box(&uri).serialize(true));
    });
}

fn bench_normalize_dot_segments(c: &mut Criterion) {
    let uri = Uri::parse("HTTP://EXAMPLE.COM/a/b/c/./../../g/h/../i").unwrap();
    c.bench_function("normalize_dot_segments", |b| {
        b.iter(|| black_box(&uri).normalized());
    });
}

criterion_group!(
    benches,
    bench_parse_simple,
    bench_parse_complex,
    bench_parse_ip_literal,
    bench_parse_escaped,
    bench_serialize,
    bench_normalize_dot_segments
);

criterion_main!(benches);
