use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use jsonmodel::{decode_bytes, deserialize, Decode, User};

static INPUTS: &[(&str, &[u8])] = &[
    ("first name", br#"{"FirstName": "Tyler"}"#),
    (
        "with avatar",
        br#"{"FirstName": "Tyler", "AvatarURL": "https://example.com/avatars/tyler.png?size=128"}"#,
    ),
    (
        "invalid avatar",
        br#"{"FirstName": "Tyler", "AvatarURL": "not a url"}"#,
    ),
    ("not an object", br#"[{"FirstName": "Tyler"}, 1, true, null]"#),
    ("malformed", br#"{"FirstName": "Tyl"#),
];

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    for (name, input) in INPUTS {
        group.bench_with_input(BenchmarkId::new("deserialize", name), input, |b, input| {
            b.iter(|| deserialize(black_box(input)));
        });
        let value = deserialize(input);
        group.bench_with_input(BenchmarkId::new("decode", name), &value, |b, value| {
            b.iter(|| User::decode(black_box(value.as_ref())));
        });
        group.bench_with_input(BenchmarkId::new("decode_bytes", name), input, |b, input| {
            b.iter(|| decode_bytes::<User>(black_box(input)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
