//! Keypress-throughput benchmarks for the amount state machine.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use currency_numpad::{AmountBuf, Config, Key};

/// A mixed entry session: grouping, decimal entry, and deletes.
const SESSION: &str = "123456XX.45XXX987.65X";

/// Drive raw key characters straight through an [`AmountBuf`].
fn bench_amount_buf(c: &mut Criterion) {
    c.bench_function("amount_buf_session", |b| {
        b.iter(|| {
            let mut buf = AmountBuf::new("0.00");
            for key in SESSION.chars().filter_map(Key::from_char) {
                buf.apply(black_box(key), 6);
            }
            black_box(buf.value().len())
        })
    });
}

/// Drive the same session through the full input, validation included.
fn bench_currency_input(c: &mut Criterion) {
    c.bench_function("currency_input_session", |b| {
        b.iter(|| {
            let mut input = Config::new()
                .with_max_amount(10_000.0)
                .with_min_amount(1.0)
                .build()
                .expect("default config builds");
            for key in SESSION.chars() {
                input.key(black_box(key));
            }
            black_box(input.has_error())
        })
    });
}

criterion_group!(benches, bench_amount_buf, bench_currency_input);
criterion_main!(benches);
