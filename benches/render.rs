//! Benchmark: render a composite-key schema repeatedly from one tree
//! (the shared-schema usage pattern: build once, materialize many).

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use idforge::{FixedBytes, Segment};

fn composite_key_schema() -> Segment {
    let mut root = Segment::new().charset("hex").expect("charset");
    for i in 0..8u64 {
        if i > 0 {
            root = root.delimiter("-").expect("delimiter");
        }
        root = root
            .section(
                Segment::new()
                    .charset("base36")
                    .expect("charset")
                    .length(4)
                    .expect("length")
                    .bits(20)
                    .expect("bits")
                    .field(FixedBytes::from_u64(0x1234 + i))
                    .expect("field"),
            )
            .expect("section");
    }
    root
}

fn bench_render(c: &mut Criterion) {
    let schema = composite_key_schema();
    c.bench_function("render_composite_key", |b| {
        b.iter(|| black_box(&schema).render().expect("render"))
    });

    let flat = Segment::new()
        .charset("hex")
        .expect("charset")
        .bits(16)
        .expect("bits")
        .field(FixedBytes::from_u64(0xBEEF))
        .expect("field");
    c.bench_function("render_single_field", |b| {
        b.iter(|| black_box(&flat).render().expect("render"))
    });
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
