//! Benchmarks for render-state construction

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use strata_core::config::Config;
use strata_core::geometry::Size;
use strata_render::{
    BlendCodes, Texture, TextureHandle, Transform, create_render_states, create_render_states_with,
};

fn bench_create_render_states(c: &mut Criterion) {
    let mut group = c.benchmark_group("create_render_states");
    let matrix = Transform::IDENTITY_MATRIX;
    let texture = Texture::new(TextureHandle(1), Size::new(512, 512));

    group.bench_function("no_resources", |b| {
        b.iter(|| {
            create_render_states(
                black_box(6),
                black_box(7),
                black_box(0),
                black_box(1),
                black_box(7),
                black_box(0),
                black_box(&matrix),
                None,
                None,
            )
        });
    });

    group.bench_function("with_texture", |b| {
        b.iter(|| {
            create_render_states(
                6,
                7,
                0,
                1,
                7,
                0,
                black_box(&matrix),
                Some(black_box(&texture)),
                None,
            )
        });
    });

    let lenient = Config::lenient();
    group.bench_function("fallback_codes", |b| {
        b.iter(|| {
            create_render_states_with(
                &lenient,
                black_box(BlendCodes::new(6, 7, 0, 1, 7, 0)),
                black_box(&matrix),
                None,
                None,
            )
        });
    });

    group.finish();
}

criterion_group!(benches, bench_create_render_states);
criterion_main!(benches);
