// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Size, Vec2};
use zoomview_transform::{Transform, ZoomBounds, clamp_transform};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_f64(&mut self) -> f64 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1_u64 << 53) as f64
    }
}

fn candidates(len: usize, seed: u64) -> Vec<Transform> {
    let mut rng = Lcg::new(seed);
    (0..len)
        .map(|_| {
            let scale = 0.05 + rng.next_f64() * 5.0;
            let tx = (rng.next_f64() - 0.5) * 4_000.0;
            let ty = (rng.next_f64() - 0.5) * 4_000.0;
            Transform::new(scale, Vec2::new(tx, ty))
        })
        .collect()
}

fn bench_clamp(c: &mut Criterion) {
    let mut group = c.benchmark_group("clamp/clamp_transform");
    let viewport = Size::new(1080.0, 1920.0);
    let bounds = ZoomBounds::new(0.2, 4.0).unwrap();

    for (name, content) in [
        ("small_content", Size::new(320.0, 240.0)),
        ("photo", Size::new(4032.0, 3024.0)),
    ] {
        let inputs = candidates(4_096, 0x5eed);
        group.throughput(Throughput::Elements(inputs.len() as u64));
        group.bench_with_input(BenchmarkId::new(name, inputs.len()), &inputs, |b, inputs| {
            b.iter(|| {
                for t in inputs {
                    black_box(clamp_transform(
                        black_box(*t),
                        Some(content),
                        viewport,
                        bounds,
                    ));
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_clamp);
criterion_main!(benches);
