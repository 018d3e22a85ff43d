// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_vlist::{ListConfig, MemoryScrollHost, ScrollHost, VirtualList, compute_window};

fn bench_compute_window(c: &mut Criterion) {
    let mut group = c.benchmark_group("vlist/compute_window");

    // Hypothesis: geometry is O(1) in the item count.
    for len in [1_000_usize, 100_000, 10_000_000] {
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            let mut start = 0_usize;
            b.iter(|| {
                start = (start + 7) % len;
                black_box(compute_window(black_box(len), 50.0_f64, 200.0, start))
            });
        });
    }

    group.finish();
}

fn bench_scroll_and_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("vlist/scroll_and_render");

    // Hypothesis: a scroll tick costs O(slot_count) regardless of collection size,
    // so all three sizes should land within noise of each other.
    for len in [1_000_usize, 100_000, 1_000_000] {
        let items: Vec<u64> = (0..len as u64).collect();
        let mut host = MemoryScrollHost::new();
        let mut list = VirtualList::new(ListConfig::new(20.0_f64, 600.0), &mut host);
        let geometry = list.geometry(len);
        host.set_extents(geometry.content_extent, geometry.viewport_extent);
        let max_offset = geometry.content_extent - geometry.viewport_extent;

        group.throughput(Throughput::Elements(geometry.slot_count as u64));
        group.bench_function(BenchmarkId::from_parameter(len), |b| {
            let mut offset = 0.0_f64;
            b.iter(|| {
                offset = (offset + 137.0) % max_offset;
                host.scroll_to(offset);
                list.handle_scroll(&host);
                let view = list.render(&items, |item, _| item.wrapping_mul(31));
                black_box(view.items().len() + host.scroll_offset() as usize)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compute_window, bench_scroll_and_render);
criterion_main!(benches);
