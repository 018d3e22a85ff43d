// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic windowed list.
//!
//! Drive a 100 000-row list through a few scroll positions and print the
//! realized rows each time. Only a handful of rows ever exist at once.
//!
//! Run:
//! - `cargo run -p understory_vlist_demos --example vlist_basic`
//! - `RUST_LOG=understory_vlist=trace cargo run -p understory_vlist_demos --example vlist_basic`

use understory_vlist::{ListConfig, MemoryScrollHost, ScrollHost, VirtualList};
use understory_vlist_demos::init_tracing;

struct Row {
    id: usize,
    name: String,
    data: u32,
}

fn main() {
    init_tracing();

    let items: Vec<Row> = (0..100_000)
        .map(|i| Row {
            id: i,
            name: format!("Item {i}"),
            // Stand-in payload that varies per row.
            data: (i as u32).wrapping_mul(2_654_435_761) % 101,
        })
        .collect();

    let mut host = MemoryScrollHost::new();
    let mut list = VirtualList::new(ListConfig::new(50.0_f64, 200.0), &mut host)
        .with_on_scroll(|event| tracing::info!(start_index = event.start_index, "scrolled"));

    let geometry = list.geometry(items.len());
    host.set_extents(geometry.content_extent, geometry.viewport_extent);
    println!(
        "{} items, content {}px, viewport {}px, {} slots",
        items.len(),
        geometry.content_extent,
        geometry.viewport_extent,
        geometry.slot_count
    );

    for offset in [0.0, 800.0, 830.0, 400.0, 4_999_800.0, 1e12] {
        host.scroll_to(offset);
        list.handle_scroll(&host);

        let view = list.render(&items, |row, index| {
            debug_assert_eq!(row.id, index);
            format!("{}: {}", row.name, row.data)
        });
        println!(
            "scrollTop {:>9} -> block at {:>9}px: {:?}",
            host.scroll_offset(),
            view.window_offset(),
            view.visuals().collect::<Vec<_>>()
        );
    }
}
