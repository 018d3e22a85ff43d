// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Windowed list as markup.
//!
//! Render an accessible feed with a start index and print the element tree a
//! browser host would receive: scroll container, spacer, offset block, rows.
//! Note how `data-key` values are reused after scrolling.
//!
//! Run:
//! - `cargo run -p understory_vlist_demos --example vlist_markup`

use understory_vlist::{Attributes, ListConfig, MemoryScrollHost, VirtualList, Width};
use understory_vlist_demos::{init_tracing, to_markup};

fn main() {
    init_tracing();

    let items: Vec<String> = (0..100_000).map(|i| format!("Item {i}")).collect();
    let config = ListConfig::new(50.0_f64, 200.0)
        .with_start_index(16)
        .with_width(Width::Pixels(320.0))
        .with_container_attributes(
            Attributes::new()
                .with("role", "feed")
                .with("aria-busy", "false"),
        )
        .with_item_attributes(Attributes::new().with("role", "article"));

    let mut host = MemoryScrollHost::new();
    let mut list = VirtualList::new(config, &mut host);
    let geometry = list.geometry(items.len());
    host.set_extents(geometry.content_extent, geometry.viewport_extent);

    let template = |item: &String, index: usize| format!("{index}: {item}");

    println!("-- mounted at start index {}", list.start_index());
    print!("{}", to_markup(&list.render(&items, template)));

    host.scroll_to(1_000.0);
    let event = list.handle_scroll(&host);
    println!("-- scrolled, start index {}", event.start_index);
    print!("{}", to_markup(&list.render(&items, template)));
}
