// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the `understory_vlist` demos.
//!
//! [`to_markup`] plays the part of a host integration: it turns a rendered
//! [`ViewportRegion`] into HTML-like markup, one element per region level.

use std::fmt::Write as _;

use tracing_subscriber::EnvFilter;
use understory_vlist::{Attributes, BoxStyle, Overflow, Scalar, ViewportRegion};

/// Installs a `fmt` subscriber filtered by `RUST_LOG` (default `info`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A subscriber may already be installed when demos share a process.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn overflow_css(overflow: Overflow) -> &'static str {
    match overflow {
        Overflow::Auto => "auto",
        Overflow::Hidden => "hidden",
        Overflow::Visible => "visible",
    }
}

fn style_css<S: Scalar>(style: &BoxStyle<S>) -> String {
    format!(
        "height: {}px; width: {}; overflow: {}",
        style.extent,
        style.width,
        overflow_css(style.overflow)
    )
}

fn attrs_markup(attributes: &Attributes) -> String {
    let mut out = String::new();
    for (name, value) in attributes.iter() {
        let _ = write!(out, " {name}=\"{value}\"");
    }
    out
}

/// Renders the region tree as indented HTML-like markup.
///
/// Item slots carry a `data-key` with their reused slot identity.
pub fn to_markup<S: Scalar>(view: &ViewportRegion<String, S>) -> String {
    let mut out = String::new();
    let block = &view.spacer.block;
    let _ = writeln!(
        out,
        "<div{} style=\"{}\">",
        attrs_markup(&view.attributes),
        style_css(&view.style)
    );
    let _ = writeln!(out, "  <div style=\"{}\">", style_css(&view.spacer.style));
    let _ = writeln!(
        out,
        "    <div style=\"transform: translate3d(0, {}px, 0); {}\">",
        block.offset,
        style_css(&block.style)
    );
    for slot in &block.items {
        let _ = writeln!(
            out,
            "      <div data-key=\"{}\"{} style=\"{}\">{}</div>",
            slot.key.0,
            attrs_markup(&slot.attributes),
            style_css(&slot.style),
            slot.visual
        );
    }
    out.push_str("    </div>\n  </div>\n</div>\n");
    out
}
