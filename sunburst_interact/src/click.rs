// Copyright 2025 the Sunburst Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click-to-drill-down adapter.
//!
//! The rendering engine reports a click as `(ring, segment)` coordinates;
//! [`resolve`] turns those into the clicked arc's label and value, and
//! [`handle`] forwards them to a caller-supplied callback. Clicks on filler
//! segments are swallowed — they are not data.

use alloc::string::{String, ToString};

use sunburst_pipeline::ChartData;

/// A resolved click on a real arc.
#[derive(Clone, Debug, PartialEq)]
pub struct ArcClick {
    /// Label of the clicked arc.
    pub label: String,
    /// Value of the clicked arc.
    pub value: f64,
}

/// Resolve a click at `(ring, segment)`.
///
/// Returns `None` for fillers and out-of-range coordinates.
pub fn resolve(chart: &ChartData, ring: usize, segment: usize) -> Option<ArcClick> {
    let value = chart.value_at(ring, segment)?;
    if chart.is_filler(ring, segment) {
        return None;
    }
    Some(ArcClick {
        label: chart.label_at(ring, segment)?.to_string(),
        value,
    })
}

/// Resolve a click and invoke `on_arc_click` for real arcs only.
///
/// Returns whether the callback was invoked.
pub fn handle<F>(chart: &ChartData, ring: usize, segment: usize, on_arc_click: &mut F) -> bool
where
    F: FnMut(ArcClick),
{
    match resolve(chart, ring, segment) {
        Some(click) => {
            on_arc_click(click);
            true
        }
        None => false,
    }
}
