// Copyright 2025 the Sunburst Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Data-label formatting: disambiguation, value modes, and anti-clutter.
//!
//! Node names are not unique across the tree, so [`LabelFormatter`] tracks
//! which flat indices share a label text and appends a 1-based occurrence
//! counter when a text recurs ("Laptops (1)", "Laptops (2)"). Tiny
//! segments are suppressed via [`exceeds_display_threshold`] — the single
//! predicate both the formatter and the render-time [`DisplayGate`] use, so
//! the two can never disagree about what is visible.

use alloc::collections::BTreeMap;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use sunburst_pipeline::ChartData;

use crate::config::LabelConfig;

/// Share of its ring's total a segment must exceed to get a label.
///
/// Strict comparison: a segment at exactly 5% stays hidden.
const DISPLAY_THRESHOLD: f64 = 0.05;

/// Whether the segment is large enough for a label.
///
/// `value / ringTotal > 0.05`, strict. Out-of-range coordinates are not
/// displayable.
pub fn exceeds_display_threshold(chart: &ChartData, ring: usize, segment: usize) -> bool {
    let (Some(value), Some(total)) = (chart.value_at(ring, segment), chart.ring_total(ring)) else {
        return false;
    };
    value / total > DISPLAY_THRESHOLD
}

/// Render-time display predicate for data labels.
///
/// The original label pass runs again once the intro animation settles;
/// `animation_complete` gates labels until then. The size threshold is the
/// same one the formatter applies.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DisplayGate {
    /// Set once the rendering engine reports its intro animation done.
    pub animation_complete: bool,
}

impl DisplayGate {
    /// Whether the label at `(ring, segment)` should be drawn this frame.
    pub fn display(
        &self,
        chart: &ChartData,
        config: &LabelConfig,
        ring: usize,
        segment: usize,
    ) -> bool {
        config.enabled && self.animation_complete && exceeds_display_threshold(chart, ring, segment)
    }
}

/// Formats data-label text for one chart.
///
/// Built against a specific [`ChartData`]; feeding coordinates from a
/// different pipeline run produces stale occurrence numbering, so rebuild
/// the formatter whenever the chart is rebuilt.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LabelFormatter {
    /// Flat indices per label text, in flat order, fillers excluded.
    occurrences: BTreeMap<String, Vec<usize>>,
}

impl LabelFormatter {
    /// Scan `chart` and index which flat positions share each label text.
    pub fn new(chart: &ChartData) -> Self {
        let mut occurrences: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        let mut flat = 0_usize;
        for (ring, dataset) in chart.datasets().iter().enumerate() {
            for segment in 0..dataset.len() {
                if !chart.is_filler(ring, segment)
                    && let Some(label) = chart.label_at(ring, segment)
                {
                    occurrences.entry(String::from(label)).or_default().push(flat);
                }
                flat += 1;
            }
        }
        Self { occurrences }
    }

    /// Format the label for `(ring, segment)`, or `None` when nothing
    /// should be shown (labels disabled, filler, or below the size
    /// threshold).
    ///
    /// Modes: with `values_only` (and `show_values`) the text is just the
    /// value; otherwise the name, a ` (n)` disambiguator when the name
    /// recurs elsewhere in the chart, and — when `show_values` — the value
    /// on a second line.
    pub fn format(
        &self,
        chart: &ChartData,
        config: &LabelConfig,
        ring: usize,
        segment: usize,
    ) -> Option<String> {
        if !config.enabled {
            return None;
        }
        if chart.is_filler(ring, segment) {
            return None;
        }
        if !exceeds_display_threshold(chart, ring, segment) {
            return None;
        }
        let flat = chart.flat_index(ring, segment)?;
        let value = chart.value_at(ring, segment)?;

        if config.show_values && config.values_only {
            return Some(format!("{value}"));
        }

        let label = chart.label_at(ring, segment)?;
        let mut text = String::from(label);
        if let Some(indices) = self.occurrences.get(label)
            && indices.len() > 1
        {
            let position = indices.iter().position(|&i| i == flat)? + 1;
            text = format!("{label} ({position})");
        }
        if config.show_values {
            text = format!("{text}\n{value}");
        }
        Some(text)
    }
}
