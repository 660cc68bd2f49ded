// Copyright 2025 the Sunburst Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ring layer building: flattened levels → concentric-ring datasets.
//!
//! One [`RingDataset`] per depth level below the root (the root itself is
//! title/context only and is never drawn). Segments inherit their base color
//! from the parent segment one ring up; only opacity changes with depth.
//! Datasets are constructed outermost-ring-first and reversed before
//! handoff, so index 0 of the returned sequence is the deepest ring — the
//! rendering convention where later datasets draw innermost.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use bitflags::bitflags;

use crate::color::{ColorError, Rgb};
use crate::flatten::LevelEntry;

bitflags! {
    /// Per-segment marker flags carried in [`RingDataset::custom`].
    ///
    /// The rendering engine has no native concept of a filler segment, so
    /// the marker travels alongside the drawing arrays and the interaction
    /// adapters consult it before surfacing anything to the user.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct SegmentFlags: u8 {
        /// Synthetic padding segment: invisible, excluded from labels,
        /// tooltips, and clicks, but still occupying angular space.
        const FILLER = 0b0000_0001;
    }
}

/// One concentric ring, as parallel per-segment arrays.
///
/// All vectors have the same length. Colors are `rgba(r, g, b, a)` strings
/// ready for the rendering engine.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RingDataset {
    /// Segment values; proportional to angular size.
    pub data: Vec<f64>,
    /// Fill colors (base color at the ring's depth opacity; 0 for fillers).
    pub background_color: Vec<String>,
    /// Border colors (white at opacity 1; 0 for fillers).
    pub border_color: Vec<String>,
    /// Hover fill colors (base color at opacity 1; 0 for fillers).
    pub hover_background_color: Vec<String>,
    /// Hover border colors (base color at opacity 0.5; 0 for fillers).
    pub hover_border_color: Vec<String>,
    /// Border stroke width in pixels.
    pub border_width: u8,
    /// Per-segment marker flags, parallel to `data`.
    pub custom: Vec<SegmentFlags>,
}

impl RingDataset {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            background_color: Vec::with_capacity(capacity),
            border_color: Vec::with_capacity(capacity),
            hover_background_color: Vec::with_capacity(capacity),
            hover_border_color: Vec::with_capacity(capacity),
            border_width: 1,
            custom: Vec::with_capacity(capacity),
        }
    }

    /// Number of segments in this ring.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the ring has no segments.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Sum of all segment values, fillers included.
    ///
    /// Every ring of one chart shares the same total, which is what keeps
    /// angular proportions consistent across depths.
    pub fn total(&self) -> f64 {
        self.data.iter().sum()
    }

    /// Whether the segment at `index` is a filler.
    pub fn is_filler(&self, index: usize) -> bool {
        self.custom
            .get(index)
            .is_some_and(|flags| flags.contains(SegmentFlags::FILLER))
    }
}

/// Depth-based fill opacity: `min(0.9, 1 − ring × 0.2)`, floored at 0.
///
/// Computed in integer tenths so the formatted alpha stays exact
/// (`0.9`, `0.8`, `0.6`, ...). Rings past index 5 are fully transparent
/// rather than an error.
fn depth_opacity(ring: usize) -> f64 {
    let tenths = 10_usize.saturating_sub(2 * ring).min(9);
    #[allow(
        clippy::cast_precision_loss,
        reason = "tenths is at most 9; exactly representable."
    )]
    let tenths = tenths as f64;
    tenths / 10.0
}

/// Build ring datasets from flattened levels.
///
/// Returns the chart title (the root entry's label) and the datasets in
/// handoff order (deepest ring first). A single-level flatten result yields
/// an empty dataset list. Color assignment: depth-1 segments (and any entry
/// without a parent) cycle through `palette`; deeper segments inherit the
/// exact base color of their parent segment. A malformed palette entry or
/// an empty palette aborts the build with no partial output.
///
/// `levels` must be a [`flatten`](crate::flatten::flatten) result: parent
/// indices are trusted to point into the previous level.
pub fn build_layers(
    levels: &[Vec<LevelEntry>],
    palette: &[&str],
) -> Result<(String, Vec<RingDataset>), ColorError> {
    let title = levels
        .first()
        .and_then(|level| level.first())
        .and_then(LevelEntry::label)
        .unwrap_or_default()
        .to_string();

    let ring_levels = levels.get(1..).unwrap_or_default();
    if !ring_levels.is_empty() && palette.is_empty() {
        return Err(ColorError::EmptyPalette);
    }

    let mut datasets: Vec<RingDataset> = Vec::with_capacity(ring_levels.len());
    let mut previous_base: Vec<Rgb> = Vec::new();

    for (ring, level) in ring_levels.iter().enumerate() {
        let mut dataset = RingDataset::with_capacity(level.len());
        let mut current_base: Vec<Rgb> = Vec::with_capacity(level.len());

        for (segment, entry) in level.iter().enumerate() {
            let base = match entry.parent() {
                Some(parent) if ring > 0 => previous_base[parent],
                _ => Rgb::parse(palette[segment % palette.len()])?,
            };
            current_base.push(base);

            let filler = entry.is_filler();
            let opacity = if filler { 0.0 } else { depth_opacity(ring) };

            dataset.data.push(entry.value());
            dataset.background_color.push(base.with_opacity(opacity)?);
            dataset
                .border_color
                .push(Rgb::WHITE.with_opacity(if filler { 0.0 } else { 1.0 })?);
            dataset
                .hover_background_color
                .push(base.with_opacity(if filler { 0.0 } else { 1.0 })?);
            dataset
                .hover_border_color
                .push(base.with_opacity(if filler { 0.0 } else { 0.5 })?);
            dataset.custom.push(if filler {
                SegmentFlags::FILLER
            } else {
                SegmentFlags::empty()
            });
        }

        previous_base = current_base;
        datasets.push(dataset);
    }

    // Deepest ring first, so the innermost ring draws last (on top).
    datasets.reverse();
    Ok((title, datasets))
}
