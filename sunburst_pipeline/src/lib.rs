// Copyright 2025 the Sunburst Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=sunburst_pipeline --heading-base-level=0

//! Sunburst Pipeline: tree → multi-ring donut chart transformation.
//!
//! Sunburst Pipeline turns a hierarchical dataset (a tree of named, valued
//! nodes) into the concentric-ring chart representation a sunburst renderer
//! consumes. It is pure data transformation: no drawing, no UI, no I/O.
//!
//! - Aggregates values bottom-up ([`TreeNode::resolve`]).
//! - Flattens the tree into per-depth levels with parent links, inserting
//!   invisible filler segments so every ring sums to the same total
//!   ([`flatten`]).
//! - Builds per-ring datasets with color inheritance down each branch and
//!   depth-based opacity falloff ([`build_layers`]).
//! - Produces one flat label sequence and a flat addressing scheme that
//!   correlates any `(ring, segment)` pair with its label
//!   ([`ChartData::flat_index`]).
//!
//! ## Where this fits
//!
//! This crate sits between your data and a ring-chart renderer.
//! - Your application owns the input tree.
//! - This crate owns the transformation and the segment↔label correlation.
//! - An external rendering engine paints the rings and reports hover/click
//!   back as `(ring, segment)` coordinates (see the `sunburst_interact`
//!   crate for the adapters those feed).
//!
//! ## Not a charting library
//!
//! No arc geometry, hit testing, animation, or layout happens here; those
//! are the rendering engine's concern. The pipeline decides *what* each
//! ring contains, in *which order*, with *which color and value* — and
//! nothing else.
//!
//! ## API overview
//!
//! - [`TreeNode`]: the input hierarchy; [`TreeNode::resolve`] → [`ValuedNode`].
//! - [`flatten`] → [`LevelEntry`] lists, one per depth, fillers included.
//! - [`build_layers`] → [`RingDataset`] sequence (deepest ring first) with
//!   [`SegmentFlags`] markers.
//! - [`process`] → [`ChartData`]: the immutable bundle of title, datasets,
//!   and arc labels consumed by renderers and interaction adapters.
//! - [`Rgb`] / [`with_opacity`]: the narrow color boundary, rejecting
//!   malformed specs and out-of-range opacity with [`ColorError`].
//!
//! ## Minimal usage
//!
//! ```
//! use sunburst_pipeline::{TreeNode, process};
//!
//! let tree = TreeNode::branch(
//!     "Root",
//!     vec![
//!         TreeNode::leaf("A", 10.0),
//!         TreeNode::branch(
//!             "B",
//!             vec![TreeNode::leaf("B1", 4.0), TreeNode::leaf("B2", 6.0)],
//!         ),
//!     ],
//! );
//!
//! let chart = process(&tree, &["#ff0000", "#00ff00"]).unwrap();
//!
//! // Two rings (the root is title only), deepest first.
//! assert_eq!(chart.title(), "Root");
//! assert_eq!(chart.ring_count(), 2);
//!
//! // A does not expand, so the deepest ring pads it with an invisible
//! // filler that keeps the ring total at 20.
//! assert_eq!(chart.arc_labels(), &["", "B1", "B2", "A", "B"]);
//! assert_eq!(chart.ring_total(0), Some(20.0));
//!
//! // Flat addressing correlates segments with labels across rings.
//! assert_eq!(chart.flat_index(1, 1), Some(4));
//! assert_eq!(chart.label_at(1, 1), Some("B"));
//! ```
//!
//! ## Recompute on change
//!
//! All structures are derived freshly from the input on every data or
//! configuration change; nothing is mutated in place. [`process`] is
//! deterministic and, at the intended tree sizes (dozens to low hundreds of
//! nodes), cheap enough to re-run wholesale.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod chart;
pub mod color;
pub mod flatten;
pub mod layers;
pub mod tree;

pub use chart::{ChartData, extract_arc_labels, process};
pub use color::{ColorError, Rgb, with_opacity};
pub use flatten::{LevelEntry, flatten};
pub use layers::{RingDataset, SegmentFlags, build_layers};
pub use tree::{TreeNode, ValuedNode};
