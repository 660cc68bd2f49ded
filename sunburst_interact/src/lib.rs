// Copyright 2025 the Sunburst Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=sunburst_interact --heading-base-level=0

//! Sunburst Interact: interaction adapters for sunburst charts.
//!
//! ## Overview
//!
//! This crate sits between a rendering engine and the `sunburst_pipeline`
//! output. The engine reports hover and click events as `(ring, segment)`
//! coordinates; the adapters here resolve those against the immutable
//! [`ChartData`](sunburst_pipeline::ChartData) bundle and hand applications
//! ready-to-display content. No drawing happens here.
//!
//! - [`tooltip`]: resolve hovered-segment content (label, value, ring
//!   total, color) and track hover transitions for the single shared
//!   tooltip surface via [`tooltip::TooltipState`].
//! - [`click`]: resolve clicks into `{label, value}` and forward them to a
//!   caller-supplied callback, swallowing clicks on filler segments.
//! - [`labels`]: format data labels with duplicate-name disambiguation,
//!   value modes, and the 5% anti-clutter threshold shared with the
//!   animation-gated display predicate.
//! - [`config`]: the chart configuration surface with its defaults.
//! - [`renderer`]: the narrow trait a concrete drawing engine implements.
//!
//! ## Coordinates
//!
//! Every adapter takes the same `(ring, segment)` pair the engine reports,
//! where `ring` indexes the handoff-ordered datasets (deepest ring first).
//! Because [`ChartData`](sunburst_pipeline::ChartData) bundles datasets and
//! labels from one pipeline run, adapters can never pair labels and
//! segments from different runs.
//!
//! ## Workflow
//!
//! 1) Build the chart — `sunburst_pipeline::process(&tree, &palette)`.
//! 2) Render — hand the chart and a [`config::ChartConfig`] to your
//!    [`renderer::SegmentRenderer`].
//! 3) React — feed reported coordinates to [`tooltip::TooltipState`],
//!    [`click::handle`], and [`labels::LabelFormatter`].
//!
//! ```
//! use sunburst_interact::click;
//! use sunburst_interact::config::ChartConfig;
//! use sunburst_interact::labels::LabelFormatter;
//! use sunburst_interact::tooltip::{TooltipEvent, TooltipState};
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
//! let chart = process(&tree, &["#ff0000", "#00ff00"]).unwrap();
//! let config = ChartConfig::default();
//!
//! // Hover the deepest ring's first real segment.
//! let mut hover = TooltipState::new();
//! match hover.update(&chart, Some((0, 1))) {
//!     Some(TooltipEvent::Show(content)) => {
//!         assert_eq!(content.label, "B1");
//!         assert_eq!(content.parent_value, 20.0);
//!     }
//!     other => panic!("expected a show transition, got {other:?}"),
//! }
//!
//! // Click it.
//! let mut last = None;
//! click::handle(&chart, 0, 1, &mut |arc| last = Some(arc));
//! assert_eq!(last.unwrap().value, 4.0);
//!
//! // Label it.
//! let formatter = LabelFormatter::new(&chart);
//! assert_eq!(
//!     formatter.format(&chart, &config.labels, 0, 1).as_deref(),
//!     Some("B1"),
//! );
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod click;
pub mod config;
pub mod labels;
pub mod renderer;
pub mod tooltip;
