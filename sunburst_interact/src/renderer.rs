// Copyright 2025 the Sunburst Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The rendering-engine boundary.
//!
//! The pipeline and the adapters never draw. A concrete engine implements
//! [`SegmentRenderer`], consumes the prepared [`ChartData`] plus the
//! [`ChartConfig`], and reports interaction back as `(ring, segment)`
//! coordinates, which feed [`crate::tooltip`], [`crate::click`], and
//! [`crate::labels`]. Swapping engines never touches the pipeline.

use sunburst_pipeline::ChartData;

use crate::config::ChartConfig;

/// A sink that paints the prepared chart.
///
/// `ring` in all reported coordinates is an index into
/// [`ChartData::datasets`] (deepest ring first), matching the flat
/// addressing the adapters use.
pub trait SegmentRenderer {
    /// Paint (or repaint) the chart. Called on every data or configuration
    /// change; the whole dataset is recomputed upstream, never patched.
    fn render(&mut self, chart: &ChartData, config: &ChartConfig);
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use sunburst_pipeline::{TreeNode, process};

    struct CountingRenderer {
        renders: usize,
        segments_seen: usize,
    }

    impl SegmentRenderer for CountingRenderer {
        fn render(&mut self, chart: &ChartData, _config: &ChartConfig) {
            self.renders += 1;
            self.segments_seen = chart.segment_count();
        }
    }

    #[test]
    fn renderer_receives_full_chart_each_time() {
        let chart = process(
            &TreeNode::branch(
                "Root",
                vec![TreeNode::leaf("A", 1.0), TreeNode::leaf("B", 3.0)],
            ),
            &["red", "blue"],
        )
        .unwrap();
        let config = ChartConfig::default();
        let mut renderer = CountingRenderer {
            renders: 0,
            segments_seen: 0,
        };
        renderer.render(&chart, &config);
        renderer.render(&chart, &config);
        assert_eq!(renderer.renders, 2);
        assert_eq!(renderer.segments_seen, 2);
    }
}
