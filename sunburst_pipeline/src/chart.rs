// Copyright 2025 the Sunburst Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The assembled chart: datasets, label sequence, and flat addressing.
//!
//! [`process`] runs the whole pipeline (resolve → flatten → ring build →
//! label extraction) and returns one immutable [`ChartData`]. Bundling the
//! datasets and the arc-label sequence in a single value makes it
//! impossible to pair labels from one pipeline run with datasets from
//! another — the classic silent mis-alignment hazard of a flat index.

use alloc::string::String;
use alloc::vec::Vec;

use crate::color::ColorError;
use crate::flatten::{LevelEntry, flatten};
use crate::layers::{RingDataset, build_layers};
use crate::tree::TreeNode;

/// Extract the flat arc-label sequence from flattened levels.
///
/// The root level is skipped (it is title, not a ring); the remaining
/// levels are reversed (deepest first) to match ring-dataset handoff order,
/// then concatenated. Fillers contribute an empty string. The result's
/// length equals the total segment count and its order is exactly the order
/// [`ChartData::flat_index`] addresses.
pub fn extract_arc_labels(levels: &[Vec<LevelEntry>]) -> Vec<String> {
    levels
        .get(1..)
        .unwrap_or_default()
        .iter()
        .rev()
        .flat_map(|level| {
            level
                .iter()
                .map(|entry| String::from(entry.label().unwrap_or("")))
        })
        .collect()
}

/// Everything a rendering engine and the interaction adapters need,
/// produced by one pipeline run.
///
/// The root level is not part of the datasets; its label becomes the chart
/// [`title`](Self::title). Datasets are ordered deepest ring first.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartData {
    title: String,
    datasets: Vec<RingDataset>,
    arc_labels: Vec<String>,
}

impl ChartData {
    /// Chart title, taken from the root node's label.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Ring datasets in handoff order (index 0 is the deepest ring).
    pub fn datasets(&self) -> &[RingDataset] {
        &self.datasets
    }

    /// The flat label sequence, aligned with [`Self::flat_index`].
    pub fn arc_labels(&self) -> &[String] {
        &self.arc_labels
    }

    /// Number of rings.
    pub fn ring_count(&self) -> usize {
        self.datasets.len()
    }

    /// Total number of segments across all rings.
    pub fn segment_count(&self) -> usize {
        self.datasets.iter().map(RingDataset::len).sum()
    }

    /// The single flat position of `(ring, segment)` across the whole
    /// chart: the summed lengths of all preceding rings plus `segment`.
    ///
    /// Returns `None` when either coordinate is out of range.
    pub fn flat_index(&self, ring: usize, segment: usize) -> Option<usize> {
        let dataset = self.datasets.get(ring)?;
        if segment >= dataset.len() {
            return None;
        }
        let preceding: usize = self.datasets[..ring].iter().map(RingDataset::len).sum();
        Some(preceding + segment)
    }

    /// Label of the segment at `(ring, segment)`; fillers yield `""`.
    pub fn label_at(&self, ring: usize, segment: usize) -> Option<&str> {
        let flat = self.flat_index(ring, segment)?;
        self.arc_labels.get(flat).map(String::as_str)
    }

    /// Value of the segment at `(ring, segment)`.
    pub fn value_at(&self, ring: usize, segment: usize) -> Option<f64> {
        self.datasets.get(ring)?.data.get(segment).copied()
    }

    /// Fill color of the segment at `(ring, segment)`.
    pub fn color_at(&self, ring: usize, segment: usize) -> Option<&str> {
        self.datasets
            .get(ring)?
            .background_color
            .get(segment)
            .map(String::as_str)
    }

    /// Whether `(ring, segment)` is a filler. Out-of-range coordinates
    /// report `false`.
    pub fn is_filler(&self, ring: usize, segment: usize) -> bool {
        self.datasets
            .get(ring)
            .is_some_and(|dataset| dataset.is_filler(segment))
    }

    /// Sum of all segment values in `ring`, fillers included.
    pub fn ring_total(&self, ring: usize) -> Option<f64> {
        self.datasets.get(ring).map(RingDataset::total)
    }
}

/// Run the full tree→chart pipeline.
///
/// Deterministic: the same tree and palette always produce the same
/// [`ChartData`]. The whole structure is recomputed on every call; there is
/// no incremental path, which is fine at the tree sizes this targets
/// (dozens to low hundreds of nodes).
///
/// # Errors
///
/// Fails with [`ColorError`] when the palette is empty (and rings exist) or
/// contains a malformed entry. No partial chart is returned.
pub fn process(tree: &TreeNode, palette: &[&str]) -> Result<ChartData, ColorError> {
    let resolved = tree.resolve();
    let levels = flatten(&resolved);
    let (title, datasets) = build_layers(&levels, palette)?;
    let arc_labels = extract_arc_labels(&levels);
    Ok(ChartData {
        title,
        datasets,
        arc_labels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    const PALETTE: &[&str] = &["#ff0000", "#00ff00"];

    fn sample() -> TreeNode {
        TreeNode::branch(
            "Root",
            vec![
                TreeNode::leaf("A", 10.0),
                TreeNode::branch(
                    "B",
                    vec![TreeNode::leaf("B1", 4.0), TreeNode::leaf("B2", 6.0)],
                ),
            ],
        )
    }

    #[test]
    fn label_sequence_is_reversed_levels_with_empty_fillers() {
        let chart = process(&sample(), PALETTE).unwrap();
        assert_eq!(chart.arc_labels(), &["", "B1", "B2", "A", "B"]);
    }

    #[test]
    fn label_sequence_length_equals_segment_count() {
        let chart = process(&sample(), PALETTE).unwrap();
        assert_eq!(chart.arc_labels().len(), chart.segment_count());
        assert_eq!(chart.segment_count(), 5);
    }

    #[test]
    fn flat_index_is_a_bijection_over_all_segments() {
        let chart = process(&sample(), PALETTE).unwrap();
        let mut seen = vec![false; chart.segment_count()];
        for (ring, dataset) in chart.datasets().iter().enumerate() {
            for segment in 0..dataset.len() {
                let flat = chart.flat_index(ring, segment).unwrap();
                assert!(!seen[flat], "flat index {flat} hit twice");
                seen[flat] = true;
            }
        }
        assert!(seen.iter().all(|&hit| hit), "every flat index addressed");
    }

    #[test]
    fn flat_index_zero_addresses_deepest_first_segment() {
        let chart = process(&sample(), PALETTE).unwrap();
        // The deepest ring's first real segment is B1, right after the
        // filler at flat index 0.
        assert_eq!(chart.flat_index(0, 0), Some(0));
        assert_eq!(chart.label_at(0, 0), Some(""));
        assert!(chart.is_filler(0, 0));
        assert_eq!(chart.label_at(0, 1), Some("B1"));
        assert_eq!(chart.label_at(1, 0), Some("A"));
    }

    #[test]
    fn flat_index_rejects_out_of_range() {
        let chart = process(&sample(), PALETTE).unwrap();
        assert_eq!(chart.flat_index(0, 3), None);
        assert_eq!(chart.flat_index(2, 0), None);
        assert_eq!(chart.label_at(9, 9), None);
        assert_eq!(chart.value_at(0, 9), None);
        assert!(!chart.is_filler(9, 9));
    }

    #[test]
    fn accessors_agree_with_datasets() {
        let chart = process(&sample(), PALETTE).unwrap();
        assert_eq!(chart.title(), "Root");
        assert_eq!(chart.value_at(0, 1), Some(4.0));
        assert_eq!(chart.ring_total(0), Some(20.0));
        assert_eq!(chart.ring_total(1), Some(20.0));
        assert_eq!(chart.color_at(1, 0), Some("rgba(255, 0, 0, 0.9)"));
    }

    #[test]
    fn root_only_tree_yields_empty_but_valid_chart() {
        let chart = process(&TreeNode::named("Empty"), PALETTE).unwrap();
        assert_eq!(chart.title(), "Empty");
        assert_eq!(chart.ring_count(), 0);
        assert_eq!(chart.segment_count(), 0);
        assert!(chart.arc_labels().is_empty(), "no rings, no labels");
    }

    #[test]
    fn process_is_deterministic() {
        let a = process(&sample(), PALETTE).unwrap();
        let b = process(&sample(), PALETTE).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn duplicate_names_are_preserved_as_is() {
        let tree = TreeNode::branch(
            "Root",
            vec![
                TreeNode::branch("X", vec![TreeNode::leaf("Laptops", 120.0)]),
                TreeNode::branch("Y", vec![TreeNode::leaf("Laptops", 80.0)]),
            ],
        );
        let chart = process(&tree, PALETTE).unwrap();
        let laptops = chart
            .arc_labels()
            .iter()
            .filter(|l| l.as_str() == "Laptops")
            .count();
        assert_eq!(laptops, 2);
    }

    #[test]
    fn arc_label_extraction_matches_flatten_reversal() {
        let levels = flatten(&sample().resolve());
        let labels = extract_arc_labels(&levels);
        assert_eq!(labels[0], "".to_string());
        assert_eq!(labels.last().map(String::as_str), Some("B"));
    }
}
