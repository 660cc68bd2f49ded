// Copyright 2025 the Sunburst Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input tree and bottom-up value aggregation.
//!
//! [`TreeNode`] is the structure the embedding application hands to the
//! pipeline: a name, an optional explicit value, and an ordered list of
//! children. [`TreeNode::resolve`] produces a [`ValuedNode`] tree where
//! every node carries its final aggregated value, leaving the input
//! untouched.

use alloc::string::String;
use alloc::vec::Vec;

/// A node of the input hierarchy.
///
/// A node either carries an explicit `value` or is aggregated from its
/// children; a node with neither resolves to `0.0`. Names are not required
/// to be unique across the tree (the data-label formatter disambiguates
/// duplicates at display time).
///
/// Values are passed through unvalidated: negative or non-finite values are
/// the caller's responsibility.
#[derive(Clone, Debug, PartialEq)]
pub struct TreeNode {
    /// Display name for this node.
    pub name: String,
    /// Explicit value; when present it takes precedence over the child sum.
    pub value: Option<f64>,
    /// Ordered children. Order is preserved all the way into ring order.
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Create a node with neither value nor children.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            children: Vec::new(),
        }
    }

    /// Create a leaf carrying an explicit value.
    pub fn leaf(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value: Some(value),
            children: Vec::new(),
        }
    }

    /// Create an interior node whose value is aggregated from `children`.
    pub fn branch(name: impl Into<String>, children: Vec<Self>) -> Self {
        Self {
            name: name.into(),
            value: None,
            children,
        }
    }

    /// Resolve aggregated values bottom-up into a fresh annotated tree.
    ///
    /// Post-order: children first, then this node. An explicit value wins;
    /// otherwise the node's value is the in-order sum of its resolved
    /// children, or `0.0` for a node with neither. The input tree is not
    /// mutated, so resolving again yields the same result.
    pub fn resolve(&self) -> ValuedNode {
        let children: Vec<ValuedNode> = self.children.iter().map(TreeNode::resolve).collect();
        let value = self
            .value
            .unwrap_or_else(|| children.iter().map(|c| c.value).sum());
        ValuedNode {
            label: self.name.clone(),
            value,
            children,
        }
    }
}

/// A resolved tree node: same shape as [`TreeNode`] with the aggregated
/// value filled in everywhere.
#[derive(Clone, Debug, PartialEq)]
pub struct ValuedNode {
    /// Display name, copied from the input node.
    pub label: String,
    /// Final value (explicit, aggregated, or `0.0`).
    pub value: f64,
    /// Resolved children, in input order.
    pub children: Vec<ValuedNode>,
}

impl ValuedNode {
    /// Depth of the tree rooted here (a lone node has depth 1).
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(ValuedNode::depth)
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn explicit_value_passes_through() {
        let n = TreeNode::leaf("A", 10.0);
        assert_eq!(n.resolve().value, 10.0);
    }

    #[test]
    fn aggregates_children_in_order() {
        let n = TreeNode::branch(
            "Root",
            vec![
                TreeNode::leaf("A", 10.0),
                TreeNode::branch(
                    "B",
                    vec![TreeNode::leaf("B1", 4.0), TreeNode::leaf("B2", 6.0)],
                ),
            ],
        );
        let v = n.resolve();
        assert_eq!(v.value, 20.0);
        assert_eq!(v.children[1].value, 10.0);
        assert_eq!(v.children[1].children[0].value, 4.0);
    }

    #[test]
    fn bare_node_resolves_to_zero() {
        assert_eq!(TreeNode::named("empty").resolve().value, 0.0);
    }

    #[test]
    fn leaf_without_value_contributes_zero_to_sum() {
        let n = TreeNode::branch(
            "Root",
            vec![TreeNode::named("nothing"), TreeNode::leaf("B", 7.0)],
        );
        assert_eq!(n.resolve().value, 7.0);
    }

    #[test]
    fn explicit_value_wins_over_child_sum() {
        let n = TreeNode {
            name: "Root".into(),
            value: Some(100.0),
            children: vec![TreeNode::leaf("A", 1.0)],
        };
        let v = n.resolve();
        assert_eq!(v.value, 100.0);
        // Children are still resolved for the levels below.
        assert_eq!(v.children[0].value, 1.0);
    }

    #[test]
    fn resolve_does_not_mutate_input() {
        let n = TreeNode::branch("Root", vec![TreeNode::leaf("A", 3.0)]);
        let before = n.clone();
        let _ = n.resolve();
        let _ = n.resolve();
        assert_eq!(n, before);
    }

    #[test]
    fn negative_values_pass_through() {
        let n = TreeNode::branch(
            "Root",
            vec![TreeNode::leaf("A", -5.0), TreeNode::leaf("B", 8.0)],
        );
        assert_eq!(n.resolve().value, 3.0);
    }

    #[test]
    fn depth_counts_root_level() {
        let n = TreeNode::branch(
            "Root",
            vec![TreeNode::branch("B", vec![TreeNode::leaf("B1", 1.0)])],
        );
        assert_eq!(n.resolve().depth(), 3);
        assert_eq!(TreeNode::leaf("lone", 1.0).resolve().depth(), 1);
    }
}
