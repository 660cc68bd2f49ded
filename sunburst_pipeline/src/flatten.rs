// Copyright 2025 the Sunburst Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Level flattening: tree → per-depth entry lists with parent links.
//!
//! [`flatten`] walks the resolved tree breadth-first and emits one
//! [`LevelEntry`] list per depth. Whenever some sibling at a level expands
//! further but another does not, the non-expanding branch is padded with a
//! [`LevelEntry::Filler`] carrying the branch's value, so every level below
//! keeps the same total value as its parent level. Fillers propagate all the
//! way down to the deepest level.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::tree::ValuedNode;

/// One entry of a flattened level.
///
/// `parent` indexes into the *previous* level's entry list; it is `None`
/// only for the root entry. A filler is a synthetic entry padding a branch
/// that terminated above this depth; it keeps the value of the branch it
/// pads for so ring totals stay conserved.
#[derive(Clone, Debug, PartialEq)]
pub enum LevelEntry {
    /// An entry backed by a real tree node.
    Real {
        /// Node label.
        label: String,
        /// Resolved node value.
        value: f64,
        /// Index of the parent entry in the previous level.
        parent: Option<usize>,
    },
    /// A synthetic padding entry for a branch that ended earlier.
    Filler {
        /// Value carried forward from the padded branch.
        value: f64,
        /// Index of the parent entry in the previous level.
        parent: usize,
    },
}

impl LevelEntry {
    /// The entry's value (fillers carry their padded branch's value).
    pub fn value(&self) -> f64 {
        match *self {
            Self::Real { value, .. } | Self::Filler { value, .. } => value,
        }
    }

    /// Index of the parent entry in the previous level, if any.
    pub fn parent(&self) -> Option<usize> {
        match *self {
            Self::Real { parent, .. } => parent,
            Self::Filler { parent, .. } => Some(parent),
        }
    }

    /// The label, for real entries.
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Real { label, .. } => Some(label),
            Self::Filler { .. } => None,
        }
    }

    /// Whether this is a synthetic filler entry.
    pub fn is_filler(&self) -> bool {
        matches!(self, Self::Filler { .. })
    }
}

/// What a level hands to the level below it.
enum Pending<'a> {
    /// A real node, with its parent's slot in the level being emitted.
    Node(&'a ValuedNode, Option<usize>),
    /// Filler carrying a value, with its parent's slot.
    Filler(f64, usize),
}

/// Flatten a resolved tree into per-level entry lists.
///
/// Level 0 holds the root alone. The walk stops at the first level that
/// produces no successors, i.e. when every branch has simultaneously
/// reached its deepest leaf. The number of levels equals the tree depth.
pub fn flatten(root: &ValuedNode) -> Vec<Vec<LevelEntry>> {
    let mut levels = Vec::new();
    let mut current: Vec<Pending<'_>> = vec![Pending::Node(root, None)];

    while !current.is_empty() {
        let any_expands = current
            .iter()
            .any(|p| matches!(p, Pending::Node(n, _) if !n.children.is_empty()));

        let mut entries: Vec<LevelEntry> = Vec::with_capacity(current.len());
        let mut next: Vec<Pending<'_>> = Vec::new();

        for pending in &current {
            let slot = entries.len();
            match *pending {
                Pending::Node(node, parent) => {
                    entries.push(LevelEntry::Real {
                        label: node.label.clone(),
                        value: node.value,
                        parent,
                    });
                    if node.children.is_empty() {
                        if any_expands {
                            next.push(Pending::Filler(node.value, slot));
                        }
                    } else {
                        for child in &node.children {
                            next.push(Pending::Node(child, Some(slot)));
                        }
                    }
                }
                Pending::Filler(value, parent) => {
                    entries.push(LevelEntry::Filler { value, parent });
                    if any_expands {
                        next.push(Pending::Filler(value, slot));
                    }
                }
            }
        }

        levels.push(entries);
        current = next;
    }

    levels
}
