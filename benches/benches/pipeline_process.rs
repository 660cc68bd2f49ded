// Copyright 2025 the Sunburst Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use sunburst_pipeline::{TreeNode, flatten, process};

const PALETTE: &[&str] = &[
    "#e41a1c", "#377eb8", "#4daf4a", "#984ea3", "#ff7f00", "#ffff33",
];

/// One root with `breadth` leaves: the widest single-ring shape.
fn gen_wide_tree(breadth: usize) -> TreeNode {
    let children = (0..breadth)
        .map(|i| TreeNode::leaf(format!("leaf-{i}"), (i % 17 + 1) as f64))
        .collect();
    TreeNode::branch("wide", children)
}

/// A binary tree of the given depth; exercises filler-free expansion.
fn gen_deep_tree(depth: usize) -> TreeNode {
    fn build(level: usize, depth: usize) -> TreeNode {
        if level == depth {
            TreeNode::leaf(format!("leaf-{level}"), 1.0)
        } else {
            TreeNode::branch(
                format!("node-{level}"),
                vec![build(level + 1, depth), build(level + 1, depth)],
            )
        }
    }
    build(0, depth)
}

/// Ragged fan-out: every level keeps one leaf behind, so filler chains
/// propagate to the deepest ring.
fn gen_ragged_tree(depth: usize, fan: usize) -> TreeNode {
    fn build(level: usize, depth: usize, fan: usize) -> TreeNode {
        if level == depth {
            return TreeNode::leaf(format!("leaf-{level}"), 1.0);
        }
        let mut children: Vec<TreeNode> = (0..fan.saturating_sub(1))
            .map(|_| build(level + 1, depth, fan))
            .collect();
        children.push(TreeNode::leaf(format!("short-{level}"), 2.0));
        TreeNode::branch(format!("node-{level}"), children)
    }
    build(0, depth, fan)
}

fn bench_process(c: &mut Criterion) {
    let mut group = c.benchmark_group("process");

    for &breadth in &[32_usize, 256] {
        let tree = gen_wide_tree(breadth);
        group.throughput(Throughput::Elements(breadth as u64));
        group.bench_function(format!("wide_{breadth}"), |b| {
            b.iter(|| process(black_box(&tree), black_box(PALETTE)).unwrap());
        });
    }

    for &depth in &[4_usize, 7] {
        let tree = gen_deep_tree(depth);
        group.bench_function(format!("deep_{depth}"), |b| {
            b.iter(|| process(black_box(&tree), black_box(PALETTE)).unwrap());
        });
    }

    let ragged = gen_ragged_tree(5, 3);
    group.bench_function("ragged_5x3", |b| {
        b.iter(|| process(black_box(&ragged), black_box(PALETTE)).unwrap());
    });

    group.finish();
}

fn bench_flatten(c: &mut Criterion) {
    let resolved = gen_ragged_tree(5, 3).resolve();
    c.bench_function("flatten/ragged_5x3", |b| {
        b.iter(|| flatten(black_box(&resolved)));
    });
}

criterion_group!(benches, bench_process, bench_flatten);
criterion_main!(benches);
