// Copyright 2025 the Sunburst Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wire the interaction adapters to a pretend rendering engine.
//!
//! A scripted pointer path drives the tooltip state machine, a click lands
//! on one arc, and the data-label formatter prints what each visible
//! segment would show (note the disambiguated duplicate "Laptops" leaves).
//!
//! Run:
//! - `cargo run -p sunburst_demos --example interact_tooltip`

use sunburst_interact::click;
use sunburst_interact::config::{ChartConfig, LabelConfig};
use sunburst_interact::labels::{DisplayGate, LabelFormatter};
use sunburst_interact::tooltip::{TooltipContent, TooltipPresenter, TooltipState};
use sunburst_pipeline::{TreeNode, process};

/// Prints tooltip transitions instead of positioning a DOM node.
struct StdoutTooltip;

impl TooltipPresenter for StdoutTooltip {
    fn show(&mut self, content: &TooltipContent) {
        let percent = content.share() * 100.0;
        println!(
            "tooltip: {} = {} ({percent:.1}% of ring, color {})",
            content.label,
            content.value,
            content.color.as_deref().unwrap_or("?"),
        );
    }

    fn hide(&mut self) {
        println!("tooltip: hidden");
    }
}

fn main() {
    let tree = TreeNode::branch(
        "Company Sales",
        vec![
            TreeNode::branch(
                "Computers",
                vec![
                    TreeNode::leaf("Laptops", 120.0),
                    TreeNode::leaf("Laptops", 80.0),
                ],
            ),
            TreeNode::leaf("Furniture", 90.0),
        ],
    );

    let config = ChartConfig {
        colors: ["#36a2eb", "#ff6384"].map(String::from).to_vec(),
        labels: LabelConfig {
            show_values: true,
            ..LabelConfig::default()
        },
        ..ChartConfig::default()
    };

    let chart = process(&tree, &config.palette()).expect("palette is valid");

    // Scripted hover path: enter Laptops(1), sit still, slide to its
    // sibling, cross the filler under Furniture, then leave the chart.
    let mut state = TooltipState::new();
    let mut surface = StdoutTooltip;
    let path = [
        Some((0, 0)),
        Some((0, 0)),
        Some((0, 1)),
        Some((0, 2)),
        None,
    ];
    for hover in path {
        state.present(&chart, &config.tooltip, hover, &mut surface);
    }

    // A click on the outer ring's Furniture arc.
    click::handle(&chart, 1, 1, &mut |arc| {
        println!("clicked: {} = {}", arc.label, arc.value);
    });

    // Data labels once the intro animation settles.
    let formatter = LabelFormatter::new(&chart);
    let gate = DisplayGate {
        animation_complete: true,
    };
    println!("labels:");
    for (ring, dataset) in chart.datasets().iter().enumerate() {
        for segment in 0..dataset.len() {
            if !gate.display(&chart, &config.labels, ring, segment) {
                continue;
            }
            if let Some(text) = formatter.format(&chart, &config.labels, ring, segment) {
                println!("  ({ring}, {segment}): {}", text.replace('\n', " / "));
            }
        }
    }
}
