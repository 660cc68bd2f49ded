// Copyright 2025 the Sunburst Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Build the chart representation for a small sales hierarchy and dump it.
//!
//! Shows the full pipeline: aggregation, level flattening with fillers,
//! ring datasets with inherited colors, and the flat label sequence.
//!
//! Run:
//! - `cargo run -p sunburst_demos --example pipeline_basics`

use sunburst_pipeline::{TreeNode, process};

fn company_sales() -> TreeNode {
    TreeNode::branch(
        "Company Sales",
        vec![
            TreeNode::branch(
                "Electronics",
                vec![
                    TreeNode::branch(
                        "Computers",
                        vec![
                            TreeNode::leaf("Laptops", 120.0),
                            TreeNode::leaf("Laptops", 80.0),
                        ],
                    ),
                    TreeNode::branch(
                        "Mobile Devices",
                        vec![
                            TreeNode::leaf("Smartphones", 200.0),
                            TreeNode::leaf("Tablets", 50.0),
                        ],
                    ),
                ],
            ),
            TreeNode::leaf("Furniture", 90.0),
            TreeNode::branch(
                "Home Appliances",
                vec![
                    TreeNode::leaf("Refrigerators", 60.0),
                    TreeNode::leaf("Washers", 40.0),
                ],
            ),
        ],
    )
}

fn main() {
    let palette = ["#36a2eb", "#ff6384", "#ffce56", "#4bc0c0", "#9966ff"];
    let chart = process(&company_sales(), &palette).expect("palette is valid");

    println!("title: {}", chart.title());
    println!(
        "rings: {} (deepest first), segments: {}",
        chart.ring_count(),
        chart.segment_count()
    );

    for (ring, dataset) in chart.datasets().iter().enumerate() {
        println!("\nring {ring} (total {}):", dataset.total());
        for segment in 0..dataset.len() {
            let label = chart.label_at(ring, segment).unwrap_or("");
            let marker = if chart.is_filler(ring, segment) {
                " [filler]"
            } else {
                ""
            };
            println!(
                "  [{segment}] {:>12} {:>7}  {}{marker}",
                if label.is_empty() { "-" } else { label },
                dataset.data[segment],
                dataset.background_color[segment],
            );
        }
    }

    println!("\narc labels (flat order): {:?}", chart.arc_labels());
}
