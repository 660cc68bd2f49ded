// Copyright 2025 the Sunburst Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart configuration surface.
//!
//! Plain config structs with defaults applied when a field is left at its
//! `Default`. The click callback is deliberately not part of the config: it
//! is a closure handed to [`crate::click::handle`] at event time.

use alloc::string::String;
use alloc::vec::Vec;

/// Horizontal alignment of the chart title.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum TitleAlign {
    /// Align to the start edge.
    Start,
    /// Centered (the default).
    #[default]
    Center,
    /// Align to the end edge.
    End,
}

/// Title block configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct TitleConfig {
    /// Title text. When empty, the chart title from the pipeline is used.
    pub text: String,
    /// Horizontal alignment. Defaults to [`TitleAlign::Center`].
    pub align: TitleAlign,
    /// Font size in points. Defaults to 12.
    pub font_size: u32,
    /// Text color. Defaults to `#000`.
    pub color: String,
}

impl Default for TitleConfig {
    fn default() -> Self {
        Self {
            text: String::new(),
            align: TitleAlign::Center,
            font_size: 12,
            color: String::from("#000"),
        }
    }
}

/// Data-label configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelConfig {
    /// Whether data labels are drawn at all.
    pub enabled: bool,
    /// Font size in points. Defaults to 11.
    pub font_size: u32,
    /// Text color. Defaults to `#000000`.
    pub color: String,
    /// Append the segment value to the label text.
    pub show_values: bool,
    /// Show only the value (requires `show_values`).
    pub values_only: bool,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            font_size: 11,
            color: String::from("#000000"),
            show_values: false,
            values_only: false,
        }
    }
}

/// Tooltip configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipConfig {
    /// Whether tooltips are shown at all. Defaults to true.
    pub enabled: bool,
    /// Route tooltip content to an external presenter instead of the
    /// rendering engine's built-in tooltip.
    pub custom: bool,
    /// Horizontal offset of a custom tooltip, in percent of its size.
    pub offset_x: f64,
    /// Vertical offset of a custom tooltip, in percent of its size.
    pub offset_y: f64,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            custom: false,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}

/// Top-level chart configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfig {
    /// Radius fraction of the center cutout. Defaults to 0.5.
    pub cutout: f64,
    /// Color palette for top-level segments, cycled via modulo. Any format
    /// the pipeline's color boundary accepts (hex, `rgb(...)`, named).
    pub colors: Vec<String>,
    /// Title block.
    pub title: TitleConfig,
    /// Data labels.
    pub labels: LabelConfig,
    /// Tooltip behavior.
    pub tooltip: TooltipConfig,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            cutout: 0.5,
            colors: Vec::new(),
            title: TitleConfig::default(),
            labels: LabelConfig::default(),
            tooltip: TooltipConfig::default(),
        }
    }
}

impl ChartConfig {
    /// The palette as string slices, in the shape the pipeline expects.
    pub fn palette(&self) -> Vec<&str> {
        self.colors.iter().map(String::as_str).collect()
    }
}
