// Copyright 2025 the Sunburst Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tooltip content resolution and hover-state transitions.
//!
//! [`resolve`] maps a hover's `(ring, segment)` coordinates to the content
//! a tooltip displays; fillers and out-of-range coordinates resolve to
//! nothing. [`TooltipState`] turns a stream of hover positions into
//! [`Show`](TooltipEvent::Show)/[`Hide`](TooltipEvent::Hide) transitions
//! for the single shared tooltip surface, which a [`TooltipPresenter`]
//! implementation owns.

use alloc::string::{String, ToString};

use sunburst_pipeline::ChartData;

use crate::config::TooltipConfig;

/// Resolved content for one tooltip display.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipContent {
    /// Segment label.
    pub label: String,
    /// Segment value.
    pub value: f64,
    /// Denominator for percentage display: the containing ring's total
    /// (not the true parent node's value — a kept approximation).
    pub parent_value: f64,
    /// The segment's assigned fill color, when available.
    pub color: Option<String>,
}

impl TooltipContent {
    /// The segment's share of its ring, in `[0, 1]`.
    pub fn share(&self) -> f64 {
        if self.parent_value == 0.0 {
            0.0
        } else {
            self.value / self.parent_value
        }
    }
}

/// Resolve tooltip content for a hovered segment.
///
/// Returns `None` for fillers (display is suppressed entirely) and for
/// out-of-range coordinates.
pub fn resolve(chart: &ChartData, ring: usize, segment: usize) -> Option<TooltipContent> {
    let value = chart.value_at(ring, segment)?;
    if chart.is_filler(ring, segment) {
        return None;
    }
    Some(TooltipContent {
        label: chart.label_at(ring, segment)?.to_string(),
        value,
        parent_value: chart.ring_total(ring)?,
        color: chart.color_at(ring, segment).map(String::from),
    })
}

/// The external tooltip surface.
///
/// At most one logical owner exists at a time; [`TooltipState`] acquires
/// and releases it on every hover transition. Presentation (markup,
/// positioning, styling) is entirely the implementor's concern.
pub trait TooltipPresenter {
    /// Display `content` on the tooltip surface.
    fn show(&mut self, content: &TooltipContent);
    /// Clear the tooltip surface.
    fn hide(&mut self);
}

/// A hover-state transition.
#[derive(Clone, Debug, PartialEq)]
pub enum TooltipEvent {
    /// The hovered segment changed to one with displayable content.
    Show(TooltipContent),
    /// The pointer left all displayable segments.
    Hide,
}

/// Tracks the hovered segment and emits transitions on change.
///
/// Hovering a filler behaves like hovering nothing: the tooltip hides.
/// Re-reporting the same segment emits no event, so a presenter is only
/// touched when the display actually needs to change.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TooltipState {
    current: Option<(usize, usize)>,
}

impl TooltipState {
    /// Create a state with nothing hovered.
    pub fn new() -> Self {
        Self { current: None }
    }

    /// The currently displayed `(ring, segment)`, if any.
    pub fn current(&self) -> Option<(usize, usize)> {
        self.current
    }

    /// Report the hover position for this frame (`None` when the pointer is
    /// outside every segment) and get the transition to apply, if any.
    pub fn update(
        &mut self,
        chart: &ChartData,
        hover: Option<(usize, usize)>,
    ) -> Option<TooltipEvent> {
        let resolved =
            hover.and_then(|(ring, segment)| {
                resolve(chart, ring, segment).map(|content| ((ring, segment), content))
            });
        match resolved {
            Some((position, content)) => {
                if self.current == Some(position) {
                    None
                } else {
                    self.current = Some(position);
                    Some(TooltipEvent::Show(content))
                }
            }
            None => self.current.take().map(|_| TooltipEvent::Hide),
        }
    }

    /// [`update`](Self::update) and drive `presenter` with the result,
    /// honoring [`TooltipConfig::enabled`].
    pub fn present<P: TooltipPresenter>(
        &mut self,
        chart: &ChartData,
        config: &TooltipConfig,
        hover: Option<(usize, usize)>,
        presenter: &mut P,
    ) {
        let hover = if config.enabled { hover } else { None };
        match self.update(chart, hover) {
            Some(TooltipEvent::Show(content)) => presenter.show(&content),
            Some(TooltipEvent::Hide) => presenter.hide(),
            None => {}
        }
    }
}
