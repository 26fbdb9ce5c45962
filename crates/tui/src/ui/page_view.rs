//! Scrollable page surface.
//!
//! Holds the current [`Document`], the scroll position in rows, and an
//! optional smooth-scroll animation. Implements the engine's [`Viewport`] by
//! converting rows to CSS pixels with `terminal.px_per_row`, so the
//! navigation reference line and the reveal threshold keep their meaning.

use std::time::{Duration, Instant};

use aistudio_engine::Viewport;
use aistudio_types::{ElementRect, Route, TerminalConfig};

use super::document::Document;

/// Vertical scroll bookkeeping in terminal rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollMetrics {
    offset: u16,
    content_height: u16,
    viewport_height: u16,
}

impl ScrollMetrics {
    pub const fn offset(&self) -> u16 {
        self.offset
    }

    pub const fn viewport_height(&self) -> u16 {
        self.viewport_height
    }

    pub fn max_offset(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    pub fn update_viewport_height(&mut self, viewport_height: u16) {
        self.viewport_height = viewport_height;
        self.clamp_offset();
    }

    pub fn update_content_height(&mut self, content_height: u16) {
        self.content_height = content_height;
        self.clamp_offset();
    }

    /// Moves to `offset` (clamped). Returns `true` when the position changed.
    pub fn set_offset(&mut self, offset: u16) -> bool {
        let next = offset.min(self.max_offset());
        let changed = next != self.offset;
        self.offset = next;
        changed
    }

    /// Scrolls by relative row count (`+` down, `-` up).
    pub fn scroll_lines(&mut self, delta: i32) -> bool {
        let next = (i32::from(self.offset) + delta).clamp(0, i32::from(self.max_offset()));
        self.set_offset(next as u16)
    }

    fn clamp_offset(&mut self) {
        self.offset = self.offset.min(self.max_offset());
    }
}

/// Cubic ease-out: fast start, gentle landing.
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct SmoothScroll {
    from: u16,
    to: u16,
    /// Set by the first [`PageView::advance`] after the scroll was requested.
    started: Option<Instant>,
}

#[derive(Debug)]
pub struct PageView {
    route: Route,
    document: Document,
    metrics: ScrollMetrics,
    animation: Option<SmoothScroll>,
    px_per_row: f64,
    smooth_duration: Duration,
}

impl PageView {
    pub fn new(route: Route, document: Document, terminal: &TerminalConfig) -> Self {
        let mut metrics = ScrollMetrics::default();
        metrics.update_content_height(document.height());
        Self {
            route,
            document,
            metrics,
            animation: None,
            px_per_row: f64::from(terminal.px_per_row.max(1)),
            smooth_duration: terminal.smooth_scroll_duration(),
        }
    }

    /// Swaps in the page of a newly committed route, scrolled to the top.
    pub fn replace_document(&mut self, route: Route, document: Document) {
        self.route = route;
        self.metrics.update_content_height(document.height());
        self.metrics.set_offset(0);
        self.document = document;
        self.animation = None;
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn offset(&self) -> u16 {
        self.metrics.offset()
    }

    pub fn viewport_rows(&self) -> u16 {
        self.metrics.viewport_height()
    }

    /// Returns `true` when the height changed.
    pub fn set_viewport_rows(&mut self, rows: u16) -> bool {
        if rows == self.metrics.viewport_height() {
            return false;
        }
        self.metrics.update_viewport_height(rows);
        true
    }

    /// Manual scrolling interrupts any smooth scroll in flight.
    pub fn scroll_by(&mut self, rows: i32) -> bool {
        self.animation = None;
        self.metrics.scroll_lines(rows)
    }

    pub fn scroll_to_top(&mut self) -> bool {
        self.animation = None;
        self.metrics.set_offset(0)
    }

    pub fn scroll_to_bottom(&mut self) -> bool {
        self.animation = None;
        self.metrics.set_offset(self.metrics.max_offset())
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Steps the smooth scroll. Returns `true` when the offset moved.
    pub fn advance(&mut self, now: Instant) -> bool {
        let Some(animation) = self.animation.as_mut() else {
            return false;
        };
        let started = *animation.started.get_or_insert(now);
        let elapsed = now.saturating_duration_since(started);
        let progress = if self.smooth_duration.is_zero() {
            1.0
        } else {
            elapsed.as_secs_f64() / self.smooth_duration.as_secs_f64()
        };
        let from = f64::from(animation.from);
        let to = f64::from(animation.to);
        let position = (from + (to - from) * ease_out_cubic(progress)).round().max(0.0) as u16;
        if progress >= 1.0 {
            self.animation = None;
        }
        self.metrics.set_offset(position)
    }

    fn rows_to_px(&self, rows: i32) -> f64 {
        f64::from(rows) * self.px_per_row
    }
}

impl Viewport for PageView {
    fn viewport_height(&self) -> f64 {
        self.rows_to_px(i32::from(self.metrics.viewport_height()))
    }

    fn bounding_rect(&self, id: &str) -> Option<ElementRect> {
        let block = self.document.block(id)?;
        let top = i32::from(block.top) - i32::from(self.metrics.offset());
        let bottom = top + i32::from(block.height);
        Some(ElementRect::new(self.rows_to_px(top), self.rows_to_px(bottom)))
    }

    fn scroll_into_view(&mut self, id: &str) {
        let Some(block) = self.document.block(id) else {
            return;
        };
        let target = block.top.min(self.metrics.max_offset());
        let from = self.metrics.offset();
        self.animation = (target != from).then_some(SmoothScroll {
            from,
            to: target,
            started: None,
        });
    }

    fn reveal_targets(&self) -> Vec<String> {
        self.document.reveal_targets()
    }
}
