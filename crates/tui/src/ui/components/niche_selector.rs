//! Category track with the sliding indicator.
//!
//! Drawn by the page component into the off-screen page buffer; the label
//! areas it records are translated to screen coordinates for hit-testing.

use std::time::Instant;

use aistudio_engine::IndicatorStyle;
use aistudio_types::Category;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Position, Rect},
    text::Span,
    widgets::{Paragraph, Widget},
};

use super::find_target_index_by_mouse_position;
use crate::app::App;
use crate::ui::theme::{Theme, theme_helpers as th};

/// Screen areas recorded by the last render, clipped to the visible page.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NicheSelectorState {
    pub track_area: Option<Rect>,
    /// One entry per [`Category::ALL`] slot; empty rects are off screen.
    pub label_areas: Vec<Rect>,
}

/// Equal slots, one per category, in display order.
pub fn label_slots(inner: Rect) -> Vec<Rect> {
    let constraints = [Constraint::Ratio(1, Category::COUNT as u32); Category::COUNT];
    Layout::horizontal(constraints).split(inner).to_vec()
}

/// Column span of the indicator inside the track.
pub fn indicator_area(inner: Rect, style: IndicatorStyle, inset_cols: u16) -> Rect {
    let width = f64::from(inner.width);
    let left = (style.left_percent * width / 100.0).round() as u16;
    let span = (style.width_percent * width / 100.0).round() as u16;
    let x = inner.x + left + inset_cols;
    let width = span.saturating_sub(inset_cols * 2).min(inner.right().saturating_sub(x));
    Rect::new(x, inner.y, width, inner.height)
}

/// Columns taken by the indicator inset, given cells twice as tall as wide.
pub fn inset_columns(inset_px: f64, px_per_row: u16) -> u16 {
    let px_per_column = f64::from(px_per_row.max(1)) / 2.0;
    (inset_px.max(0.0) / px_per_column).ceil() as u16
}

/// Draws the track into `buf` and returns the label slots in `buf` coordinates.
pub fn draw(buf: &mut Buffer, area: Rect, app: &App) -> Vec<Rect> {
    let theme = &app.theme;
    let block = th::block(theme, None, false);
    let inner = block.inner(area);
    block.render(area, buf);

    let style = app.switcher.indicator();
    let inset = inset_columns(style.inset_px, app.config.terminal.px_per_row);
    buf.set_style(indicator_area(inner, style, inset), theme.indicator_style());

    let slots = label_slots(inner);
    for (category, slot) in Category::ALL.into_iter().zip(&slots) {
        let label_style = if app.switcher.is_label_highlighted(category) {
            theme.indicator_label_style()
        } else {
            theme.text_secondary_style()
        };
        Paragraph::new(Span::styled(category.label(), label_style))
            .alignment(Alignment::Center)
            .render(*slot, buf);
    }
    slots
}

/// Applies hover and click on the category labels. Returns `true` when the
/// switcher state changed.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent, now: Instant) -> bool {
    let on_track = app
        .niche_selector
        .track_area
        .is_some_and(|track| track.contains(Position::new(mouse.column, mouse.row)));
    let hit = on_track
        .then(|| find_target_index_by_mouse_position(&app.niche_selector.label_areas, mouse.column, mouse.row))
        .flatten()
        .and_then(Category::from_index);
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            if hit == app.switcher.hovered() {
                return false;
            }
            app.switcher.set_hovered(hit);
            true
        }
        MouseEventKind::Down(MouseButton::Left) => match hit {
            Some(category) => {
                app.switcher.select_category(category, now);
                true
            }
            None => false,
        },
        _ => false,
    }
}

/// Selects the neighbouring category (`+1` right, `-1` left), wrapping.
pub fn step_selection(app: &mut App, step: isize, now: Instant) {
    let base = app.switcher.pending().unwrap_or(app.switcher.selected());
    let count = Category::COUNT as isize;
    let index = (base.index() as isize + step).rem_euclid(count) as usize;
    if let Some(category) = Category::from_index(index) {
        app.switcher.select_category(category, now);
    }
}

#[cfg(test)]
mod tests {
    use aistudio_engine::indicator_position;

    use super::*;

    #[test]
    fn indicator_covers_the_effective_slot_minus_inset() {
        let inner = Rect::new(1, 1, 100, 1);
        let style = IndicatorStyle {
            left_percent: indicator_position(Category::Coaching),
            width_percent: 20.0,
            inset_px: 4.0,
        };
        assert_eq!(indicator_area(inner, style, 1), Rect::new(62, 1, 18, 1));
        assert_eq!(label_slots(inner)[3], Rect::new(61, 1, 20, 1));
    }

    #[test]
    fn inset_rounds_up_to_whole_columns() {
        assert_eq!(inset_columns(4.0, 16), 1);
        assert_eq!(inset_columns(0.0, 16), 0);
        assert_eq!(inset_columns(9.0, 16), 2);
    }
}
