//! Niche selector: selection with a two-phase cross-fade and a moving indicator.
//!
//! Selecting a new niche hides the cards, then commits the selection after the
//! cross-fade delay. Only the latest selection can commit. Hovering a label
//! moves the indicator without touching the content.

use std::time::{Duration, Instant};

use aistudio_types::{Category, SwitcherConfig};
use tracing::debug;

use crate::schedule::DeferredSlot;

/// Left edge of the indicator as a percentage of the track width.
pub fn indicator_position(effective: Category) -> f64 {
    effective.index() as f64 * (100.0 / Category::COUNT as f64)
}

/// Derived placement of the indicator pane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorStyle {
    pub left_percent: f64,
    pub width_percent: f64,
    pub inset_px: f64,
}

#[derive(Debug)]
pub struct CategorySwitcher {
    selected: Category,
    hovered: Option<Category>,
    transitioning: bool,
    pending: DeferredSlot<Category>,
    crossfade: Duration,
    inset_px: f64,
}

impl CategorySwitcher {
    pub fn new(config: &SwitcherConfig) -> Self {
        Self {
            selected: Category::default(),
            hovered: None,
            transitioning: false,
            pending: DeferredSlot::new("niche-swap"),
            crossfade: config.crossfade_delay(),
            inset_px: config.indicator_inset_px,
        }
    }

    pub fn selected(&self) -> Category {
        self.selected
    }

    pub fn hovered(&self) -> Option<Category> {
        self.hovered
    }

    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    /// Category whose swap is waiting for the cross-fade to finish.
    pub fn pending(&self) -> Option<Category> {
        self.pending.pending().copied()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.due_at()
    }

    /// Starts a cross-fade to `category`.
    ///
    /// Selecting the committed category is a no-op unless another swap is
    /// pending, in which case that swap is abandoned.
    pub fn select_category(&mut self, category: Category, now: Instant) {
        if category == self.selected {
            if self.pending.cancel().is_some() {
                self.transitioning = false;
                debug!(category = %category, "pending niche swap abandoned");
            }
            return;
        }
        self.transitioning = true;
        self.pending.schedule(now, self.crossfade, category);
    }

    /// Commits a due swap. Returns `true` when the selection changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(category) = self.pending.take_due(now) else {
            return false;
        };
        debug!(from = %self.selected, to = %category, "niche selection committed");
        self.selected = category;
        self.transitioning = false;
        true
    }

    pub fn set_hovered(&mut self, hovered: Option<Category>) {
        self.hovered = hovered;
    }

    pub fn hover_enter(&mut self, category: Category) {
        self.hovered = Some(category);
    }

    pub fn hover_leave(&mut self) {
        self.hovered = None;
    }

    /// Hovered category if any, else the selected one.
    pub fn effective_category(&self) -> Category {
        self.hovered.unwrap_or(self.selected)
    }

    pub fn indicator_position(&self) -> f64 {
        indicator_position(self.effective_category())
    }

    pub fn indicator(&self) -> IndicatorStyle {
        IndicatorStyle {
            left_percent: self.indicator_position(),
            width_percent: 100.0 / Category::COUNT as f64,
            inset_px: self.inset_px,
        }
    }

    /// Whether a label sits on top of the indicator.
    pub fn is_label_highlighted(&self, category: Category) -> bool {
        match self.hovered {
            Some(hovered) => hovered == category,
            None => self.selected == category,
        }
    }

    /// Whether the cards are shown; they stay mounted but hidden while fading.
    pub fn content_visible(&self) -> bool {
        !self.transitioning
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn switcher() -> CategorySwitcher {
        CategorySwitcher::new(&SwitcherConfig::default())
    }

    #[test]
    fn starts_on_first_niche() {
        let switcher = switcher();
        assert_eq!(switcher.selected(), Category::ECommerce);
        assert_eq!(switcher.indicator_position(), 0.0);
        assert!(switcher.content_visible());
    }

    #[test]
    fn selection_commits_after_crossfade() {
        let start = Instant::now();
        let mut switcher = switcher();
        switcher.select_category(Category::Sales, start);
        assert!(switcher.is_transitioning());
        assert!(!switcher.content_visible());
        assert_eq!(switcher.selected(), Category::ECommerce);

        assert!(!switcher.tick(start + ms(199)));
        assert!(switcher.tick(start + ms(200)));
        assert_eq!(switcher.selected(), Category::Sales);
        assert!(!switcher.is_transitioning());
    }

    #[test]
    fn latest_selection_wins() {
        let start = Instant::now();
        let mut switcher = switcher();
        switcher.select_category(Category::Sales, start);
        switcher.select_category(Category::Coaching, start + ms(50));

        // Sales' deadline passes without a commit.
        assert!(!switcher.tick(start + ms(200)));
        assert_eq!(switcher.selected(), Category::ECommerce);
        assert!(switcher.tick(start + ms(250)));
        assert_eq!(switcher.selected(), Category::Coaching);
        assert!(!switcher.tick(start + ms(1000)));
        assert_eq!(switcher.selected(), Category::Coaching);
    }

    #[test]
    fn reselecting_current_is_noop() {
        let start = Instant::now();
        let mut switcher = switcher();
        switcher.select_category(Category::ECommerce, start);
        assert!(!switcher.is_transitioning());
        assert_eq!(switcher.pending(), None);
    }

    #[test]
    fn reselecting_current_abandons_pending_swap() {
        let start = Instant::now();
        let mut switcher = switcher();
        switcher.select_category(Category::Marketing, start);
        switcher.select_category(Category::ECommerce, start + ms(20));
        assert!(!switcher.is_transitioning());
        assert!(!switcher.tick(start + ms(500)));
        assert_eq!(switcher.selected(), Category::ECommerce);
    }

    #[test]
    fn hover_moves_indicator_but_not_content() {
        let mut switcher = switcher();
        switcher.hover_enter(Category::Marketing);
        assert_eq!(switcher.indicator_position(), 20.0);
        assert_eq!(switcher.selected(), Category::ECommerce);
        assert!(switcher.is_label_highlighted(Category::Marketing));
        assert!(!switcher.is_label_highlighted(Category::ECommerce));

        switcher.hover_leave();
        assert_eq!(switcher.indicator_position(), 0.0);
        assert!(switcher.is_label_highlighted(Category::ECommerce));
    }

    #[test]
    fn indicator_spans_one_slot_with_inset() {
        let mut switcher = switcher();
        switcher.set_hovered(Some(Category::RealEstate));
        let style = switcher.indicator();
        assert_eq!(style.left_percent, 80.0);
        assert_eq!(style.width_percent, 20.0);
        assert_eq!(style.inset_px, 4.0);
    }
}
