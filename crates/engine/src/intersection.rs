//! Viewport intersection observation.
//!
//! The observation root is the viewport with its bottom edge pulled up by
//! `bottom_margin`. A target intersects when a positive share of its height,
//! at least `threshold`, lies inside that root. The first batch after
//! observation reports every target; later batches only report changes.

use aistudio_types::{ElementRect, RevealConfig};
use indexmap::IndexMap;
use tracing::trace;

use crate::{
    host::Viewport,
    subscription::{Channel, Subscription, SubscriptionHub},
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionOptions {
    pub threshold: f64,
    pub bottom_margin: f64,
}

impl From<&RevealConfig> for IntersectionOptions {
    fn from(config: &RevealConfig) -> Self {
        Self {
            threshold: config.threshold,
            bottom_margin: config.bottom_margin_px,
        }
    }
}

/// One target's state in an observation batch.
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionEntry {
    pub target: String,
    pub ratio: f64,
    pub is_intersecting: bool,
}

/// Share of `rect` lying inside `[0, root_bottom]`.
///
/// A zero-height element counts as fully inside when its edge is in the root.
pub fn intersection_ratio(rect: ElementRect, root_bottom: f64) -> f64 {
    let height = rect.height();
    if height <= 0.0 {
        return if rect.top >= 0.0 && rect.top <= root_bottom { 1.0 } else { 0.0 };
    }
    (rect.overlap(0.0, root_bottom) / height).clamp(0.0, 1.0)
}

#[derive(Debug)]
pub struct IntersectionObserver {
    options: IntersectionOptions,
    /// Last reported state per target; `None` until first observed.
    targets: IndexMap<String, Option<bool>>,
    subscription: Option<Subscription>,
}

impl IntersectionObserver {
    pub fn new(options: IntersectionOptions, hub: &SubscriptionHub, owner: &'static str) -> Self {
        Self {
            options,
            targets: IndexMap::new(),
            subscription: Some(hub.subscribe(Channel::Intersection, owner)),
        }
    }

    pub fn observe(&mut self, target: impl Into<String>) {
        if self.is_connected() {
            self.targets.entry(target.into()).or_insert(None);
        }
    }

    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    pub fn is_connected(&self) -> bool {
        self.subscription.is_some()
    }

    /// Computes the next observation batch against the current geometry.
    ///
    /// Targets missing from the page are reported as not intersecting.
    pub fn take_records<V: Viewport + ?Sized>(&mut self, viewport: &V) -> Vec<IntersectionEntry> {
        if !self.is_connected() {
            return Vec::new();
        }
        let root_bottom = (viewport.viewport_height() - self.options.bottom_margin).max(0.0);
        let threshold = self.options.threshold;
        let mut records = Vec::new();
        for (target, last) in self.targets.iter_mut() {
            let ratio = viewport
                .bounding_rect(target)
                .map(|rect| intersection_ratio(rect, root_bottom))
                .unwrap_or(0.0);
            let is_intersecting = ratio > 0.0 && ratio >= threshold;
            if *last != Some(is_intersecting) {
                *last = Some(is_intersecting);
                records.push(IntersectionEntry {
                    target: target.clone(),
                    ratio,
                    is_intersecting,
                });
            }
        }
        if !records.is_empty() {
            trace!(count = records.len(), "intersection batch");
        }
        records
    }

    /// Stops observing every target and releases the subscription.
    pub fn disconnect(&mut self) {
        self.targets.clear();
        self.subscription = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_counts_visible_share() {
        assert_eq!(intersection_ratio(ElementRect::new(0.0, 100.0), 500.0), 1.0);
        assert_eq!(intersection_ratio(ElementRect::new(450.0, 550.0), 500.0), 0.5);
        assert_eq!(intersection_ratio(ElementRect::new(-80.0, 20.0), 500.0), 0.2);
        assert_eq!(intersection_ratio(ElementRect::new(600.0, 700.0), 500.0), 0.0);
    }

    #[test]
    fn zero_height_elements_use_their_edge() {
        assert_eq!(intersection_ratio(ElementRect::new(10.0, 10.0), 500.0), 1.0);
        assert_eq!(intersection_ratio(ElementRect::new(510.0, 510.0), 500.0), 0.0);
    }

    #[test]
    fn options_follow_reveal_config() {
        let options = IntersectionOptions::from(&RevealConfig::default());
        assert_eq!(options.threshold, 0.15);
        assert_eq!(options.bottom_margin, 50.0);
    }
}
