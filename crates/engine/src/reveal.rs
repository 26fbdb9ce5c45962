//! Scroll-reveal flags for the animatable elements of a page.
//!
//! Targets are discovered once when the animator mounts; elements that appear
//! later are never observed. A target's flag follows its intersection state in
//! both directions, so scrolling an element out and back in replays its
//! entrance.

use std::time::Instant;

use aistudio_types::RevealConfig;
use indexmap::IndexMap;
use tracing::debug;

use crate::{
    host::Viewport,
    intersection::{IntersectionEntry, IntersectionObserver, IntersectionOptions},
    subscription::SubscriptionHub,
};

const OWNER: &str = "reveal";

#[derive(Debug)]
struct TargetState {
    visible: bool,
    /// When the target last became visible; hosts use it for staggered fades.
    visible_since: Option<Instant>,
}

#[derive(Debug)]
pub struct RevealAnimator {
    observer: Option<IntersectionObserver>,
    targets: IndexMap<String, TargetState>,
}

impl RevealAnimator {
    /// Snapshots the page's reveal targets and starts observing them.
    pub fn mount<V: Viewport + ?Sized>(viewport: &V, hub: &SubscriptionHub, config: &RevealConfig) -> Self {
        let mut observer = IntersectionObserver::new(IntersectionOptions::from(config), hub, OWNER);
        let mut targets = IndexMap::new();
        for id in viewport.reveal_targets() {
            observer.observe(id.clone());
            targets.insert(
                id,
                TargetState {
                    visible: false,
                    visible_since: None,
                },
            );
        }
        debug!(targets = targets.len(), "reveal animator mounted");
        Self {
            observer: Some(observer),
            targets,
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.observer.is_some()
    }

    /// Runs an observation pass and applies it. Returns how many targets changed.
    pub fn observe<V: Viewport + ?Sized>(&mut self, viewport: &V, now: Instant) -> usize {
        let Some(observer) = self.observer.as_mut() else {
            return 0;
        };
        let entries = observer.take_records(viewport);
        self.apply(&entries, now)
    }

    /// Applies an observation batch. Unknown targets are ignored.
    pub fn apply(&mut self, entries: &[IntersectionEntry], now: Instant) -> usize {
        let mut changed = 0;
        for entry in entries {
            let Some(state) = self.targets.get_mut(&entry.target) else {
                continue;
            };
            if state.visible == entry.is_intersecting {
                continue;
            }
            state.visible = entry.is_intersecting;
            state.visible_since = entry.is_intersecting.then_some(now);
            changed += 1;
        }
        changed
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.targets.get(id).is_some_and(|state| state.visible)
    }

    pub fn visible_since(&self, id: &str) -> Option<Instant> {
        self.targets.get(id).and_then(|state| state.visible_since)
    }

    pub fn targets(&self) -> impl Iterator<Item = &str> {
        self.targets.keys().map(String::as_str)
    }

    pub fn visible_count(&self) -> usize {
        self.targets.values().filter(|state| state.visible).count()
    }

    /// Releases the observer. Flags keep their last value but no longer change.
    pub fn unmount(&mut self) {
        if let Some(mut observer) = self.observer.take() {
            observer.disconnect();
            debug!("reveal animator unmounted");
        }
    }
}

impl Drop for RevealAnimator {
    fn drop(&mut self) {
        self.unmount();
    }
}
