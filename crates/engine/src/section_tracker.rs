//! Active section tracking and cross-route scrolling.
//!
//! On the canonical route the tracker listens to scroll events and marks as
//! active the first section whose extent crosses a reference line near the
//! viewport top. On the services routes it stops listening and pins the
//! active section to `services`. The mode is re-selected on every route change.
//!
//! `scroll_to_section` from another route navigates to the canonical route and
//! defers the scroll by a settle delay. The deferred scroll only fires if the
//! tracker is still on the route it was scheduled for.

use std::time::Instant;

use aistudio_types::{NavItem, NavigationConfig, Route, SectionId};
use tracing::debug;

use crate::{
    host::{Router, Viewport},
    schedule::DeferredSlot,
    subscription::{Channel, Subscription, SubscriptionHub},
    throttle::Throttle,
};

const OWNER: &str = "section-tracker";

/// Route-selected behavior of the tracker.
#[derive(Debug)]
pub enum TrackingMode {
    /// Scroll events drive the active section.
    TrackingScroll(Subscription),
    /// Active section is pinned to `services`; no scroll listener.
    ForcedServices,
}

/// A scroll waiting for the route transition to settle.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingScroll {
    pub target: SectionId,
    /// Route the scroll was scheduled for.
    pub route: Route,
}

/// First section in `sections` whose rectangle straddles `line`.
pub fn section_at_line<'a, V: Viewport + ?Sized>(
    sections: &'a [SectionId],
    viewport: &V,
    line: f64,
) -> Option<&'a SectionId> {
    sections.iter().find(|id| {
        viewport
            .bounding_rect(id.as_str())
            .is_some_and(|rect| rect.straddles(line))
    })
}

#[derive(Debug)]
pub struct SectionTracker {
    sections: Vec<SectionId>,
    active: SectionId,
    route: Route,
    mode: Option<TrackingMode>,
    hub: Option<SubscriptionHub>,
    pending_scroll: DeferredSlot<PendingScroll>,
    throttle: Throttle,
    config: NavigationConfig,
}

impl SectionTracker {
    /// Creates an unmounted tracker. The first nav item is the initial active section.
    pub fn new(nav_items: &[NavItem], config: NavigationConfig) -> Self {
        let sections: Vec<SectionId> = nav_items.iter().map(|item| item.id.clone()).collect();
        let active = sections.first().cloned().unwrap_or_else(|| SectionId::new("home"));
        Self {
            throttle: Throttle::new(config.scroll_throttle()),
            sections,
            active,
            route: Route::Home,
            mode: None,
            hub: None,
            pending_scroll: DeferredSlot::new("scroll-to-section"),
            config,
        }
    }

    pub fn mount(&mut self, route: Route, hub: &SubscriptionHub) {
        self.hub = Some(hub.clone());
        self.apply_route(route);
    }

    /// Re-selects the tracking mode for `route`.
    ///
    /// A pending deferred scroll scheduled for a different route is cancelled.
    pub fn on_route_change(&mut self, route: Route) {
        if self.hub.is_none() {
            self.route = route;
            return;
        }
        if self.route == route && self.mode.is_some() {
            return;
        }
        if self
            .pending_scroll
            .pending()
            .is_some_and(|pending| pending.route != route)
        {
            self.pending_scroll.cancel();
        }
        self.apply_route(route);
    }

    /// Releases the scroll subscription and drops any pending scroll.
    pub fn unmount(&mut self) {
        self.mode = None;
        self.hub = None;
        self.pending_scroll.cancel();
        self.throttle.reset();
        debug!("section tracker unmounted");
    }

    pub fn active_section(&self) -> &SectionId {
        &self.active
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn mode(&self) -> Option<&TrackingMode> {
        self.mode.as_ref()
    }

    pub fn is_tracking_scroll(&self) -> bool {
        matches!(self.mode, Some(TrackingMode::TrackingScroll(_)))
    }

    pub fn pending_scroll(&self) -> Option<&PendingScroll> {
        self.pending_scroll.pending()
    }

    /// Earliest instant at which `tick` has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.pending_scroll.due_at(), self.throttle.trailing_due()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Handles one scroll event. Returns `true` when the active section changed.
    pub fn handle_scroll<V: Viewport + ?Sized>(&mut self, now: Instant, viewport: &V) -> bool {
        if !self.is_tracking_scroll() || !self.throttle.should_run(now) {
            return false;
        }
        self.evaluate(viewport)
    }

    /// Scrolls to `id`, navigating to the canonical route first when needed.
    pub fn scroll_to_section<R, V>(&mut self, id: &SectionId, now: Instant, router: &mut R, viewport: &mut V)
    where
        R: Router + ?Sized,
        V: Viewport + ?Sized,
    {
        if !router.current_route().is_canonical() {
            router.navigate_to(Route::Home);
            self.pending_scroll.schedule(
                now,
                self.config.route_settle_delay(),
                PendingScroll {
                    target: id.clone(),
                    route: Route::Home,
                },
            );
            debug!(section = %id, "navigating to canonical route before scrolling");
            return;
        }
        self.pending_scroll.cancel();
        scroll_if_present(id, viewport);
    }

    /// Fires a due deferred scroll and runs any trailing scroll evaluation.
    /// Returns `true` when the active section changed.
    pub fn tick<V: Viewport + ?Sized>(&mut self, now: Instant, viewport: &mut V) -> bool {
        if let Some(pending) = self.pending_scroll.take_due(now) {
            if pending.route == self.route {
                scroll_if_present(&pending.target, viewport);
            } else {
                debug!(
                    section = %pending.target,
                    expected = %pending.route,
                    current = %self.route,
                    "deferred scroll dropped after route change"
                );
            }
        }
        if self.is_tracking_scroll() && self.throttle.take_trailing(now) {
            return self.evaluate(viewport);
        }
        false
    }

    fn evaluate<V: Viewport + ?Sized>(&mut self, viewport: &V) -> bool {
        let Some(current) = section_at_line(&self.sections, viewport, self.config.reference_line_px) else {
            return false;
        };
        if *current == self.active {
            return false;
        }
        debug!(from = %self.active, to = %current, "active section changed");
        self.active = current.clone();
        true
    }

    fn apply_route(&mut self, route: Route) {
        // Release the old listener before a new one can be acquired.
        self.mode = None;
        self.throttle.reset();
        if route.is_services() {
            self.active = SectionId::services();
            self.mode = Some(TrackingMode::ForcedServices);
        } else if let Some(hub) = self.hub.as_ref() {
            self.mode = Some(TrackingMode::TrackingScroll(hub.subscribe(Channel::Scroll, OWNER)));
        }
        debug!(route = %route, tracking = self.is_tracking_scroll(), "section tracker route applied");
        self.route = route;
    }
}

fn scroll_if_present<V: Viewport + ?Sized>(id: &SectionId, viewport: &mut V) {
    if viewport.bounding_rect(id.as_str()).is_some() {
        viewport.scroll_into_view(id.as_str());
    } else {
        debug!(section = %id, "scroll target not found; skipping");
    }
}
