//! Application state for the terminal host.
//!
//! `App` owns the engine state machines, the current page, and the hit-test
//! areas recorded during the last render. Components mutate it in response to
//! input and return [`Effect`]s; the runtime feeds those back through
//! [`App::process_effects`].

use std::time::{Duration, Instant};

use aistudio_content::SiteContent;
use aistudio_engine::{CategorySwitcher, DropdownController, RevealAnimator, Router, SectionTracker, SubscriptionHub};
use aistudio_types::{Effect, Msg, Route, SiteConfig};
use tracing::{debug, info};

use crate::router::AppRouter;
use crate::ui::components::nav_bar::NavBarState;
use crate::ui::components::niche_selector::NicheSelectorState;
use crate::ui::document::Document;
use crate::ui::page_view::PageView;
use crate::ui::theme::StudioTheme;

/// Rows taken by the navigation bar above the page.
pub const NAV_ROWS: u16 = 3;

/// Length of a reveal entrance once its stagger delay has elapsed.
pub const ENTRANCE: Duration = Duration::from_millis(600);

/// Where a reveal target is in its entrance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    Hidden,
    Entering,
    Shown,
}

#[derive(Debug)]
pub struct App {
    pub content: &'static SiteContent,
    pub config: SiteConfig,
    pub theme: StudioTheme,
    pub hub: SubscriptionHub,
    pub router: AppRouter,
    pub tracker: SectionTracker,
    pub dropdown: DropdownController,
    pub switcher: CategorySwitcher,
    pub page: PageView,
    pub reveal: RevealAnimator,
    /// Hit-test areas from the last render.
    pub nav_bar: NavBarState,
    pub niche_selector: NicheSelectorState,
    pub should_quit: bool,
}

impl App {
    pub fn new(content: &'static SiteContent, config: SiteConfig, route: Route) -> Self {
        let hub = SubscriptionHub::new();
        let mut tracker = SectionTracker::new(&content.nav_items, config.navigation.clone());
        tracker.mount(route.clone(), &hub);
        let mut dropdown = DropdownController::new(content.dropdown_links.clone());
        dropdown.mount(&hub);

        let document = Document::for_route(&route, content);
        let page = PageView::new(route.clone(), document, &config.terminal);
        let reveal = RevealAnimator::mount(&page, &hub, &config.reveal);
        let switcher = CategorySwitcher::new(&config.switcher);
        info!(route = %route, "site opened");

        Self {
            content,
            config,
            theme: StudioTheme::default(),
            hub,
            router: AppRouter::new(route),
            tracker,
            dropdown,
            switcher,
            page,
            reveal,
            nav_bar: NavBarState::default(),
            niche_selector: NicheSelectorState::default(),
            should_quit: false,
        }
    }

    pub fn route(&self) -> &Route {
        self.page.route()
    }

    /// Handles a runtime message. Returns `true` when a redraw is needed.
    pub fn update(&mut self, msg: &Msg) -> bool {
        self.update_at(msg, Instant::now())
    }

    pub fn update_at(&mut self, msg: &Msg, now: Instant) -> bool {
        match msg {
            Msg::Tick => self.tick(now),
            Msg::Resize(_, height) => {
                if self.page.set_viewport_rows(height.saturating_sub(NAV_ROWS)) {
                    self.on_scroll(now);
                }
                true
            }
            Msg::RouteChanged(route) => {
                self.commit_route(route.clone(), now);
                true
            }
        }
    }

    /// Executes effects in order, committing any navigation they caused.
    pub fn process_effects(&mut self, effects: Vec<Effect>, now: Instant) {
        for effect in effects {
            self.process_effect(effect, now);
            if let Some(route) = self.router.take_uncommitted() {
                self.update_at(&Msg::RouteChanged(route), now);
            }
        }
    }

    fn process_effect(&mut self, effect: Effect, now: Instant) {
        debug!(?effect, "processing effect");
        match effect {
            Effect::Navigate(route) => self.router.navigate_to(route),
            Effect::ScrollToSection(id) => {
                self.tracker.scroll_to_section(&id, now, &mut self.router, &mut self.page);
            }
            Effect::ScrollBy(rows) => {
                if self.page.scroll_by(i32::from(rows)) {
                    self.on_scroll(now);
                }
            }
            Effect::Quit => self.should_quit = true,
        }
    }

    /// Jumps to the top or bottom of the page.
    pub fn jump(&mut self, to_top: bool, now: Instant) {
        let moved = if to_top {
            self.page.scroll_to_top()
        } else {
            self.page.scroll_to_bottom()
        };
        if moved {
            self.on_scroll(now);
        }
    }

    /// Advances timers and animations. Returns `true` when a redraw is needed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        if self.page.advance(now) {
            self.on_scroll(now);
            changed = true;
        }
        changed |= self.tracker.tick(now, &mut self.page);
        changed |= self.switcher.tick(now);
        // Deferred scrolls start an animation; let it draw its first frame.
        changed |= self.page.is_animating();
        changed | self.reveal_in_progress(now)
    }

    /// Scroll position changed: feed the tracker and the reveal observer.
    fn on_scroll(&mut self, now: Instant) {
        self.tracker.handle_scroll(now, &self.page);
        self.reveal.observe(&self.page, now);
    }

    fn commit_route(&mut self, route: Route, now: Instant) {
        info!(route = %route, "route committed");
        self.page
            .replace_document(route.clone(), Document::for_route(&route, self.content));
        self.tracker.on_route_change(route);

        // Page-level components remount with the new page.
        self.dropdown.unmount();
        self.dropdown.mount(&self.hub);
        self.reveal.unmount();
        self.reveal = RevealAnimator::mount(&self.page, &self.hub, &self.config.reveal);
        self.switcher = CategorySwitcher::new(&self.config.switcher);
        self.nav_bar = NavBarState::default();
        self.niche_selector = NicheSelectorState::default();
        self.reveal.observe(&self.page, now);
    }

    /// Whether the runtime should tick at animation rate.
    pub fn needs_fast_tick(&self, now: Instant) -> bool {
        self.page.is_animating()
            || self.tracker.next_deadline().is_some()
            || self.switcher.next_deadline().is_some()
            || self.reveal_in_progress(now)
    }

    fn reveal_in_progress(&self, now: Instant) -> bool {
        self.page
            .document()
            .blocks()
            .iter()
            .filter(|block| block.reveal)
            .any(|block| self.reveal_phase(&block.id, block.stagger, now) == RevealPhase::Entering)
    }

    /// Entrance phase of a reveal target, honoring its stagger slot.
    pub fn reveal_phase(&self, id: &str, stagger: usize, now: Instant) -> RevealPhase {
        let Some(since) = self.reveal.visible_since(id) else {
            return RevealPhase::Hidden;
        };
        let start = since + self.config.reveal.stagger_delay(stagger);
        if now < start {
            RevealPhase::Hidden
        } else if now < start + ENTRANCE {
            RevealPhase::Entering
        } else {
            RevealPhase::Shown
        }
    }
}

#[cfg(test)]
mod tests {
    use aistudio_engine::{Channel, IntersectionEntry};
    use aistudio_types::{Category, SectionId};

    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    /// App with a 20-row page, resized at the returned instant.
    fn app(route: Route) -> (App, Instant) {
        let content = aistudio_content::embedded().expect("embedded content");
        let mut app = App::new(content, SiteConfig::default(), route);
        let start = Instant::now();
        app.update_at(&Msg::Resize(100, 23), start);
        (app, start)
    }

    #[test]
    fn wheel_scrolling_moves_the_active_section() {
        let (mut app, start) = app(Route::Home);
        assert_eq!(app.tracker.active_section(), "home");

        // `about` starts at row 16; 12 rows down puts its top 4 rows (64px) below the page top.
        app.process_effects(vec![Effect::ScrollBy(12)], start + ms(20));
        assert_eq!(app.tracker.active_section(), "about");
    }

    #[test]
    fn dropdown_link_navigates_and_remounts_page_components() {
        let (mut app, start) = app(Route::Home);
        app.dropdown.hover_enter();

        app.process_effects(vec![Effect::Navigate(Route::SpecificServices)], start);
        assert_eq!(app.route(), &Route::SpecificServices);
        assert_eq!(app.tracker.active_section(), "services");
        assert!(!app.dropdown.is_open());
        assert_eq!(app.hub.active_count(Channel::Scroll), 0);
        assert_eq!(app.hub.active_count(Channel::Pointer), 1);
        assert_eq!(app.hub.active_count(Channel::Intersection), 1);
        assert!(app.reveal.is_visible("specservices-hero"));
    }

    #[test]
    fn section_link_from_services_page_scrolls_after_settling() {
        let (mut app, start) = app(Route::GeneralServices);

        app.process_effects(vec![Effect::ScrollToSection(SectionId::from("faq"))], start);
        assert_eq!(app.route(), &Route::Home);
        assert_eq!(app.router.current_route(), Route::Home);
        assert!(app.tracker.pending_scroll().is_some());
        assert!(app.needs_fast_tick(start));

        app.tick(start + ms(100));
        assert!(app.page.is_animating());
        app.tick(start + ms(110));
        app.tick(start + ms(500));
        let faq_top = app.page.document().block("faq").map(|block| block.top);
        assert_eq!(Some(app.page.offset()), faq_top);
        assert_eq!(app.tracker.active_section(), "faq");
    }

    #[test]
    fn niche_selection_waits_for_the_crossfade() {
        let (mut app, start) = app(Route::SpecificServices);
        app.switcher.select_category(Category::Coaching, start);
        assert!(!app.switcher.content_visible());
        assert!(app.needs_fast_tick(start));

        assert!(app.tick(start + ms(200)));
        assert_eq!(app.switcher.selected(), Category::Coaching);
        assert!(app.switcher.content_visible());
    }

    #[test]
    fn reveal_phases_follow_the_stagger() {
        let (mut app, start) = app(Route::SpecificServices);
        app.reveal.apply(
            &[IntersectionEntry {
                target: "niche-card-2".to_string(),
                ratio: 1.0,
                is_intersecting: true,
            }],
            start,
        );

        assert_eq!(app.reveal_phase("niche-card-2", 2, start + ms(150)), RevealPhase::Hidden);
        assert_eq!(app.reveal_phase("niche-card-2", 2, start + ms(250)), RevealPhase::Entering);
        assert_eq!(app.reveal_phase("niche-card-2", 2, start + ms(900)), RevealPhase::Shown);
        assert_eq!(app.reveal_phase("niche-card-0", 0, start), RevealPhase::Hidden);
    }

    #[test]
    fn resizing_feeds_the_reveal_observer_and_tracker() {
        let content = aistudio_content::embedded().expect("embedded content");
        let mut app = App::new(content, SiteConfig::default(), Route::SpecificServices);
        let card = app.page.document().block("niche-card-0").cloned().expect("card");
        let start = Instant::now();

        assert!(app.update_at(&Msg::Resize(100, card.top.saturating_sub(2) + NAV_ROWS), start));
        assert!(app.reveal.is_visible("specservices-hero"));
        assert!(!app.reveal.is_visible("niche-card-0"));

        assert!(app.update_at(&Msg::Resize(100, card.bottom() + 5 + NAV_ROWS), start + ms(20)));
        assert!(app.reveal.is_visible("niche-card-0"));
        assert!(app.reveal.is_visible("niche-card-2"));
        assert_eq!(app.tracker.active_section(), "services");
    }

    #[test]
    fn quit_effect_sets_the_flag() {
        let (mut app, start) = app(Route::Home);
        app.process_effects(vec![Effect::Quit], start);
        assert!(app.should_quit);
    }
}
