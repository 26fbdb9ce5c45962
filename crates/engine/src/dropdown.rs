//! Hover-driven services dropdown.
//!
//! The trigger button and its panel form one hover region: the host reports
//! whether the pointer is inside their union and the controller turns that
//! into enter/leave edges. There is no click or keyboard toggle.

use aistudio_types::{DropdownLink, Route, SectionId};
use tracing::trace;

use crate::subscription::{Channel, Subscription, SubscriptionHub};

const OWNER: &str = "dropdown";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropdownState {
    #[default]
    Closed,
    Open,
}

/// Whether the services trigger renders as active.
///
/// True when the services section is active or the current route is one of
/// the services pages, independently of the dropdown's own state.
pub fn trigger_looks_active(active: &SectionId, route: &Route) -> bool {
    active.is_services() || route.is_services()
}

#[derive(Debug)]
pub struct DropdownController {
    state: DropdownState,
    links: Vec<DropdownLink>,
    pointer_inside: bool,
    subscription: Option<Subscription>,
}

impl DropdownController {
    pub fn new(links: Vec<DropdownLink>) -> Self {
        Self {
            state: DropdownState::Closed,
            links,
            pointer_inside: false,
            subscription: None,
        }
    }

    pub fn mount(&mut self, hub: &SubscriptionHub) {
        if self.subscription.is_none() {
            self.subscription = Some(hub.subscribe(Channel::Pointer, OWNER));
        }
    }

    /// Releases the pointer subscription and closes the menu.
    pub fn unmount(&mut self) {
        self.subscription = None;
        self.pointer_inside = false;
        self.state = DropdownState::Closed;
    }

    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn state(&self) -> DropdownState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == DropdownState::Open
    }

    pub fn hover_enter(&mut self) {
        if !self.is_mounted() {
            return;
        }
        self.pointer_inside = true;
        if self.state != DropdownState::Open {
            trace!("dropdown opened");
            self.state = DropdownState::Open;
        }
    }

    pub fn hover_leave(&mut self) {
        if !self.is_mounted() {
            return;
        }
        self.pointer_inside = false;
        if self.state != DropdownState::Closed {
            trace!("dropdown closed");
            self.state = DropdownState::Closed;
        }
    }

    /// Feeds pointer membership in the trigger+panel region. Returns `true`
    /// when this produced an enter or leave edge.
    pub fn pointer_moved(&mut self, inside: bool) -> bool {
        if !self.is_mounted() || inside == self.pointer_inside {
            return false;
        }
        if inside {
            self.hover_enter();
        } else {
            self.hover_leave();
        }
        true
    }

    /// Rotation of the disclosure chevron in degrees.
    pub fn indicator_rotation(&self) -> u16 {
        match self.state {
            DropdownState::Open => 180,
            DropdownState::Closed => 0,
        }
    }

    /// Links revealed by the open menu; empty while closed.
    pub fn visible_links(&self) -> &[DropdownLink] {
        match self.state {
            DropdownState::Open => &self.links,
            DropdownState::Closed => &[],
        }
    }

    pub fn links(&self) -> &[DropdownLink] {
        &self.links
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn links() -> Vec<DropdownLink> {
        vec![
            DropdownLink {
                title: "General Services".into(),
                subtitle: "Comprehensive AI solutions".into(),
                route: Route::GeneralServices,
            },
            DropdownLink {
                title: "Specific Niche".into(),
                subtitle: "Industry-focused solutions".into(),
                route: Route::SpecificServices,
            },
        ]
    }

    fn mounted() -> (SubscriptionHub, DropdownController) {
        let hub = SubscriptionHub::new();
        let mut dropdown = DropdownController::new(links());
        dropdown.mount(&hub);
        (hub, dropdown)
    }

    #[test]
    fn enter_opens_and_leave_closes() {
        let (_hub, mut dropdown) = mounted();
        assert!(!dropdown.is_open());
        assert!(dropdown.visible_links().is_empty());

        dropdown.hover_enter();
        assert!(dropdown.is_open());
        assert_eq!(dropdown.indicator_rotation(), 180);
        assert_eq!(dropdown.visible_links().len(), 2);

        dropdown.hover_leave();
        assert_eq!(dropdown.state(), DropdownState::Closed);
        assert_eq!(dropdown.indicator_rotation(), 0);

        dropdown.hover_enter();
        assert!(dropdown.is_open());
    }

    #[test]
    fn moving_within_region_keeps_menu_open() {
        let (_hub, mut dropdown) = mounted();
        assert!(dropdown.pointer_moved(true));
        // Trigger -> panel is still inside the region: no edge.
        assert!(!dropdown.pointer_moved(true));
        assert!(dropdown.is_open());
        assert!(dropdown.pointer_moved(false));
        assert!(!dropdown.is_open());
        assert!(!dropdown.pointer_moved(false));
    }

    #[test]
    fn unmount_releases_pointer_and_closes() {
        let (hub, mut dropdown) = mounted();
        dropdown.mount(&hub);
        assert_eq!(hub.active_count(Channel::Pointer), 1);

        dropdown.hover_enter();
        dropdown.unmount();
        assert_eq!(hub.active_count(Channel::Pointer), 0);
        assert!(!dropdown.is_open());

        dropdown.hover_enter();
        assert!(!dropdown.is_open());
    }

    #[test]
    fn trigger_active_on_services_section_or_routes() {
        let home = SectionId::new("home");
        assert!(!trigger_looks_active(&home, &Route::Home));
        assert!(trigger_looks_active(&SectionId::services(), &Route::Home));
        assert!(trigger_looks_active(&home, &Route::GeneralServices));
        assert!(trigger_looks_active(&home, &Route::SpecificServices));
    }
}
