//! JSON snapshot of the derived navigation state, for `--print-state`.

use aistudio_content::SiteContent;
use aistudio_engine::{
    CategorySwitcher, Channel, DropdownController, DropdownState, SectionTracker, SubscriptionHub, TrackingMode,
    trigger_looks_active,
};
use aistudio_types::{Category, Route, SiteConfig};
use serde_json::{Value, json};

/// Mounts the state machines for `route` and reports what the page would show
/// before any input arrives.
pub fn snapshot(content: &SiteContent, config: &SiteConfig, route: &Route) -> Value {
    let hub = SubscriptionHub::new();
    let mut tracker = SectionTracker::new(&content.nav_items, config.navigation.clone());
    tracker.mount(route.clone(), &hub);
    let mut dropdown = DropdownController::new(content.dropdown_links.clone());
    dropdown.mount(&hub);

    let active = tracker.active_section();
    let nav_items: Vec<Value> = content
        .nav_items
        .iter()
        .map(|item| {
            let is_active = if item.opens_dropdown() {
                trigger_looks_active(active, route)
            } else {
                *active == item.id
            };
            json!({
                "id": item.id.as_str(),
                "label": item.label,
                "active": is_active,
                "opens_dropdown": item.opens_dropdown(),
            })
        })
        .collect();
    let links: Vec<Value> = dropdown
        .links()
        .iter()
        .map(|link| json!({ "title": link.title, "subtitle": link.subtitle, "route": link.route.path() }))
        .collect();
    let tracking = match tracker.mode() {
        Some(TrackingMode::TrackingScroll(_)) => "scroll",
        Some(TrackingMode::ForcedServices) => "forced-services",
        None => "unmounted",
    };
    let dropdown_state = match dropdown.state() {
        DropdownState::Open => "open",
        DropdownState::Closed => "closed",
    };

    let mut state = json!({
        "route": route.path(),
        "active_section": active.as_str(),
        "tracking": tracking,
        "nav_items": nav_items,
        "dropdown": {
            "state": dropdown_state,
            "indicator_rotation": dropdown.indicator_rotation(),
            "links": links,
        },
        "subscriptions": {
            "scroll": hub.active_count(Channel::Scroll),
            "pointer": hub.active_count(Channel::Pointer),
        },
    });

    if *route == Route::SpecificServices {
        let switcher = CategorySwitcher::new(&config.switcher);
        let indicator = switcher.indicator();
        let labels: Vec<Value> = Category::ALL
            .into_iter()
            .map(|category| json!({ "label": category.label(), "highlighted": switcher.is_label_highlighted(category) }))
            .collect();
        let cards: Vec<&str> = content
            .specific_services
            .cards_for(switcher.selected())
            .iter()
            .map(|card| card.title.as_str())
            .collect();
        state["switcher"] = json!({
            "selected": switcher.selected().label(),
            "indicator": {
                "left_percent": indicator.left_percent,
                "width_percent": indicator.width_percent,
                "inset_px": indicator.inset_px,
            },
            "labels": labels,
            "cards": cards,
        });
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content() -> &'static SiteContent {
        aistudio_content::embedded().expect("embedded content")
    }

    #[test]
    fn home_route_tracks_scroll_from_the_first_section() {
        let state = snapshot(content(), &SiteConfig::default(), &Route::Home);
        assert_eq!(state["active_section"], "home");
        assert_eq!(state["tracking"], "scroll");
        assert_eq!(state["nav_items"][0]["active"], true);
        assert_eq!(state["dropdown"]["state"], "closed");
        assert_eq!(state["dropdown"]["links"][1]["route"], "/specservices");
        assert_eq!(state["subscriptions"]["scroll"], 1);
        assert!(state.get("switcher").is_none());
    }

    #[test]
    fn niche_route_reports_forced_services_and_switcher() {
        let state = snapshot(content(), &SiteConfig::default(), &Route::SpecificServices);
        assert_eq!(state["active_section"], "services");
        assert_eq!(state["tracking"], "forced-services");
        assert_eq!(state["nav_items"][2]["active"], true);
        assert_eq!(state["subscriptions"]["scroll"], 0);
        assert_eq!(state["switcher"]["selected"], "E-Commerce");
        assert_eq!(state["switcher"]["indicator"]["left_percent"], 0.0);
        assert_eq!(state["switcher"]["labels"][0]["highlighted"], true);
        assert_eq!(state["switcher"]["cards"][0], "Inventory Automation");
    }
}
