#![allow(dead_code)]

use aistudio_engine::{Router, Viewport};
use aistudio_types::{ElementRect, Route};

/// In-memory page: elements laid out in document coordinates plus a scroll offset.
#[derive(Debug, Default)]
pub struct FakePage {
    pub height: f64,
    pub scroll_y: f64,
    /// `(id, document top, element height)`
    pub elements: Vec<(String, f64, f64)>,
    pub reveal: Vec<String>,
    /// Every id passed to `scroll_into_view`.
    pub scroll_calls: Vec<String>,
}

impl FakePage {
    /// Five stacked 600px sections matching the site's navigation.
    pub fn home() -> Self {
        let ids = ["home", "about", "services", "faq", "contact"];
        Self {
            height: 800.0,
            elements: ids
                .iter()
                .enumerate()
                .map(|(index, id)| (id.to_string(), index as f64 * 600.0, 600.0))
                .collect(),
            ..Self::default()
        }
    }

    pub fn with_reveal_targets(height: f64, targets: &[(&str, f64, f64)]) -> Self {
        Self {
            height,
            elements: targets
                .iter()
                .map(|(id, top, size)| (id.to_string(), *top, *size))
                .collect(),
            reveal: targets.iter().map(|(id, _, _)| id.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn scroll_to(&mut self, y: f64) {
        self.scroll_y = y;
    }

    pub fn add_element(&mut self, id: &str, top: f64, size: f64, reveal: bool) {
        self.elements.push((id.to_string(), top, size));
        if reveal {
            self.reveal.push(id.to_string());
        }
    }
}

impl Viewport for FakePage {
    fn viewport_height(&self) -> f64 {
        self.height
    }

    fn bounding_rect(&self, id: &str) -> Option<ElementRect> {
        self.elements
            .iter()
            .find(|(element, _, _)| element == id)
            .map(|(_, top, size)| ElementRect::new(top - self.scroll_y, top + size - self.scroll_y))
    }

    fn scroll_into_view(&mut self, id: &str) {
        self.scroll_calls.push(id.to_string());
        if let Some((_, top, _)) = self.elements.iter().find(|(element, _, _)| element == id) {
            self.scroll_y = *top;
        }
    }

    fn reveal_targets(&self) -> Vec<String> {
        self.reveal.clone()
    }
}

/// Router that records every navigation.
#[derive(Debug)]
pub struct SpyRouter {
    pub route: Route,
    pub navigations: Vec<Route>,
}

impl SpyRouter {
    pub fn at(route: Route) -> Self {
        Self {
            route,
            navigations: Vec::new(),
        }
    }
}

impl Router for SpyRouter {
    fn current_route(&self) -> Route {
        self.route.clone()
    }

    fn navigate_to(&mut self, route: Route) {
        self.navigations.push(route.clone());
        self.route = route;
    }
}
