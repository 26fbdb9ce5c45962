//! Traits the host implements so the state machines can read geometry,
//! drive scrolling and navigate without knowing how anything is drawn.

use aistudio_types::{ElementRect, Route};

/// Geometry and scrolling surface of the current page.
pub trait Viewport {
    /// Height of the visible area in CSS pixels.
    fn viewport_height(&self) -> f64;

    /// Bounding rectangle of the element with `id`, relative to the viewport
    /// top, or `None` when no such element exists on the current page.
    fn bounding_rect(&self, id: &str) -> Option<ElementRect>;

    /// Starts a smooth scroll that brings the element with `id` to the top.
    ///
    /// Callers look the element up first; hosts may ignore unknown ids.
    fn scroll_into_view(&mut self, id: &str);

    /// Ids of every element marked for scroll-reveal, in document order.
    fn reveal_targets(&self) -> Vec<String>;
}

/// Routing primitives.
pub trait Router {
    fn current_route(&self) -> Route;

    fn navigate_to(&mut self, route: Route);
}
