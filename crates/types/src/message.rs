use crate::{Route, SectionId};

/// Messages delivered to components by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Periodic animation/timer tick.
    Tick,
    /// Terminal was resized to `(width, height)`.
    Resize(u16, u16),
    /// The router committed a new route.
    RouteChanged(Route),
}

/// Side effects requested by components and executed by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Push a new route.
    Navigate(Route),
    /// Scroll to a section, navigating to the canonical route first if needed.
    ScrollToSection(SectionId),
    /// Scroll the page by a number of rows (negative scrolls up).
    ScrollBy(i16),
    /// Leave the application.
    Quit,
}
