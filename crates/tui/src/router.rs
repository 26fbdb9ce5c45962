use aistudio_engine::Router;
use aistudio_types::Route;
use tracing::info;

/// In-memory browser history.
///
/// `navigate_to` updates the location immediately; the page for the new
/// location is built when the runtime commits it on its next pass, the way a
/// browser router re-renders after a push.
#[derive(Debug)]
pub struct AppRouter {
    current: Route,
    history: Vec<Route>,
    uncommitted: Option<Route>,
}

impl AppRouter {
    pub fn new(route: Route) -> Self {
        Self {
            current: route.clone(),
            history: vec![route],
            uncommitted: None,
        }
    }

    /// Route pushed since the last commit, if any.
    pub fn take_uncommitted(&mut self) -> Option<Route> {
        self.uncommitted.take()
    }
}

impl Router for AppRouter {
    fn current_route(&self) -> Route {
        self.current.clone()
    }

    fn navigate_to(&mut self, route: Route) {
        if route == self.current {
            return;
        }
        info!(from = %self.current, to = %route, depth = self.history.len() + 1, "navigate");
        self.current = route.clone();
        self.history.push(route.clone());
        self.uncommitted = Some(route);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_is_committed_once() {
        let mut router = AppRouter::new(Route::Home);
        router.navigate_to(Route::SpecificServices);
        assert_eq!(router.current_route(), Route::SpecificServices);
        assert_eq!(router.take_uncommitted(), Some(Route::SpecificServices));
        assert_eq!(router.take_uncommitted(), None);
        assert_eq!(router.history, [Route::Home, Route::SpecificServices]);
    }

    #[test]
    fn navigating_to_the_current_route_is_ignored() {
        let mut router = AppRouter::new(Route::GeneralServices);
        router.navigate_to(Route::GeneralServices);
        assert_eq!(router.take_uncommitted(), None);
        assert_eq!(router.history.len(), 1);
    }
}
