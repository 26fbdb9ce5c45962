use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Client-side routes of the site.
///
/// `Home` is the canonical single-page route holding every navigable section.
/// The two services routes are standalone pages without tracked sections.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Route {
    #[default]
    Home,
    GeneralServices,
    SpecificServices,
    /// Any other path; rendered as a not-found page.
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("route path must start with '/': {0:?}")]
pub struct ParseRouteError(pub String);

impl Route {
    pub const HOME_PATH: &'static str = "/";
    pub const GENERAL_SERVICES_PATH: &'static str = "/genservices";
    pub const SPECIFIC_SERVICES_PATH: &'static str = "/specservices";

    /// Resolves a path into a route. Trailing slashes are ignored.
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim();
        let normalized = match trimmed.trim_end_matches('/') {
            "" => Self::HOME_PATH,
            other => other,
        };
        match normalized {
            Self::HOME_PATH => Self::Home,
            Self::GENERAL_SERVICES_PATH => Self::GeneralServices,
            Self::SPECIFIC_SERVICES_PATH => Self::SpecificServices,
            other => Self::Unknown(other.to_string()),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Self::Home => Self::HOME_PATH,
            Self::GeneralServices => Self::GENERAL_SERVICES_PATH,
            Self::SpecificServices => Self::SPECIFIC_SERVICES_PATH,
            Self::Unknown(path) => path,
        }
    }

    /// Whether this is the single-page route that hosts the navigable sections.
    pub fn is_canonical(&self) -> bool {
        matches!(self, Self::Home)
    }

    /// Whether this is one of the two services sub-pages.
    pub fn is_services(&self) -> bool {
        matches!(self, Self::GeneralServices | Self::SpecificServices)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Route {
    type Err = ParseRouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.trim().starts_with('/') {
            return Err(ParseRouteError(s.to_string()));
        }
        Ok(Self::from_path(s))
    }
}

impl TryFrom<String> for Route {
    type Error = ParseRouteError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Route> for String {
    fn from(route: Route) -> Self {
        route.path().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_paths() {
        assert_eq!(Route::from_path("/"), Route::Home);
        assert_eq!(Route::from_path(""), Route::Home);
        assert_eq!(Route::from_path("/genservices"), Route::GeneralServices);
        assert_eq!(Route::from_path("/specservices/"), Route::SpecificServices);
        assert_eq!(Route::from_path("/pricing"), Route::Unknown("/pricing".into()));
    }

    #[test]
    fn only_home_is_canonical() {
        assert!(Route::Home.is_canonical());
        assert!(!Route::GeneralServices.is_canonical());
        assert!(!Route::Unknown("/x".into()).is_canonical());
        assert!(Route::GeneralServices.is_services());
        assert!(Route::SpecificServices.is_services());
        assert!(!Route::Home.is_services());
    }

    #[test]
    fn parsing_requires_leading_slash() {
        assert!("genservices".parse::<Route>().is_err());
        assert_eq!("/genservices".parse::<Route>(), Ok(Route::GeneralServices));
    }

    #[test]
    fn serializes_as_path() {
        let json = serde_json::to_string(&Route::SpecificServices).unwrap();
        assert_eq!(json, "\"/specservices\"");
        let back: Route = serde_json::from_str("\"/\"").unwrap();
        assert_eq!(back, Route::Home);
    }
}
