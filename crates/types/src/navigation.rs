use std::{borrow::Borrow, fmt};

use serde::{Deserialize, Serialize};

use crate::Route;

/// Id of the nav item that opens the services dropdown.
pub const SERVICES_SECTION: &str = "services";

/// Identifier of a page section on the canonical route (e.g. `"about"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn services() -> Self {
        Self::new(SERVICES_SECTION)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_services(&self) -> bool {
        self.0 == SERVICES_SECTION
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SectionId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl Borrow<str> for SectionId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for SectionId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for SectionId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A single entry of the top navigation bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    /// Section id the item scrolls to; doubles as the section element id.
    pub id: SectionId,
    /// Text shown in the navigation bar.
    pub label: String,
}

impl NavItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: SectionId::new(id),
            label: label.into(),
        }
    }

    /// Whether this item drives the services dropdown instead of only scrolling.
    pub fn opens_dropdown(&self) -> bool {
        self.id.is_services()
    }
}

/// One of the targets revealed by the services dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownLink {
    pub title: String,
    pub subtitle: String,
    pub route: Route,
}
