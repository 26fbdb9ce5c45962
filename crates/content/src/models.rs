use aistudio_types::{Category, ContentCard, DropdownLink, NavItem, SectionId};
use indexmap::IndexMap;
use serde::Deserialize;

/// Brand wordmark rendered at the left of the navigation bar (`AI` + `Studio`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Brand {
    pub name: String,
    /// Highlighted suffix.
    pub accent: String,
}

/// A section of the canonical single-page route.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PageSection {
    pub id: SectionId,
    pub heading: String,
    #[serde(default)]
    pub body: Vec<String>,
}

/// Page listing the general services cards.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneralServicesPage {
    pub title: String,
    pub subtitle: String,
    pub cards: Vec<ContentCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct NicheEntry {
    pub category: Category,
    pub cards: Vec<ContentCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct RawSpecificServicesPage {
    pub title: String,
    pub subtitle: String,
    pub niches: Vec<NicheEntry>,
}

/// Page hosting the niche selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecificServicesPage {
    pub title: String,
    pub subtitle: String,
    /// Cards per niche in selector order; every category has exactly
    /// [`SiteContent::CARDS_PER_NICHE`] entries.
    pub niches: IndexMap<Category, Vec<ContentCard>>,
}

impl SpecificServicesPage {
    /// Cards for a niche. Load-time validation guarantees every category is present.
    pub fn cards_for(&self, category: Category) -> &[ContentCard] {
        self.niches.get(&category).map(Vec::as_slice).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct RawSiteContent {
    pub brand: Brand,
    pub nav_items: Vec<NavItem>,
    pub dropdown_links: Vec<DropdownLink>,
    pub home_sections: Vec<PageSection>,
    pub general_services: GeneralServicesPage,
    pub specific_services: RawSpecificServicesPage,
    #[serde(default)]
    pub footer: String,
}

/// Validated static content for every route of the site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteContent {
    pub brand: Brand,
    pub nav_items: Vec<NavItem>,
    pub dropdown_links: Vec<DropdownLink>,
    pub home_sections: Vec<PageSection>,
    pub general_services: GeneralServicesPage,
    pub specific_services: SpecificServicesPage,
    pub footer: String,
}

impl SiteContent {
    pub const NAV_ITEM_COUNT: usize = 5;
    pub const DROPDOWN_LINK_COUNT: usize = 2;
    pub const CARDS_PER_NICHE: usize = 3;

    pub fn section(&self, id: &str) -> Option<&PageSection> {
        self.home_sections.iter().find(|section| section.id == id)
    }

    pub fn nav_item(&self, id: &str) -> Option<&NavItem> {
        self.nav_items.iter().find(|item| item.id == id)
    }
}
