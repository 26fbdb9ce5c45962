//! Static content for the AIStudio site.
//!
//! The navigation list, dropdown targets, page copy and the niche →
//! card mapping ship as an embedded JSON document. Loading validates the
//! structural guarantees the state machines rely on: five nav items including
//! `services`, two dropdown links to services routes, and exactly three cards
//! for each of the five niches.

mod models;

use std::collections::HashSet;

use aistudio_types::Category;
use indexmap::IndexMap;
use once_cell::sync::OnceCell;
use thiserror::Error;
use tracing::debug;

pub use models::{Brand, GeneralServicesPage, PageSection, SiteContent, SpecificServicesPage};

use models::RawSiteContent;

const EMBEDDED_SITE: &str = include_str!("../data/site.json");

static EMBEDDED: OnceCell<SiteContent> = OnceCell::new();

/// Error surfaced when site content is malformed.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("site content is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("expected {expected} navigation items, found {found}")]
    NavItemCount { expected: usize, found: usize },
    #[error("duplicate navigation id: {0}")]
    DuplicateNavItem(String),
    #[error("navigation is missing the 'services' item")]
    MissingServicesItem,
    #[error("navigation item '{0}' has no matching page section")]
    MissingSection(String),
    #[error("expected {expected} dropdown links, found {found}")]
    DropdownLinkCount { expected: usize, found: usize },
    #[error("dropdown link '{title}' must point at a services route, not {route}")]
    DropdownLinkRoute { title: String, route: String },
    #[error("niche '{0}' is listed more than once")]
    DuplicateNiche(Category),
    #[error("niche '{0}' has no content")]
    MissingNiche(Category),
    #[error("niche '{category}' must have {expected} cards, found {found}")]
    NicheCardCount {
        category: Category,
        expected: usize,
        found: usize,
    },
}

/// Returns the embedded site content, parsing and validating it on first use.
pub fn embedded() -> Result<&'static SiteContent, ContentError> {
    EMBEDDED.get_or_try_init(|| load_from_str(EMBEDDED_SITE))
}

/// Parses and validates a site content document.
pub fn load_from_str(json: &str) -> Result<SiteContent, ContentError> {
    let raw: RawSiteContent = serde_json::from_str(json)?;
    let content = validate(raw)?;
    debug!(
        nav_items = content.nav_items.len(),
        niches = content.specific_services.niches.len(),
        "site content loaded"
    );
    Ok(content)
}

fn validate(raw: RawSiteContent) -> Result<SiteContent, ContentError> {
    if raw.nav_items.len() != SiteContent::NAV_ITEM_COUNT {
        return Err(ContentError::NavItemCount {
            expected: SiteContent::NAV_ITEM_COUNT,
            found: raw.nav_items.len(),
        });
    }
    let mut seen = HashSet::new();
    for item in &raw.nav_items {
        if !seen.insert(item.id.as_str()) {
            return Err(ContentError::DuplicateNavItem(item.id.to_string()));
        }
        if !raw.home_sections.iter().any(|section| section.id == item.id) {
            return Err(ContentError::MissingSection(item.id.to_string()));
        }
    }
    if !raw.nav_items.iter().any(|item| item.opens_dropdown()) {
        return Err(ContentError::MissingServicesItem);
    }

    if raw.dropdown_links.len() != SiteContent::DROPDOWN_LINK_COUNT {
        return Err(ContentError::DropdownLinkCount {
            expected: SiteContent::DROPDOWN_LINK_COUNT,
            found: raw.dropdown_links.len(),
        });
    }
    if let Some(link) = raw.dropdown_links.iter().find(|link| !link.route.is_services()) {
        return Err(ContentError::DropdownLinkRoute {
            title: link.title.clone(),
            route: link.route.to_string(),
        });
    }

    let mut by_category = IndexMap::with_capacity(Category::COUNT);
    for entry in raw.specific_services.niches {
        if entry.cards.len() != SiteContent::CARDS_PER_NICHE {
            return Err(ContentError::NicheCardCount {
                category: entry.category,
                expected: SiteContent::CARDS_PER_NICHE,
                found: entry.cards.len(),
            });
        }
        if by_category.insert(entry.category, entry.cards).is_some() {
            return Err(ContentError::DuplicateNiche(entry.category));
        }
    }
    // Re-key in selector order regardless of file order.
    let mut niches = IndexMap::with_capacity(Category::COUNT);
    for category in Category::ALL {
        let cards = by_category
            .swap_remove(&category)
            .ok_or(ContentError::MissingNiche(category))?;
        niches.insert(category, cards);
    }

    Ok(SiteContent {
        brand: raw.brand,
        nav_items: raw.nav_items,
        dropdown_links: raw.dropdown_links,
        home_sections: raw.home_sections,
        general_services: raw.general_services,
        specific_services: models::SpecificServicesPage {
            title: raw.specific_services.title,
            subtitle: raw.specific_services.subtitle,
            niches,
        },
        footer: raw.footer,
    })
}

#[cfg(test)]
mod tests {
    use aistudio_types::{CardIcon, Route};

    use super::*;

    #[test]
    fn embedded_content_is_valid() {
        let content = embedded().expect("embedded content loads");
        let ids: Vec<_> = content.nav_items.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, ["home", "about", "services", "faq", "contact"]);
        assert_eq!(content.dropdown_links[0].route, Route::GeneralServices);
        assert_eq!(content.dropdown_links[1].route, Route::SpecificServices);
        let niches: Vec<_> = content.specific_services.niches.keys().copied().collect();
        assert_eq!(niches, Category::ALL);
    }

    #[test]
    fn cards_follow_niche_mapping() {
        let content = embedded().unwrap();
        let cards = content.specific_services.cards_for(Category::RealEstate);
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].icon, CardIcon::Home);
        assert_eq!(cards[0].title, "Property Valuation");
        let sales = content.specific_services.cards_for(Category::Sales);
        assert_eq!(sales[2].title, "Sales Forecasting");
    }

    fn fixture_with(mutator: impl FnOnce(&mut serde_json::Value)) -> String {
        let mut value: serde_json::Value = serde_json::from_str(EMBEDDED_SITE).unwrap();
        mutator(&mut value);
        value.to_string()
    }

    #[test]
    fn rejects_niche_with_wrong_card_count() {
        let json = fixture_with(|value| {
            value["specific_services"]["niches"][1]["cards"].as_array_mut().unwrap().pop();
        });
        let error = load_from_str(&json).unwrap_err();
        assert!(matches!(
            error,
            ContentError::NicheCardCount {
                category: Category::Marketing,
                found: 2,
                ..
            }
        ));
    }

    #[test]
    fn rejects_missing_niche() {
        let json = fixture_with(|value| {
            value["specific_services"]["niches"].as_array_mut().unwrap().remove(3);
        });
        assert!(matches!(load_from_str(&json), Err(ContentError::MissingNiche(Category::Coaching))));
    }

    #[test]
    fn rejects_navigation_without_services() {
        let json = fixture_with(|value| {
            value["nav_items"][2]["id"] = "pricing".into();
            value["home_sections"][2]["id"] = "pricing".into();
        });
        assert!(matches!(load_from_str(&json), Err(ContentError::MissingServicesItem)));
    }

    #[test]
    fn rejects_dropdown_link_outside_services() {
        let json = fixture_with(|value| {
            value["dropdown_links"][0]["route"] = "/".into();
        });
        assert!(matches!(load_from_str(&json), Err(ContentError::DropdownLinkRoute { .. })));
    }
}
