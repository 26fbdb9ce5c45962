//! Row layout of each routed page.
//!
//! A [`Document`] is the terminal counterpart of a rendered page: a vertical
//! stack of identified blocks measured in rows. Section ids match the
//! navigation items so the section tracker can find them, and blocks flagged
//! `reveal` are the targets the reveal animator observes.

use aistudio_content::SiteContent;
use aistudio_types::Route;

pub const SECTION_ROWS: u16 = 14;
pub const HERO_ROWS: u16 = 9;
pub const SELECTOR_ROWS: u16 = 3;
pub const CARD_ROWS: u16 = 8;
pub const FOOTER_ROWS: u16 = 3;
const GAP_ROWS: u16 = 2;

/// Stable ids of the niche card slots. The slots stay in place while their
/// content follows the selected category.
pub const NICHE_CARD_IDS: [&str; 3] = ["niche-card-0", "niche-card-1", "niche-card-2"];
pub const SERVICE_CARD_IDS: [&str; 3] = ["service-card-0", "service-card-1", "service-card-2"];
pub const NICHE_SELECTOR_ID: &str = "niche-selector";

/// Horizontal placement of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lane {
    Full,
    /// One of `count` equal columns sharing the same rows.
    Column { index: u16, count: u16 },
}

/// Where a card block takes its content from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardSource {
    General,
    /// Cards of the currently selected niche.
    Niche,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    Hero { title: String, subtitle: String },
    Section { heading: String, body: Vec<String> },
    Card { slot: usize, source: CardSource },
    NicheSelector,
    Footer(String),
    NotFound { path: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub id: String,
    pub kind: BlockKind,
    /// First row in document coordinates.
    pub top: u16,
    pub height: u16,
    pub lane: Lane,
    pub reveal: bool,
    /// Position in a staggered group; delays the entrance by one step each.
    pub stagger: usize,
}

impl Block {
    pub fn bottom(&self) -> u16 {
        self.top.saturating_add(self.height)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    blocks: Vec<Block>,
    height: u16,
}

impl Document {
    /// Lays out the page for `route`.
    pub fn for_route(route: &Route, content: &SiteContent) -> Self {
        let mut builder = DocumentBuilder::default();
        match route {
            Route::Home => {
                for section in &content.home_sections {
                    builder.push(
                        section.id.as_str(),
                        BlockKind::Section {
                            heading: section.heading.clone(),
                            body: section.body.clone(),
                        },
                        SECTION_ROWS,
                        false,
                    );
                }
            }
            Route::GeneralServices => {
                let page = &content.general_services;
                builder.push(
                    "genservices-hero",
                    BlockKind::Hero {
                        title: page.title.clone(),
                        subtitle: page.subtitle.clone(),
                    },
                    HERO_ROWS,
                    true,
                );
                builder.push_card_row(&SERVICE_CARD_IDS, CardSource::General);
            }
            Route::SpecificServices => {
                let page = &content.specific_services;
                builder.push(
                    "specservices-hero",
                    BlockKind::Hero {
                        title: page.title.clone(),
                        subtitle: page.subtitle.clone(),
                    },
                    HERO_ROWS,
                    true,
                );
                builder.push(NICHE_SELECTOR_ID, BlockKind::NicheSelector, SELECTOR_ROWS, true);
                builder.push_card_row(&NICHE_CARD_IDS, CardSource::Niche);
            }
            Route::Unknown(path) => {
                builder.push("not-found", BlockKind::NotFound { path: path.clone() }, HERO_ROWS, false);
            }
        }
        builder.push("footer", BlockKind::Footer(content.footer.clone()), FOOTER_ROWS, false);
        builder.finish()
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn block(&self, id: &str) -> Option<&Block> {
        self.blocks.iter().find(|block| block.id == id)
    }

    /// Total height in rows.
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Ids of every reveal block in document order.
    pub fn reveal_targets(&self) -> Vec<String> {
        self.blocks
            .iter()
            .filter(|block| block.reveal)
            .map(|block| block.id.clone())
            .collect()
    }
}

#[derive(Debug, Default)]
struct DocumentBuilder {
    blocks: Vec<Block>,
    cursor: u16,
}

impl DocumentBuilder {
    fn push(&mut self, id: &str, kind: BlockKind, height: u16, reveal: bool) {
        self.blocks.push(Block {
            id: id.to_string(),
            kind,
            top: self.cursor,
            height,
            lane: Lane::Full,
            reveal,
            stagger: 0,
        });
        self.cursor = self.cursor.saturating_add(height).saturating_add(GAP_ROWS);
    }

    fn push_card_row(&mut self, ids: &[&str], source: CardSource) {
        let count = ids.len() as u16;
        for (slot, id) in ids.iter().enumerate() {
            self.blocks.push(Block {
                id: (*id).to_string(),
                kind: BlockKind::Card { slot, source },
                top: self.cursor,
                height: CARD_ROWS,
                lane: Lane::Column {
                    index: slot as u16,
                    count,
                },
                reveal: true,
                stagger: slot,
            });
        }
        self.cursor = self.cursor.saturating_add(CARD_ROWS).saturating_add(GAP_ROWS);
    }

    fn finish(self) -> Document {
        let height = self.blocks.iter().map(Block::bottom).max().unwrap_or(0);
        Document {
            blocks: self.blocks,
            height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content() -> &'static SiteContent {
        aistudio_content::embedded().expect("embedded content")
    }

    #[test]
    fn home_sections_stack_without_overlap() {
        let document = Document::for_route(&Route::Home, content());
        let ids: Vec<&str> = document.blocks().iter().map(|block| block.id.as_str()).collect();
        assert_eq!(ids, ["home", "about", "services", "faq", "contact", "footer"]);
        for pair in document.blocks().windows(2) {
            assert!(pair[0].bottom() <= pair[1].top);
        }
        assert!(document.reveal_targets().is_empty());
    }

    #[test]
    fn niche_page_marks_selector_and_card_slots_for_reveal() {
        let document = Document::for_route(&Route::SpecificServices, content());
        assert_eq!(
            document.reveal_targets(),
            ["specservices-hero", "niche-selector", "niche-card-0", "niche-card-1", "niche-card-2"]
        );
        let cards: Vec<&Block> = NICHE_CARD_IDS.iter().filter_map(|id| document.block(id)).collect();
        assert!(cards.iter().all(|card| card.top == cards[0].top));
        assert_eq!(cards.iter().map(|card| card.stagger).collect::<Vec<_>>(), [0, 1, 2]);
    }

    #[test]
    fn unknown_route_renders_not_found() {
        let document = Document::for_route(&Route::Unknown("/blog".into()), content());
        assert!(matches!(
            document.block("not-found").map(|block| &block.kind),
            Some(BlockKind::NotFound { path }) if path == "/blog"
        ));
        assert_eq!(document.height(), document.block("footer").map(Block::bottom).unwrap_or(0));
    }
}
