//! Shared value types for the AIStudio site.
//!
//! Everything here is plain data: navigation items, routes, niche categories,
//! viewport geometry, tunables, and the `Msg`/`Effect` vocabulary exchanged
//! between the terminal host and its components. State machines live in
//! `aistudio-engine`; static content lives in `aistudio-content`.

mod category;
mod config;
mod geometry;
mod message;
mod navigation;
mod route;

pub use category::{CardIcon, Category, ContentCard, ParseCategoryError};
pub use config::{NavigationConfig, RevealConfig, SiteConfig, SwitcherConfig, TerminalConfig};
pub use geometry::ElementRect;
pub use message::{Effect, Msg};
pub use navigation::{DropdownLink, NavItem, SERVICES_SECTION, SectionId};
pub use route::{ParseRouteError, Route};
