pub mod component;
pub mod nav_bar;
pub mod niche_selector;
pub mod page;

pub(crate) use component::Component;
pub use nav_bar::NavBarComponent;
pub use page::PageComponent;

use ratatui::layout::{Position, Rect};

/// Index of the first area containing the pointer.
pub fn find_target_index_by_mouse_position(areas: &[Rect], column: u16, row: u16) -> Option<usize> {
    let position = Position::new(column, row);
    areas.iter().position(|area| area.contains(position))
}
