pub mod components;
pub mod document;
pub mod main_view;
pub mod page_view;
pub mod runtime;
pub mod theme;
