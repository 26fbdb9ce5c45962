use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind, MouseButton};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    widgets::Block,
};

use aistudio_types::Effect;

use super::components::{Component, NavBarComponent, PageComponent};
use super::theme::theme_helpers as th;
use crate::app::{App, NAV_ROWS};

/// Root view: navigation bar on top of the scrollable page.
#[derive(Debug, Default)]
pub struct MainView {
    nav_bar: NavBarComponent,
    page: PageComponent,
}

impl MainView {
    /// Whether the pointer is over the bar or the open dropdown panel.
    fn pointer_over_nav(app: &App, column: u16, row: u16) -> bool {
        let position = Position::new(column, row);
        app.nav_bar.last_area.contains(position)
            || (app.dropdown.is_open() && app.nav_bar.panel_area.is_some_and(|panel| panel.contains(position)))
    }
}

impl Component for MainView {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let is_quit = matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL));
        if is_quit {
            return vec![Effect::Quit];
        }
        let mut effects = self.nav_bar.handle_key_events(app, key);
        if effects.is_empty() {
            effects = self.page.handle_key_events(app, key);
        }
        effects
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        let over_nav = Self::pointer_over_nav(app, mouse.column, mouse.row);
        let mut effects = self.nav_bar.handle_mouse_events(app, mouse);
        let is_click = matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left));
        // Clicks on the bar or its panel never reach the page underneath.
        if !(is_click && over_nav) {
            effects.extend(self.page.handle_mouse_events(app, mouse));
        }
        effects
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        frame.render_widget(Block::default().style(th::page_style(&app.theme)), area);
        let [nav_area, page_area] = Layout::vertical([Constraint::Length(NAV_ROWS), Constraint::Min(0)]).areas(area);
        // Page first so the dropdown panel draws over it.
        self.page.render(frame, page_area, app);
        self.nav_bar.render(frame, nav_area, app);
    }
}
