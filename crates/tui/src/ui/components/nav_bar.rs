//! Top navigation bar: brand, section links, and the services dropdown.

use aistudio_engine::trigger_looks_active;
use aistudio_types::Effect;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Clear, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::{Component, find_target_index_by_mouse_position};
use crate::app::App;
use crate::ui::theme::{Theme, theme_helpers as th};

const ITEM_GAP: u16 = 1;

/// Areas recorded by the last render, used for pointer hit-testing.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NavBarState {
    pub last_area: Rect,
    pub item_areas: Vec<Rect>,
    /// Index of the item that opens the dropdown.
    pub trigger_index: Option<usize>,
    pub panel_area: Option<Rect>,
    pub link_areas: Vec<Rect>,
}

impl NavBarState {
    pub fn trigger_area(&self) -> Option<Rect> {
        self.trigger_index.and_then(|index| self.item_areas.get(index).copied())
    }

    /// Whether `position` is inside the dropdown's hover region: the trigger,
    /// plus the panel and the strip below the trigger leading to it while the
    /// panel is open. Cells beside the trigger belong to other items.
    pub fn hover_contains(&self, open: bool, position: Position) -> bool {
        let Some(trigger) = self.trigger_area() else {
            return false;
        };
        if trigger.contains(position) {
            return true;
        }
        match self.panel_area {
            Some(panel) if open => {
                let gap = Rect::new(
                    trigger.x,
                    trigger.bottom(),
                    trigger.width,
                    panel.y.saturating_sub(trigger.bottom()),
                );
                panel.contains(position) || gap.contains(position)
            }
            _ => false,
        }
    }
}

fn chevron(rotation: u16) -> &'static str {
    if rotation >= 180 { "▴" } else { "▾" }
}

#[derive(Debug, Default)]
pub struct NavBarComponent;

impl NavBarComponent {
    fn item_labels(app: &App) -> Vec<String> {
        let chevron = chevron(app.dropdown.indicator_rotation());
        app.content
            .nav_items
            .iter()
            .map(|item| {
                if item.opens_dropdown() {
                    format!(" {} {chevron} ", item.label)
                } else {
                    format!(" {} ", item.label)
                }
            })
            .collect()
    }

    fn render_panel(&self, frame: &mut Frame, bar: Rect, app: &mut App) {
        let trigger = match app.nav_bar.trigger_area() {
            Some(trigger) if app.dropdown.is_open() => trigger,
            _ => {
                app.nav_bar.panel_area = None;
                app.nav_bar.link_areas.clear();
                return;
            }
        };
        let theme = &app.theme;
        let links = app.dropdown.visible_links();
        let content_width = links
            .iter()
            .flat_map(|link| [link.title.width(), link.subtitle.width()])
            .max()
            .unwrap_or(0) as u16;
        let frame_area = frame.area();
        let width = (content_width + 4).max(trigger.width).min(frame_area.width);
        let height = links.len() as u16 * 2 + 2;
        let x = trigger.x.min(frame_area.right().saturating_sub(width));
        let panel = Rect::new(x, bar.bottom(), width, height).intersection(frame_area);

        let block = th::block(theme, None, true);
        let inner = block.inner(panel);
        frame.render_widget(Clear, panel);
        frame.render_widget(block, panel);

        let mut link_areas = Vec::with_capacity(links.len());
        for (index, link) in links.iter().enumerate() {
            let area = Rect::new(inner.x + 1, inner.y + index as u16 * 2, inner.width.saturating_sub(1), 2).intersection(inner);
            let lines = vec![
                Line::from(Span::styled(
                    link.title.as_str(),
                    theme.text_primary_style().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(link.subtitle.as_str(), theme.text_muted_style())),
            ];
            frame.render_widget(Paragraph::new(lines), area);
            link_areas.push(area);
        }
        app.nav_bar.panel_area = Some(panel);
        app.nav_bar.link_areas = link_areas;
    }
}

impl Component for NavBarComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let KeyCode::Char(ch) = key.code else {
            return Vec::new();
        };
        let links = app.dropdown.links();
        let effect = match ch {
            '1'..='9' => {
                let index = ch as usize - '1' as usize;
                app.content
                    .nav_items
                    .get(index)
                    .map(|item| Effect::ScrollToSection(item.id.clone()))
            }
            'g' => links.first().map(|link| Effect::Navigate(link.route.clone())),
            'n' => links.get(1).map(|link| Effect::Navigate(link.route.clone())),
            _ => None,
        };
        effect.into_iter().collect()
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        let (column, row) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                let inside = app
                    .nav_bar
                    .hover_contains(app.dropdown.is_open(), Position::new(column, row));
                app.dropdown.pointer_moved(inside);
                Vec::new()
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if app.dropdown.is_open()
                    && let Some(index) = find_target_index_by_mouse_position(&app.nav_bar.link_areas, column, row)
                {
                    return app
                        .dropdown
                        .visible_links()
                        .get(index)
                        .map(|link| vec![Effect::Navigate(link.route.clone())])
                        .unwrap_or_default();
                }
                find_target_index_by_mouse_position(&app.nav_bar.item_areas, column, row)
                    .and_then(|index| app.content.nav_items.get(index))
                    .map(|item| vec![Effect::ScrollToSection(item.id.clone())])
                    .unwrap_or_default()
            }
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &app.theme;
        let block = th::block(theme, None, false);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let brand = &app.content.brand;
        let brand_line = Line::from(vec![
            Span::styled(brand.name.as_str(), theme.text_primary_style().add_modifier(Modifier::BOLD)),
            Span::styled(brand.accent.as_str(), theme.accent_emphasis_style()),
        ]);
        let brand_width = (brand.name.width() + brand.accent.width()) as u16;
        let brand_area = Rect::new(inner.x + 1, inner.y, brand_width, inner.height.min(1)).intersection(inner);
        frame.render_widget(Paragraph::new(brand_line), brand_area);

        let labels = Self::item_labels(app);
        let widths: Vec<u16> = labels.iter().map(|label| label.width() as u16).collect();
        let total = widths.iter().sum::<u16>() + ITEM_GAP * widths.len().saturating_sub(1) as u16;
        let mut x = inner.right().saturating_sub(total + 1).max(brand_area.right() + 2);

        let active = app.tracker.active_section();
        let route = app.page.route();
        let mut item_areas = Vec::with_capacity(labels.len());
        for ((item, label), width) in app.content.nav_items.iter().zip(&labels).zip(widths) {
            let is_active = if item.opens_dropdown() {
                trigger_looks_active(active, route)
            } else {
                *active == item.id
            };
            let style = if is_active {
                theme.nav_active_style()
            } else {
                theme.text_secondary_style()
            };
            let item_area = Rect::new(x, inner.y, width, inner.height.min(1)).intersection(inner);
            frame.render_widget(Paragraph::new(Span::styled(label.as_str(), style)), item_area);
            item_areas.push(item_area);
            x = x.saturating_add(width + ITEM_GAP);
        }

        app.nav_bar.last_area = area;
        app.nav_bar.trigger_index = app.content.nav_items.iter().position(|item| item.opens_dropdown());
        app.nav_bar.item_areas = item_areas;
        self.render_panel(frame, area, app);
    }
}
