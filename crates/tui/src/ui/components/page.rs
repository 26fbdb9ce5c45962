//! Scrollable page body.
//!
//! The whole document is drawn into an off-screen buffer sized to the page,
//! then the rows under the current scroll offset are copied into the frame.
//! Partially visible blocks therefore clip naturally at both edges.

use std::time::Instant;

use aistudio_types::{CardIcon, ContentCard, Effect, Route};
use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use super::niche_selector::{self, NicheSelectorState};
use super::Component;
use crate::app::{App, RevealPhase};
use crate::ui::document::{Block as PageBlock, BlockKind, CardSource, Lane};
use crate::ui::theme::{Theme, theme_helpers as th};

const PAGE_MARGIN: u16 = 2;
const COLUMN_GAP: u16 = 2;

fn icon_glyph(icon: CardIcon) -> &'static str {
    match icon {
        CardIcon::ShoppingCart => "$",
        CardIcon::Users => "@",
        CardIcon::TrendingUp => "↗",
        CardIcon::Megaphone => "!",
        CardIcon::Home => "⌂",
    }
}

/// Rect of `block` in page-buffer coordinates.
fn lane_rect(content: Rect, block: &PageBlock) -> Rect {
    let row = Rect::new(content.x, block.top, content.width, block.height);
    match block.lane {
        Lane::Full => row,
        Lane::Column { index, count } => {
            let constraints = vec![Constraint::Ratio(1, u32::from(count.max(1))); usize::from(count.max(1))];
            let columns = Layout::horizontal(constraints).spacing(COLUMN_GAP).split(row);
            columns.get(usize::from(index)).copied().unwrap_or(row)
        }
    }
}

/// Translates a page-buffer rect to the screen, clipped to `area`.
fn to_screen(rect: Rect, area: Rect, offset: u16) -> Rect {
    let top = i32::from(rect.y) - i32::from(offset) + i32::from(area.y);
    let bottom = top + i32::from(rect.height);
    let clipped_top = top.max(i32::from(area.y));
    let clipped_bottom = bottom.min(i32::from(area.bottom()));
    if clipped_bottom <= clipped_top {
        return Rect::default();
    }
    Rect::new(
        rect.x + area.x,
        clipped_top as u16,
        rect.width,
        (clipped_bottom - clipped_top) as u16,
    )
    .intersection(area)
}

#[derive(Debug, Default)]
pub struct PageComponent;

impl PageComponent {
    /// Draws the page into `target` as of `now`.
    pub fn render_at(&self, target: &mut Buffer, area: Rect, app: &mut App, now: Instant) {
        app.page.set_viewport_rows(area.height);
        let document = app.page.document();
        let page_rect = Rect::new(0, 0, area.width, document.height().max(1));
        let mut page = Buffer::empty(page_rect);
        page.set_style(page_rect, th::page_style(&app.theme));
        let content = page_rect.inner(Margin::new(PAGE_MARGIN, 0));

        let mut selector = None;
        for block in document.blocks() {
            let rect = lane_rect(content, block).intersection(page_rect);
            let phase = if block.reveal {
                app.reveal_phase(&block.id, block.stagger, now)
            } else {
                RevealPhase::Shown
            };
            if phase == RevealPhase::Hidden {
                continue;
            }
            match &block.kind {
                BlockKind::Hero { title, subtitle } => draw_hero(&mut page, rect, app, title, subtitle, phase),
                BlockKind::Section { heading, body } => {
                    let active = *app.tracker.active_section() == block.id.as_str();
                    draw_section(&mut page, rect, app, heading, body, active);
                }
                BlockKind::Card { slot, source } => {
                    let card = match source {
                        CardSource::General => app.content.general_services.cards.get(*slot),
                        CardSource::Niche => app
                            .content
                            .specific_services
                            .cards_for(app.switcher.selected())
                            .get(*slot),
                    };
                    let shown = match source {
                        CardSource::General => true,
                        CardSource::Niche => app.switcher.content_visible(),
                    };
                    draw_card(&mut page, rect, app, card.filter(|_| shown), phase);
                }
                BlockKind::NicheSelector => {
                    let slots = niche_selector::draw(&mut page, rect, app);
                    selector = Some((rect, slots));
                }
                BlockKind::Footer(text) => draw_footer(&mut page, rect, app, text),
                BlockKind::NotFound { path } => draw_not_found(&mut page, rect, app, path),
            }
        }

        let offset = app.page.offset();
        for row in 0..area.height {
            let source_row = offset.saturating_add(row);
            if source_row >= page_rect.height {
                break;
            }
            for column in 0..area.width {
                target[(area.x + column, area.y + row)] = page[(column, source_row)].clone();
            }
        }

        app.niche_selector = match selector {
            Some((track, slots)) => NicheSelectorState {
                track_area: Some(to_screen(track, area, offset)),
                label_areas: slots.into_iter().map(|slot| to_screen(slot, area, offset)).collect(),
            },
            None => NicheSelectorState::default(),
        };
    }
}

fn phase_style(app: &App, style: Style, phase: RevealPhase) -> Style {
    match phase {
        RevealPhase::Entering => style.fg(app.theme.roles().text_muted),
        _ => style,
    }
}

fn draw_hero(buf: &mut Buffer, rect: Rect, app: &App, title: &str, subtitle: &str, phase: RevealPhase) {
    let theme = &app.theme;
    let lines = vec![
        Line::default(),
        Line::from(Span::styled(title, phase_style(app, theme.accent_emphasis_style(), phase))),
        Line::default(),
        Line::from(Span::styled(subtitle, phase_style(app, theme.text_secondary_style(), phase))),
    ];
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(rect.inner(Margin::new(4, 1)), buf);
}

fn draw_section(buf: &mut Buffer, rect: Rect, app: &App, heading: &str, body: &[String], active: bool) {
    let theme = &app.theme;
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(theme.border_style(active))
        .title(Span::styled(format!(" {heading} "), theme.accent_emphasis_style()));
    let inner = block.inner(rect).inner(Margin::new(2, 1));
    block.render(rect, buf);

    let lines: Vec<Line> = body
        .iter()
        .flat_map(|paragraph| [Line::from(Span::styled(paragraph.as_str(), theme.text_primary_style())), Line::default()])
        .collect();
    Paragraph::new(lines).wrap(Wrap { trim: true }).render(inner, buf);
}

fn draw_card(buf: &mut Buffer, rect: Rect, app: &App, card: Option<&ContentCard>, phase: RevealPhase) {
    let theme = &app.theme;
    let border = phase_style(app, theme.border_style(false), phase);
    let block = th::block(theme, None, false).border_style(border);
    let inner = block.inner(rect).inner(Margin::new(1, 0));
    block.render(rect, buf);

    let Some(card) = card else {
        return;
    };
    let title_style = phase_style(app, theme.text_primary_style().add_modifier(Modifier::BOLD), phase);
    let lines = vec![
        Line::from(vec![
            Span::styled(icon_glyph(card.icon), phase_style(app, theme.accent_primary_style(), phase)),
            Span::raw("  "),
            Span::styled(card.title.as_str(), title_style),
        ]),
        Line::default(),
        Line::from(Span::styled(
            card.description.as_str(),
            phase_style(app, theme.text_secondary_style(), phase),
        )),
    ];
    Paragraph::new(lines).wrap(Wrap { trim: true }).render(inner, buf);
}

fn draw_footer(buf: &mut Buffer, rect: Rect, app: &App, text: &str) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(app.theme.border_style(false));
    let inner = block.inner(rect);
    block.render(rect, buf);
    Paragraph::new(Span::styled(text, app.theme.text_muted_style()))
        .alignment(Alignment::Center)
        .render(inner, buf);
}

fn draw_not_found(buf: &mut Buffer, rect: Rect, app: &App, path: &str) {
    let theme = &app.theme;
    let lines = vec![
        Line::default(),
        Line::from(Span::styled("Page not found", theme.accent_emphasis_style())),
        Line::from(Span::styled(path, theme.text_secondary_style())),
        Line::default(),
        Line::from(Span::styled("Press 1 to return home", theme.text_muted_style())),
    ];
    Paragraph::new(lines).alignment(Alignment::Center).render(rect, buf);
}

impl Component for PageComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let page_rows = app.page.viewport_rows().max(1) as i16;
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => vec![Effect::ScrollBy(-1)],
            KeyCode::Down | KeyCode::Char('j') => vec![Effect::ScrollBy(1)],
            KeyCode::PageUp => vec![Effect::ScrollBy(-page_rows)],
            KeyCode::PageDown | KeyCode::Char(' ') => vec![Effect::ScrollBy(page_rows)],
            KeyCode::Home => {
                app.jump(true, Instant::now());
                Vec::new()
            }
            KeyCode::End => {
                app.jump(false, Instant::now());
                Vec::new()
            }
            KeyCode::Left if *app.route() == Route::SpecificServices => {
                niche_selector::step_selection(app, -1, Instant::now());
                Vec::new()
            }
            KeyCode::Right if *app.route() == Route::SpecificServices => {
                niche_selector::step_selection(app, 1, Instant::now());
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        let wheel = app.config.terminal.wheel_rows as i16;
        match mouse.kind {
            MouseEventKind::ScrollDown => vec![Effect::ScrollBy(wheel)],
            MouseEventKind::ScrollUp => vec![Effect::ScrollBy(-wheel)],
            _ => {
                if *app.route() == Route::SpecificServices {
                    niche_selector::handle_mouse(app, mouse, Instant::now());
                }
                Vec::new()
            }
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        self.render_at(frame.buffer_mut(), area, app, Instant::now());
    }
}
