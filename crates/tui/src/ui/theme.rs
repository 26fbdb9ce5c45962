use std::fmt::Debug;

use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders},
};

/// Semantic color roles used throughout the UI.
#[derive(Debug, Clone)]
pub struct ThemeRoles {
    pub background: Color,
    pub surface: Color,
    pub surface_muted: Color,
    pub border: Color,

    pub text: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    pub accent_primary: Color,

    /// Fill of the niche selector's sliding indicator.
    pub indicator_bg: Color,
    /// Label color on top of the indicator.
    pub indicator_fg: Color,
}

/// Theme trait exposes semantic roles and common style builders.
pub trait Theme: Debug {
    fn roles(&self) -> &ThemeRoles;

    fn text_primary_style(&self) -> Style {
        Style::default().fg(self.roles().text)
    }
    fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.roles().text_secondary)
    }
    fn text_muted_style(&self) -> Style {
        Style::default().fg(self.roles().text_muted)
    }

    fn border_style(&self, highlighted: bool) -> Style {
        let color = if highlighted {
            self.roles().accent_primary
        } else {
            self.roles().border
        };
        Style::default().fg(color)
    }

    fn accent_primary_style(&self) -> Style {
        Style::default().fg(self.roles().accent_primary)
    }
    fn accent_emphasis_style(&self) -> Style {
        Style::default().fg(self.roles().accent_primary).add_modifier(Modifier::BOLD)
    }

    /// Nav item for the section currently under the reference line.
    fn nav_active_style(&self) -> Style {
        Style::default()
            .fg(self.roles().accent_primary)
            .bg(self.roles().surface_muted)
            .add_modifier(Modifier::BOLD)
    }

    fn indicator_style(&self) -> Style {
        Style::default().bg(self.roles().indicator_bg)
    }

    fn indicator_label_style(&self) -> Style {
        Style::default()
            .fg(self.roles().indicator_fg)
            .bg(self.roles().indicator_bg)
            .add_modifier(Modifier::BOLD)
    }
}

/// Dark navy palette with a blue accent, matching the site's gradient hero.
#[derive(Debug, Clone)]
pub struct StudioTheme {
    roles: ThemeRoles,
}

impl Default for StudioTheme {
    fn default() -> Self {
        Self {
            roles: ThemeRoles {
                background: Color::Rgb(2, 6, 23),
                surface: Color::Rgb(15, 23, 42),
                surface_muted: Color::Rgb(30, 41, 59),
                border: Color::Rgb(51, 65, 85),

                text: Color::Rgb(241, 245, 249),
                text_secondary: Color::Rgb(203, 213, 225),
                text_muted: Color::Rgb(100, 116, 139),

                accent_primary: Color::Rgb(96, 165, 250),

                indicator_bg: Color::Rgb(241, 245, 249),
                indicator_fg: Color::Rgb(2, 6, 23),
            },
        }
    }
}

impl Theme for StudioTheme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}

pub mod theme_helpers {
    use super::*;

    /// Build a standard rounded Block with theme surfaces and borders.
    pub fn block<'a, T: Theme + ?Sized>(theme: &'a T, title: Option<&'a str>, highlighted: bool) -> Block<'a> {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.border_style(highlighted))
            .style(panel_style(theme));
        if let Some(t) = title {
            block = block.title(Span::styled(t, theme.text_secondary_style().add_modifier(Modifier::BOLD)));
        }
        block
    }

    /// Style for panel-like containers.
    pub fn panel_style<T: Theme + ?Sized>(theme: &T) -> Style {
        let ThemeRoles { surface, text, .. } = *theme.roles();
        Style::default().bg(surface).fg(text)
    }

    /// Page background behind every block.
    pub fn page_style<T: Theme + ?Sized>(theme: &T) -> Style {
        let ThemeRoles { background, text, .. } = *theme.roles();
        Style::default().bg(background).fg(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indicator_label_contrasts_with_fill() {
        let theme = StudioTheme::default();
        let style = theme.indicator_label_style();
        assert_eq!(style.bg, Some(theme.roles().indicator_bg));
        assert_ne!(style.fg, style.bg);
    }
}
