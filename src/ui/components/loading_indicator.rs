use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Clear, Paragraph, Widget};

use crate::ui::layout::centered_rect;
use crate::ui::theme::Theme;

const SPINNER: [char; 8] = ['⣾', '⣽', '⣻', '⢿', '⡿', '⣟', '⣯', '⣷'];

/// Shown while the tile lists are being fetched. One flag covers both
/// requests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadingIndicator {
    shown: bool,
    frame: usize,
}

impl Default for LoadingIndicator {
    fn default() -> Self {
        Self {
            shown: true,
            frame: 0,
        }
    }
}

impl LoadingIndicator {
    pub fn show(&mut self, shown: bool) {
        self.shown = shown;
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    pub fn tick(&mut self) {
        if self.shown {
            self.frame = (self.frame + 1) % SPINNER.len();
        }
    }

    pub fn widget<'a>(&self, message: &'a str, theme: &'a Theme) -> LoadingPopup<'a> {
        LoadingPopup {
            spinner: SPINNER[self.frame],
            message,
            theme,
        }
    }
}

pub struct LoadingPopup<'a> {
    spinner: char,
    message: &'a str,
    theme: &'a Theme,
}

impl Widget for LoadingPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let text = format!("{} {}", self.spinner, self.message);
        let width = (text.chars().count() as u16).saturating_add(6);
        let popup = centered_rect(width, 3, area);

        Clear.render(popup, buf);
        let block = Block::bordered()
            .border_style(Style::default().fg(colors.accent()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(popup);
        block.render(popup, buf);

        Paragraph::new(text)
            .style(
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shown_by_default() {
        assert!(LoadingIndicator::default().is_shown());
    }

    #[test]
    fn test_toggle() {
        let mut loading = LoadingIndicator::default();
        loading.show(false);
        assert!(!loading.is_shown());
        loading.show(true);
        assert!(loading.is_shown());
    }

    #[test]
    fn test_spinner_only_advances_while_shown() {
        let mut loading = LoadingIndicator::default();
        loading.tick();
        assert_eq!(loading.frame, 1);
        loading.show(false);
        loading.tick();
        assert_eq!(loading.frame, 1);
    }

    #[test]
    fn test_popup_renders_message() {
        let theme = Theme::default();
        let loading = LoadingIndicator::default();
        let area = Rect::new(0, 0, 30, 7);
        let mut buf = Buffer::empty(area);
        loading.widget("Indlæser", &theme).render(area, &mut buf);

        let row: String = (0..area.width).map(|x| buf[(x, 3)].symbol().to_string()).collect();
        assert!(row.contains("Indlæser"), "row was {row:?}");
    }
}
