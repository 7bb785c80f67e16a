use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Widget};

use crate::ui::layout::nav_cells;
use crate::ui::theme::Theme;
use crate::ui::view::NavControl;

/// One button per page; the current page is drawn inverted.
pub struct NavBar<'a> {
    pub controls: &'a [NavControl],
    pub title: &'a str,
    pub theme: &'a Theme,
}

impl<'a> NavBar<'a> {
    pub fn new(controls: &'a [NavControl], title: &'a str, theme: &'a Theme) -> Self {
        Self {
            controls,
            title,
            theme,
        }
    }

    pub fn labels(controls: &[NavControl]) -> Vec<&str> {
        controls.iter().map(|c| c.label.as_str()).collect()
    }
}

impl Widget for NavBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(format!(" {} ", self.title))
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.header_bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        let labels = Self::labels(self.controls);
        let cells = nav_cells(inner, &labels);

        for (i, (control, cell)) in self.controls.iter().zip(cells).enumerate() {
            let style = if control.current {
                Style::default()
                    .fg(colors.nav_current_fg())
                    .bg(colors.nav_current_bg())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.header_fg()).bg(colors.header_bg())
            };
            let text = format!(" {} {} ", i + 1, control.label);
            buf.set_stringn(cell.x, cell.y, &text, usize::from(cell.width), style);
        }
    }
}
