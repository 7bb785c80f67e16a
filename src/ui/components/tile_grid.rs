use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::ui::layout::grid_cells;
use crate::ui::theme::Theme;
use crate::ui::view::PageGrid;

/// The visible page: one bordered button per control, cursor highlighted.
pub struct TileGrid<'a> {
    pub grid: &'a PageGrid,
    pub columns: u16,
    pub cursor: usize,
    pub empty_text: &'a str,
    pub theme: &'a Theme,
}

impl<'a> TileGrid<'a> {
    pub fn new(grid: &'a PageGrid, columns: u16, cursor: usize, theme: &'a Theme) -> Self {
        Self {
            grid,
            columns,
            cursor,
            empty_text: "",
            theme,
        }
    }

    pub fn empty_text(mut self, text: &'a str) -> Self {
        self.empty_text = text;
        self
    }
}

impl Widget for TileGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        buf.set_style(area, Style::default().bg(colors.bg()));

        if self.grid.controls.is_empty() {
            Paragraph::new(self.empty_text)
                .style(Style::default().fg(colors.text_muted()))
                .alignment(Alignment::Center)
                .render(area, buf);
            return;
        }

        let cells = grid_cells(area, self.grid.controls.len(), self.columns, self.cursor);
        for (idx, cell) in cells {
            let control = &self.grid.controls[idx];
            let selected = idx == self.cursor;

            let (fg, bg) = if selected {
                (colors.cursor_fg(), colors.cursor_bg())
            } else if control.custom {
                (colors.tile_fg(), colors.action_tile_bg())
            } else {
                (colors.tile_fg(), colors.tile_bg())
            };
            let border = if selected {
                colors.border_focused()
            } else {
                colors.border()
            };

            let block = Block::bordered()
                .border_style(Style::default().fg(border))
                .style(Style::default().bg(bg));
            let inner = block.inner(cell);
            block.render(cell, buf);

            let mut style = Style::default().fg(fg).bg(bg);
            if selected {
                style = style.add_modifier(Modifier::BOLD);
            }
            Paragraph::new(control.label.as_str())
                .style(style)
                .alignment(Alignment::Center)
                .render(inner, buf);
        }
    }
}
