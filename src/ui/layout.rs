use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Rows taken by one tile button (border, label, border).
pub const CELL_HEIGHT: u16 = 3;

/// Padding around a navigation label: " 1 " before and one space after.
const NAV_PADDING: u16 = 4;

pub struct BoardLayout {
    pub nav: Rect,
    pub grid: Rect,
    pub footer: Rect,
}

impl BoardLayout {
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(CELL_HEIGHT),
                Constraint::Length(1),
            ])
            .split(area);

        Self {
            nav: vertical[0],
            grid: vertical[1],
            footer: vertical[2],
        }
    }
}

/// Screen cell of each navigation control, left to right. Controls that do
/// not fit are dropped from the end.
pub fn nav_cells(area: Rect, labels: &[&str]) -> Vec<Rect> {
    let mut cells = Vec::with_capacity(labels.len());
    let mut x = area.x;
    let right = area.x.saturating_add(area.width);

    for label in labels {
        let width = (label.chars().count() as u16).saturating_add(NAV_PADDING);
        if x.saturating_add(width) > right {
            break;
        }
        cells.push(Rect::new(x, area.y, width, area.height));
        x = x.saturating_add(width);
    }
    cells
}

/// Row of the grid that is drawn first so that `cursor` stays on screen.
pub fn first_visible_row(area: Rect, columns: u16, cursor: usize) -> usize {
    let columns = usize::from(columns.max(1));
    let visible_rows = usize::from((area.height / CELL_HEIGHT).max(1));
    let cursor_row = cursor / columns;
    (cursor_row + 1).saturating_sub(visible_rows)
}

/// Screen cell of every on-screen control as `(control index, rect)`.
pub fn grid_cells(area: Rect, count: usize, columns: u16, cursor: usize) -> Vec<(usize, Rect)> {
    if area.width == 0 || area.height < CELL_HEIGHT || count == 0 {
        return Vec::new();
    }

    let cols = usize::from(columns.max(1));
    let visible_rows = usize::from(area.height / CELL_HEIGHT);
    let first_row = first_visible_row(area, columns, cursor);
    let cell_width = (area.width / columns.max(1)).max(1);

    let start = first_row * cols;
    let end = count.min((first_row + visible_rows) * cols);

    (start..end)
        .map(|idx| {
            let row = (idx / cols - first_row) as u16;
            let col = (idx % cols) as u16;
            let rect = Rect::new(
                area.x + col * cell_width,
                area.y + row * CELL_HEIGHT,
                cell_width,
                CELL_HEIGHT,
            );
            (idx, rect)
        })
        .filter(|(_, rect)| rect.x + rect.width <= area.x + area.width)
        .collect()
}

pub fn hit(cells: &[(usize, Rect)], column: u16, row: u16) -> Option<usize> {
    cells
        .iter()
        .find(|(_, rect)| {
            column >= rect.x
                && column < rect.x + rect.width
                && row >= rect.y
                && row < rect.y + rect.height
        })
        .map(|(idx, _)| *idx)
}

pub fn pack_hint_lines(hints: &[&str], width: usize) -> Vec<String> {
    if width == 0 || hints.is_empty() {
        return Vec::new();
    }

    let prefix = " ";
    let separator = "  ";
    let mut out: Vec<String> = Vec::new();
    let mut current = prefix.to_string();
    let mut has_hint = false;

    for hint in hints {
        if hint.is_empty() {
            continue;
        }
        let candidate = if has_hint {
            format!("{current}{separator}{hint}")
        } else {
            format!("{current}{hint}")
        };
        if candidate.chars().count() <= width {
            current = candidate;
            has_hint = true;
        } else {
            if has_hint {
                out.push(current);
            }
            current = format!("{prefix}{hint}");
            has_hint = true;
        }
    }

    if has_hint {
        out.push(current);
    }
    out
}

pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let target_w = width.min(area.width);
    let target_h = height.min(area.height);

    let left = area
        .x
        .saturating_add((area.width.saturating_sub(target_w)) / 2);
    let top = area
        .y
        .saturating_add((area.height.saturating_sub(target_h)) / 2);

    Rect::new(left, top, target_w, target_h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_cells_are_adjacent() {
        let cells = nav_cells(Rect::new(0, 0, 80, 3), &["Fraser", "Navne", "Tal"]);
        assert_eq!(cells.len(), 3);
        assert_eq!(cells[0], Rect::new(0, 0, 10, 3));
        assert_eq!(cells[1], Rect::new(10, 0, 9, 3));
        assert_eq!(cells[2], Rect::new(19, 0, 7, 3));
    }

    #[test]
    fn test_nav_cells_drop_overflow() {
        let cells = nav_cells(Rect::new(0, 0, 15, 3), &["Fraser", "Navne"]);
        assert_eq!(cells.len(), 1);
    }

    #[test]
    fn test_grid_cells_fill_rows() {
        let area = Rect::new(0, 3, 60, 9);
        let cells = grid_cells(area, 8, 6, 0);
        assert_eq!(cells.len(), 8);
        assert_eq!(cells[0], (0, Rect::new(0, 3, 10, 3)));
        assert_eq!(cells[5], (5, Rect::new(50, 3, 10, 3)));
        assert_eq!(cells[6], (6, Rect::new(0, 6, 10, 3)));
    }

    #[test]
    fn test_grid_cells_scroll_to_cursor() {
        // Two visible rows of three, cursor on the fourth row.
        let area = Rect::new(0, 0, 30, 6);
        assert_eq!(first_visible_row(area, 3, 10), 2);
        let cells = grid_cells(area, 31, 3, 10);
        let indices: Vec<usize> = cells.iter().map(|(i, _)| *i).collect();
        assert_eq!(indices, vec![6, 7, 8, 9, 10, 11]);
        assert_eq!(cells[0].1.y, 0);
    }

    #[test]
    fn test_grid_cells_empty_cases() {
        assert!(grid_cells(Rect::new(0, 0, 30, 6), 0, 3, 0).is_empty());
        assert!(grid_cells(Rect::new(0, 0, 30, 2), 5, 3, 0).is_empty());
    }

    #[test]
    fn test_hit_maps_click_to_control() {
        let cells = grid_cells(Rect::new(0, 3, 60, 9), 8, 6, 0);
        assert_eq!(hit(&cells, 0, 3), Some(0));
        assert_eq!(hit(&cells, 25, 4), Some(2));
        assert_eq!(hit(&cells, 15, 7), Some(7));
        // Right of the last control on the second row.
        assert_eq!(hit(&cells, 35, 7), None);
        assert_eq!(hit(&cells, 5, 1), None);
    }

    #[test]
    fn test_pack_hint_lines_wraps() {
        let lines = pack_hint_lines(&["[Enter] Tap", "[q] Quit"], 14);
        assert_eq!(lines, vec![" [Enter] Tap".to_string(), " [q] Quit".to_string()]);
        let lines = pack_hint_lines(&["[Enter] Tap", "[q] Quit"], 80);
        assert_eq!(lines, vec![" [Enter] Tap  [q] Quit".to_string()]);
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(centered_rect(10, 4, area), Rect::new(5, 3, 10, 4));
        assert_eq!(centered_rect(40, 40, area), area);
    }
}
