//! Materialized board: the controls the terminal frame draws and the user taps.

use crate::board::Board;
use crate::error::{BoardError, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavControl {
    pub label: String,
    /// Equivalent of `aria-current` on the page button.
    pub current: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileControl {
    pub label: String,
    /// Index of the bound tile within its page.
    pub tile: usize,
    pub custom: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageGrid {
    pub hidden: bool,
    pub controls: Vec<TileControl>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardView {
    pub nav: Vec<NavControl>,
    pub grids: Vec<PageGrid>,
}

impl BoardView {
    /// One grid per page and one control per tile, in declaration order.
    /// Every grid starts hidden until navigation activates one.
    pub fn render(board: &Board) -> Self {
        let nav = board
            .pages()
            .iter()
            .map(|page| NavControl {
                label: page.label.clone(),
                current: false,
            })
            .collect();

        let grids = board
            .pages()
            .iter()
            .map(|page| PageGrid {
                hidden: true,
                controls: page
                    .tiles
                    .iter()
                    .enumerate()
                    .map(|(i, tile)| TileControl {
                        label: tile.label().to_string(),
                        tile: i,
                        custom: tile.is_custom(),
                    })
                    .collect(),
            })
            .collect();

        Self { nav, grids }
    }

    pub fn page_count(&self) -> usize {
        self.grids.len()
    }

    /// Show grid `index` and mark its nav control current; hide the rest.
    pub fn show(&mut self, index: usize) -> Result<()> {
        if index >= self.grids.len() || index >= self.nav.len() {
            return Err(BoardError::PageOutOfRange {
                index,
                len: self.grids.len(),
            });
        }
        for (i, (grid, nav)) in self.grids.iter_mut().zip(self.nav.iter_mut()).enumerate() {
            grid.hidden = i != index;
            nav.current = i == index;
        }
        Ok(())
    }

    pub fn visible(&self) -> Option<(usize, &PageGrid)> {
        self.grids.iter().enumerate().find(|(_, grid)| !grid.hidden)
    }

    pub fn current_nav(&self) -> Option<usize> {
        self.nav.iter().position(|nav| nav.current)
    }

    pub fn control(&self, page: usize, index: usize) -> Result<&TileControl> {
        let grid = self.grids.get(page).ok_or(BoardError::PageOutOfRange {
            index: page,
            len: self.grids.len(),
        })?;
        grid.controls.get(index).ok_or(BoardError::TileOutOfRange {
            page,
            index,
            len: grid.controls.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::board::accumulator::WordAccumulator;
    use crate::generator::remote::RemoteTiles;

    fn view() -> BoardView {
        let accumulator = Rc::new(RefCell::new(WordAccumulator::new()));
        let remote = RemoteTiles {
            phrases: vec!["hej".into(), "farvel".into()],
            names: vec!["Anna".into()],
        };
        BoardView::render(&Board::build(remote, &accumulator).unwrap())
    }

    #[test]
    fn test_render_one_grid_per_page_all_hidden() {
        let view = view();
        assert_eq!(view.page_count(), 4);
        assert_eq!(view.nav.len(), 4);
        assert!(view.grids.iter().all(|g| g.hidden));
        assert!(view.visible().is_none());
        assert!(view.current_nav().is_none());
    }

    #[test]
    fn test_render_binds_controls_in_order() {
        let view = view();
        let phrases: Vec<(&str, usize)> = view.grids[0]
            .controls
            .iter()
            .map(|c| (c.label.as_str(), c.tile))
            .collect();
        assert_eq!(phrases, vec![("hej", 0), ("farvel", 1)]);
        assert_eq!(view.grids[2].controls.len(), 31);
        assert!(view.grids[2].controls.iter().all(|c| c.custom));
    }

    #[test]
    fn test_show_marks_exactly_one() {
        let mut view = view();
        view.show(2).unwrap();
        assert_eq!(view.grids.iter().filter(|g| !g.hidden).count(), 1);
        assert_eq!(view.nav.iter().filter(|n| n.current).count(), 1);
        assert_eq!(view.visible().map(|(i, _)| i), Some(2));
        assert_eq!(view.current_nav(), Some(2));
    }

    #[test]
    fn test_show_out_of_range_leaves_view_untouched() {
        let mut view = view();
        view.show(1).unwrap();
        let before = view.clone();
        assert!(view.show(9).is_err());
        assert_eq!(view, before);
    }
}
