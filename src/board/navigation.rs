use log::debug;

use crate::error::Result;
use crate::ui::view::BoardView;

/// Which page is on screen. Starts at 0 and lives for the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Navigation {
    active: usize,
}

impl Navigation {
    /// Activate the first page of a freshly rendered view.
    pub fn activate(view: &mut BoardView) -> Result<Self> {
        let mut nav = Self { active: 0 };
        nav.switch_to(0, view)?;
        Ok(nav)
    }

    pub fn active(&self) -> usize {
        self.active
    }

    /// Out-of-range indices are a wiring bug, reported as an error.
    pub fn switch_to(&mut self, index: usize, view: &mut BoardView) -> Result<()> {
        view.show(index)?;
        debug!("switched to page {index}");
        self.active = index;
        Ok(())
    }

    pub fn next(&mut self, view: &mut BoardView) -> Result<()> {
        let count = view.page_count().max(1);
        self.switch_to((self.active + 1) % count, view)
    }

    pub fn previous(&mut self, view: &mut BoardView) -> Result<()> {
        let count = view.page_count().max(1);
        self.switch_to((self.active + count - 1) % count, view)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::board::Board;
    use crate::board::accumulator::WordAccumulator;
    use crate::error::BoardError;
    use crate::generator::remote::RemoteTiles;

    fn view() -> BoardView {
        let accumulator = Rc::new(RefCell::new(WordAccumulator::new()));
        BoardView::render(&Board::build(RemoteTiles::default(), &accumulator).unwrap())
    }

    #[test]
    fn test_activate_starts_on_first_page() {
        let mut view = view();
        let nav = Navigation::activate(&mut view).unwrap();
        assert_eq!(nav.active(), 0);
        assert_eq!(view.visible().map(|(i, _)| i), Some(0));
        assert_eq!(view.current_nav(), Some(0));
    }

    #[test]
    fn test_switch_to_every_page_keeps_view_consistent() {
        let mut view = view();
        let mut nav = Navigation::activate(&mut view).unwrap();
        for i in 0..view.page_count() {
            nav.switch_to(i, &mut view).unwrap();
            assert_eq!(nav.active(), i);
            assert_eq!(view.grids.iter().filter(|g| !g.hidden).count(), 1);
            assert_eq!(view.nav.iter().filter(|n| n.current).count(), 1);
            assert_eq!(view.visible().map(|(v, _)| v), view.current_nav());
            assert_eq!(view.current_nav(), Some(i));
        }
    }

    #[test]
    fn test_switch_out_of_range_fails_and_keeps_state() {
        let mut view = view();
        let mut nav = Navigation::activate(&mut view).unwrap();
        nav.switch_to(3, &mut view).unwrap();
        let err = nav.switch_to(4, &mut view).unwrap_err();
        assert!(matches!(err, BoardError::PageOutOfRange { index: 4, len: 4 }));
        assert_eq!(nav.active(), 3);
        assert_eq!(view.current_nav(), Some(3));
    }

    #[test]
    fn test_next_and_previous_wrap() {
        let mut view = view();
        let mut nav = Navigation::activate(&mut view).unwrap();
        nav.previous(&mut view).unwrap();
        assert_eq!(nav.active(), 3);
        nav.next(&mut view).unwrap();
        assert_eq!(nav.active(), 0);
        nav.next(&mut view).unwrap();
        assert_eq!(nav.active(), 1);
    }
}
