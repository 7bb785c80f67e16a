//! The board controller: owns the session state and routes taps.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc::Sender;
use std::thread;

use log::{debug, info, warn};
use ratatui::layout::Rect;
use ratatui::widgets::Block;

use crate::audio::{Player, Speaker};
use crate::board::Board;
use crate::board::accumulator::WordAccumulator;
use crate::board::navigation::Navigation;
use crate::config::Config;
use crate::error::Result;
use crate::event::AppEvent;
use crate::generator::remote::{RemoteTiles, load_remote_tiles};
use crate::remote::ApiClient;
use crate::ui::components::loading_indicator::LoadingIndicator;
use crate::ui::layout::{self, BoardLayout};
use crate::ui::theme::Theme;
use crate::ui::view::{BoardView, PageGrid};

/// Board state that exists once the tile lists have arrived.
pub struct LoadedBoard {
    pub board: Board,
    pub view: BoardView,
    pub nav: Navigation,
    pub cursor: usize,
}

impl LoadedBoard {
    fn visible_grid(&self) -> &PageGrid {
        &self.view.grids[self.nav.active()]
    }
}

pub struct App {
    pub config: Config,
    pub theme: Theme,
    pub loading: LoadingIndicator,
    pub should_quit: bool,
    api: ApiClient,
    speaker: Speaker,
    board: Option<LoadedBoard>,
}

impl App {
    pub fn new(config: Config, theme: Theme, api: ApiClient, player: Rc<dyn Player>) -> Self {
        let speaker = Speaker::new(player, api.clone());
        Self {
            config,
            theme,
            loading: LoadingIndicator::default(),
            should_quit: false,
            api,
            speaker,
            board: None,
        }
    }

    /// Fetch phrases and names in the background. The result comes back
    /// through `tx` as [`AppEvent::TilesLoaded`].
    pub fn start_loading(&mut self, tx: Sender<AppEvent>) -> Result<()> {
        self.loading.show(true);
        let api = self.api.clone();
        thread::Builder::new()
            .name("tile-loader".to_string())
            .spawn(move || {
                let tiles = load_remote_tiles(&api);
                if tx.send(AppEvent::TilesLoaded(tiles)).is_err() {
                    debug!("event loop gone before tiles arrived");
                }
            })?;
        Ok(())
    }

    /// Build, render and activate the board. Runs once per session.
    pub fn on_tiles_loaded(&mut self, tiles: RemoteTiles) -> Result<()> {
        self.loading.show(false);
        if self.board.is_some() {
            warn!("ignoring second tile delivery");
            return Ok(());
        }

        info!(
            "building board with {} phrases and {} names",
            tiles.phrases.len(),
            tiles.names.len()
        );
        let accumulator = Rc::new(RefCell::new(WordAccumulator::new()));
        let board = Board::build(tiles, &accumulator)?;
        let mut view = BoardView::render(&board);
        let nav = Navigation::activate(&mut view)?;

        self.board = Some(LoadedBoard {
            board,
            view,
            nav,
            cursor: 0,
        });
        Ok(())
    }

    pub fn board(&self) -> Option<&LoadedBoard> {
        self.board.as_ref()
    }

    pub fn page_count(&self) -> usize {
        self.board.as_ref().map_or(0, |b| b.view.page_count())
    }

    pub fn switch_page(&mut self, index: usize) -> Result<()> {
        if let Some(loaded) = self.board.as_mut() {
            loaded.nav.switch_to(index, &mut loaded.view)?;
            loaded.cursor = 0;
        }
        Ok(())
    }

    pub fn next_page(&mut self) -> Result<()> {
        if let Some(loaded) = self.board.as_mut() {
            loaded.nav.next(&mut loaded.view)?;
            loaded.cursor = 0;
        }
        Ok(())
    }

    pub fn previous_page(&mut self) -> Result<()> {
        if let Some(loaded) = self.board.as_mut() {
            loaded.nav.previous(&mut loaded.view)?;
            loaded.cursor = 0;
        }
        Ok(())
    }

    /// Tap control `index` of the visible page.
    pub fn tap(&mut self, index: usize) -> Result<()> {
        let Some(loaded) = self.board.as_ref() else {
            return Ok(());
        };
        let page = loaded.nav.active();
        let control = loaded.view.control(page, index)?;
        let tile = loaded.board.tile(page, control.tile)?;
        debug!("tap {:?} on page {page}", tile.label());
        tile.tap(&self.speaker);
        Ok(())
    }

    pub fn tap_cursor(&mut self) -> Result<()> {
        let Some(loaded) = self.board.as_ref() else {
            return Ok(());
        };
        if loaded.visible_grid().controls.is_empty() {
            return Ok(());
        }
        let cursor = loaded.cursor;
        self.tap(cursor)
    }

    /// Move the cursor within the visible grid, clamped to its controls.
    pub fn move_cursor(&mut self, dx: isize, dy: isize) {
        let columns = self.config.columns.max(1) as isize;
        let Some(loaded) = self.board.as_mut() else {
            return;
        };
        let count = loaded.visible_grid().controls.len() as isize;
        if count == 0 {
            return;
        }
        let target = loaded.cursor as isize + dx + dy * columns;
        loaded.cursor = target.clamp(0, count - 1) as usize;
    }

    /// Handle a left click at `(column, row)` of a frame of size `area`.
    pub fn click(&mut self, area: Rect, column: u16, row: u16) -> Result<()> {
        let columns = self.config.columns;
        let Some(loaded) = self.board.as_mut() else {
            return Ok(());
        };
        let board_layout = BoardLayout::new(area);

        let nav_inner = Block::bordered().inner(board_layout.nav);
        let labels: Vec<&str> = loaded.view.nav.iter().map(|n| n.label.as_str()).collect();
        let nav_cells: Vec<(usize, Rect)> = layout::nav_cells(nav_inner, &labels)
            .into_iter()
            .enumerate()
            .collect();
        if let Some(page) = layout::hit(&nav_cells, column, row) {
            return self.switch_page(page);
        }

        let count = loaded.visible_grid().controls.len();
        let cells = layout::grid_cells(board_layout.grid, count, columns, loaded.cursor);
        if let Some(index) = layout::hit(&cells, column, row) {
            loaded.cursor = index;
            return self.tap(index);
        }
        Ok(())
    }

    pub fn tick(&mut self) {
        self.loading.tick();
    }
}
