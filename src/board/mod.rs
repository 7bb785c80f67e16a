//! The board model: pages of tiles, built once from fetched and generated labels.

pub mod accumulator;
pub mod navigation;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use rust_i18n::t;

use crate::audio::Speaker;
use crate::error::{BoardError, Result};
use crate::generator::remote::RemoteTiles;
use crate::generator::{generate_alphabet, generate_numbers};
use accumulator::WordAccumulator;

pub type TileHandler = Rc<dyn Fn(&Speaker)>;

#[derive(Clone)]
pub enum TileAction {
    /// Speak the tile's own label.
    Speak,
    Custom(TileHandler),
}

impl fmt::Debug for TileAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TileAction::Speak => f.write_str("Speak"),
            TileAction::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Tile {
    label: String,
    action: TileAction,
}

impl Tile {
    pub fn speak(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: TileAction::Speak,
        }
    }

    pub fn custom(label: impl Into<String>, handler: impl Fn(&Speaker) + 'static) -> Self {
        Self {
            label: label.into(),
            action: TileAction::Custom(Rc::new(handler)),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_custom(&self) -> bool {
        matches!(self.action, TileAction::Custom(_))
    }

    pub fn tap(&self, speaker: &Speaker) {
        match &self.action {
            TileAction::Speak => {
                speaker.speak(&self.label);
            }
            TileAction::Custom(handler) => handler(speaker),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageKind {
    Phrases,
    Names,
    Letters,
    Numbers,
}

impl PageKind {
    pub const ALL: [PageKind; 4] = [
        PageKind::Phrases,
        PageKind::Names,
        PageKind::Letters,
        PageKind::Numbers,
    ];

    pub fn label(self) -> String {
        match self {
            PageKind::Phrases => t!("pages.phrases").to_string(),
            PageKind::Names => t!("pages.names").to_string(),
            PageKind::Letters => t!("pages.letters").to_string(),
            PageKind::Numbers => t!("pages.numbers").to_string(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Page {
    pub kind: PageKind,
    pub label: String,
    pub tiles: Vec<Tile>,
}

impl Page {
    pub fn new(kind: PageKind, tiles: Vec<Tile>) -> Self {
        Self {
            kind,
            label: kind.label(),
            tiles,
        }
    }

    pub fn labels(&self) -> Vec<&str> {
        self.tiles.iter().map(Tile::label).collect()
    }
}

#[derive(Clone, Debug)]
pub struct Board {
    pages: Vec<Page>,
}

impl Board {
    pub fn new(pages: Vec<Page>) -> Result<Self> {
        if pages.is_empty() {
            return Err(BoardError::EmptyBoard);
        }
        Ok(Self { pages })
    }

    /// The four standard pages, in display order. Only the letters page
    /// gets a handle on `accumulator`.
    pub fn build(
        remote: RemoteTiles,
        accumulator: &Rc<RefCell<WordAccumulator>>,
    ) -> Result<Self> {
        let RemoteTiles { phrases, names } = remote;
        let pages = vec![
            Page::new(
                PageKind::Phrases,
                phrases.into_iter().map(Tile::speak).collect(),
            ),
            Page::new(PageKind::Names, names.into_iter().map(Tile::speak).collect()),
            Page::new(PageKind::Letters, letter_tiles(accumulator)),
            Page::new(
                PageKind::Numbers,
                generate_numbers().into_iter().map(Tile::speak).collect(),
            ),
        ];
        Self::new(pages)
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn page(&self, index: usize) -> Result<&Page> {
        self.pages.get(index).ok_or(BoardError::PageOutOfRange {
            index,
            len: self.pages.len(),
        })
    }

    pub fn tile(&self, page: usize, index: usize) -> Result<&Tile> {
        let tiles = &self.page(page)?.tiles;
        tiles.get(index).ok_or(BoardError::TileOutOfRange {
            page,
            index,
            len: tiles.len(),
        })
    }
}

fn letter_tiles(accumulator: &Rc<RefCell<WordAccumulator>>) -> Vec<Tile> {
    let mut tiles: Vec<Tile> = generate_alphabet()
        .into_iter()
        .map(|letter| {
            let acc = Rc::clone(accumulator);
            let token = letter.clone();
            Tile::custom(letter, move |speaker| {
                acc.borrow_mut().append(token.as_str());
                speaker.click();
            })
        })
        .collect();

    let acc = Rc::clone(accumulator);
    tiles.push(Tile::custom(t!("tiles.delete"), move |speaker| {
        acc.borrow_mut().clear();
        speaker.click();
    }));

    let acc = Rc::clone(accumulator);
    tiles.push(Tile::custom(t!("tiles.next_word"), move |speaker| {
        acc.borrow_mut().flush_to_speech(speaker);
    }));

    tiles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::recording::RecordingPlayer;
    use crate::remote::ApiClient;

    fn fixture() -> (Rc<RecordingPlayer>, Speaker, Rc<RefCell<WordAccumulator>>, Board) {
        let player = Rc::new(RecordingPlayer::default());
        let api = ApiClient::new("http://board.test", None).unwrap();
        let speaker = Speaker::new(player.clone(), api);
        let accumulator = Rc::new(RefCell::new(WordAccumulator::new()));
        let remote = RemoteTiles {
            phrases: vec!["hej".into(), "farvel".into()],
            names: vec!["Anna".into()],
        };
        let board = Board::build(remote, &accumulator).unwrap();
        (player, speaker, accumulator, board)
    }

    #[test]
    fn test_build_orders_pages() {
        let (_, _, _, board) = fixture();
        let kinds: Vec<PageKind> = board.pages().iter().map(|p| p.kind).collect();
        assert_eq!(kinds, PageKind::ALL.to_vec());
        assert_eq!(board.page(0).unwrap().labels(), vec!["hej", "farvel"]);
        assert_eq!(board.page(1).unwrap().labels(), vec!["Anna"]);
    }

    #[test]
    fn test_letters_page_has_alphabet_and_two_controls() {
        let (_, _, _, board) = fixture();
        let letters = board.page(2).unwrap();
        assert_eq!(letters.tiles.len(), 31);
        assert!(letters.tiles.iter().all(Tile::is_custom));
        assert_eq!(letters.tiles[0].label(), "A");
        assert_eq!(letters.tiles[28].label(), "Å");
    }

    #[test]
    fn test_numbers_page_speaks_digits() {
        let (player, speaker, accumulator, board) = fixture();
        let numbers = board.page(3).unwrap();
        assert_eq!(numbers.tiles.len(), 11);
        assert!(numbers.tiles.iter().all(|t| !t.is_custom()));

        numbers.tiles[10].tap(&speaker);
        assert_eq!(player.speech_requests(), vec!["10".to_string()]);
        assert!(accumulator.borrow().is_empty());
    }

    #[test]
    fn test_speak_tile_speaks_label_without_click() {
        let (player, speaker, _, board) = fixture();
        board.tile(0, 1).unwrap().tap(&speaker);
        assert_eq!(player.speech_requests(), vec!["farvel".to_string()]);
        assert_eq!(player.click_count(), 0);
    }

    #[test]
    fn test_letter_tile_appends_and_clicks() {
        let (player, speaker, accumulator, board) = fixture();
        board.tile(2, 7).unwrap().tap(&speaker);
        board.tile(2, 4).unwrap().tap(&speaker);
        assert_eq!(accumulator.borrow().text(), "HE");
        assert_eq!(player.click_count(), 2);
        assert!(player.speech_requests().is_empty());
    }

    #[test]
    fn test_empty_remote_lists_still_build_four_pages() {
        let accumulator = Rc::new(RefCell::new(WordAccumulator::new()));
        let board = Board::build(RemoteTiles::default(), &accumulator).unwrap();
        assert_eq!(board.len(), 4);
        assert!(board.page(0).unwrap().tiles.is_empty());
        assert!(board.page(1).unwrap().tiles.is_empty());
    }

    #[test]
    fn test_out_of_range_lookups_fail() {
        let (_, _, _, board) = fixture();
        assert!(matches!(
            board.page(4),
            Err(BoardError::PageOutOfRange { index: 4, len: 4 })
        ));
        assert!(matches!(
            board.tile(1, 1),
            Err(BoardError::TileOutOfRange { page: 1, index: 1, len: 1 })
        ));
    }

    #[test]
    fn test_empty_board_is_rejected() {
        assert!(matches!(Board::new(Vec::new()), Err(BoardError::EmptyBoard)));
    }

    #[test]
    fn test_new_keeps_given_pages() {
        let page = Page::new(PageKind::Numbers, vec![Tile::speak("7")]);
        let board = Board::new(vec![page]).unwrap();
        assert_eq!(board.len(), 1);
        assert_eq!(board.tile(0, 0).unwrap().label(), "7");
    }
}
