//! Localized strings drawn outside the board model.

use rust_i18n::t;

pub fn title() -> String {
    t!("board.title").to_string()
}

pub fn loading() -> String {
    t!("board.loading").to_string()
}

pub fn empty_page() -> String {
    t!("board.empty_page").to_string()
}

pub fn footer_hints() -> Vec<String> {
    vec![
        t!("hints.tap").to_string(),
        t!("hints.move").to_string(),
        t!("hints.pages").to_string(),
        t!("hints.quit").to_string(),
    ]
}
