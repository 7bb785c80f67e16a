use std::cell::RefCell;

use log::info;
use reqwest::Url;

use crate::audio::{PlayHandle, Player};
use crate::remote::{CLICK_SOUND_PATH, TTS_PATH};

/// Player that plays nothing and remembers every URI it was asked for.
/// Backs `--silent` and the controller tests.
#[derive(Debug, Default)]
pub struct RecordingPlayer {
    played: RefCell<Vec<String>>,
}

impl RecordingPlayer {
    pub fn played(&self) -> Vec<String> {
        self.played.borrow().clone()
    }

    /// Decoded `q` parameter of every speech request, in request order.
    pub fn speech_requests(&self) -> Vec<String> {
        self.played
            .borrow()
            .iter()
            .filter_map(|uri| Url::parse(uri).ok())
            .filter(|url| url.path() == TTS_PATH)
            .map(|url| {
                url.query_pairs()
                    .find(|(key, _)| key == "q")
                    .map(|(_, text)| text.into_owned())
                    .unwrap_or_default()
            })
            .collect()
    }

    pub fn click_count(&self) -> usize {
        self.played
            .borrow()
            .iter()
            .filter(|uri| uri.ends_with(CLICK_SOUND_PATH))
            .count()
    }
}

impl Player for RecordingPlayer {
    fn play(&self, uri: &str) -> PlayHandle {
        info!("silent playback of {uri}");
        self.played.borrow_mut().push(uri.to_string());
        PlayHandle::resolved(Ok(()))
    }
}
