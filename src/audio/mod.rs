//! Fire-and-forget sound playback.
//!
//! A [`Player`] starts loading a sound and returns immediately. The returned
//! [`PlayHandle`] resolves exactly once, when the sound has finished playing
//! or failed to load. Nothing cancels a playback once started, and two calls
//! may well overlap.

pub mod recording;
pub mod rodio_player;

use std::rc::Rc;
use std::sync::mpsc::{self, Receiver, SyncSender};

use log::info;

use crate::error::{BoardError, Result};
use crate::remote::ApiClient;

pub trait Player {
    fn play(&self, uri: &str) -> PlayHandle;
}

/// Outcome of one `play` call.
#[derive(Debug)]
pub struct PlayHandle {
    rx: Receiver<Result<()>>,
}

/// Sending half of a [`PlayHandle`]. Consumed by `resolve`, so a playback
/// reports at most once.
#[derive(Debug)]
pub struct PlaySignal {
    tx: SyncSender<Result<()>>,
}

impl PlaySignal {
    pub fn resolve(self, outcome: Result<()>) {
        // The caller may have dropped its handle; that is fine.
        let _ = self.tx.send(outcome);
    }
}

impl PlayHandle {
    pub fn pending() -> (PlaySignal, PlayHandle) {
        let (tx, rx) = mpsc::sync_channel(1);
        (PlaySignal { tx }, PlayHandle { rx })
    }

    pub fn resolved(outcome: Result<()>) -> Self {
        let (signal, handle) = Self::pending();
        signal.resolve(outcome);
        handle
    }

    /// Block until the playback settles.
    pub fn wait(self) -> Result<()> {
        self.rx
            .recv()
            .unwrap_or_else(|_| Err(BoardError::Audio("playback abandoned".to_string())))
    }
}

/// The two sounds the board makes: synthesized speech and the key click.
#[derive(Clone)]
pub struct Speaker {
    player: Rc<dyn Player>,
    api: ApiClient,
    click_url: String,
}

impl Speaker {
    pub fn new(player: Rc<dyn Player>, api: ApiClient) -> Self {
        let click_url = api.click_url();
        Self {
            player,
            api,
            click_url,
        }
    }

    /// Request synthesis of `text`. Every call is a fresh request.
    pub fn speak(&self, text: &str) -> PlayHandle {
        info!("TTS {text:?}");
        self.player.play(&self.api.speech_url(text))
    }

    pub fn click(&self) -> PlayHandle {
        self.player.play(&self.click_url)
    }
}
