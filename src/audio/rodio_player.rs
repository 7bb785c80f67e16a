use std::io::Cursor;
use std::thread;

use log::debug;
use rodio::{Decoder, OutputStream, Sink};

use crate::audio::{PlayHandle, Player};
use crate::error::{BoardError, Result};
use crate::remote::ApiClient;

/// Plays each sound on its own thread with its own output stream.
pub struct RodioPlayer {
    api: ApiClient,
    volume: f32,
}

impl RodioPlayer {
    pub fn new(api: ApiClient, volume: f32) -> Self {
        Self {
            api,
            volume: volume.clamp(0.0, 1.0),
        }
    }
}

impl Player for RodioPlayer {
    fn play(&self, uri: &str) -> PlayHandle {
        let (signal, handle) = PlayHandle::pending();
        let api = self.api.clone();
        let uri = uri.to_string();
        let volume = self.volume;

        let spawned = thread::Builder::new()
            .name("playback".to_string())
            .spawn(move || {
                let outcome = play_to_end(&api, &uri, volume);
                if let Err(ref e) = outcome {
                    debug!("playback of {uri} failed: {e}");
                }
                signal.resolve(outcome);
            });

        match spawned {
            Ok(_) => handle,
            Err(e) => PlayHandle::resolved(Err(BoardError::Io(e))),
        }
    }
}

fn play_to_end(api: &ApiClient, uri: &str, volume: f32) -> Result<()> {
    let bytes = api.fetch_audio(uri)?;
    if bytes.is_empty() {
        return Err(BoardError::Audio(format!("{uri} returned no audio")));
    }

    // The source is fully buffered before decoding, so once the decoder
    // accepts it playback cannot stall on the network.
    let source = Decoder::new(Cursor::new(bytes))?;

    let (_stream, stream_handle) = OutputStream::try_default()?;
    let sink = Sink::try_new(&stream_handle)?;
    sink.set_volume(volume);
    sink.append(source);
    sink.sleep_until_end();
    Ok(())
}
