//! HTTP side of the board: tile lists, synthesized speech and the click sound.

pub mod cache;

use std::time::Duration;

use log::debug;
use reqwest::Url;
use reqwest::blocking::Client;

use crate::error::{BoardError, Result};
use cache::DiskCache;

pub const PHRASES_PATH: &str = "/api/phrases";
pub const NAMES_PATH: &str = "/api/names";
pub const TTS_PATH: &str = "/api/tts";
pub const CLICK_SOUND_PATH: &str = "/assets/button1.mp3";

#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    tts_endpoint: Url,
    client: Client,
    audio_cache: Option<DiskCache>,
}

impl ApiClient {
    /// `timeout` of `None` leaves requests unbounded.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/').to_string();
        let tts_endpoint = Url::parse(&format!("{base_url}{TTS_PATH}"))
            .map_err(|e| BoardError::InvalidUrl(format!("{base_url}: {e}")))?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| BoardError::Http {
                url: base_url.clone(),
                source,
            })?;
        Ok(Self {
            base_url,
            tts_endpoint,
            client,
            audio_cache: None,
        })
    }

    pub fn with_audio_cache(mut self, cache: Option<DiskCache>) -> Self {
        self.audio_cache = cache;
        self
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub fn phrases_url(&self) -> String {
        self.endpoint(PHRASES_PATH)
    }

    pub fn names_url(&self) -> String {
        self.endpoint(NAMES_PATH)
    }

    pub fn click_url(&self) -> String {
        self.endpoint(CLICK_SOUND_PATH)
    }

    /// Synthesis URI for `text`, form-encoded into the `q` parameter.
    pub fn speech_url(&self, text: &str) -> String {
        let mut url = self.tts_endpoint.clone();
        url.query_pairs_mut().append_pair("q", text);
        url.to_string()
    }

    fn get(&self, url: &str) -> Result<reqwest::blocking::Response> {
        let response = self.client.get(url).send().map_err(|source| BoardError::Http {
            url: url.to_string(),
            source,
        })?;
        if response.status().is_success() {
            Ok(response)
        } else {
            Err(BoardError::Status {
                url: url.to_string(),
                status: response.status().as_u16(),
            })
        }
    }

    pub fn fetch_text(&self, url: &str) -> Result<String> {
        self.get(url)?.text().map_err(|source| BoardError::Http {
            url: url.to_string(),
            source,
        })
    }

    /// Fetch a JSON array of strings.
    pub fn fetch_string_list(&self, url: &str) -> Result<Vec<String>> {
        let body = self.fetch_text(url)?;
        parse_string_list(&body)
    }

    /// Fetch a playable resource, consulting the audio cache first.
    pub fn fetch_audio(&self, url: &str) -> Result<Vec<u8>> {
        if let Some(bytes) = self.audio_cache.as_ref().and_then(|c| c.get(url)) {
            debug!("audio cache hit for {url}");
            return Ok(bytes);
        }

        let bytes = self
            .get(url)?
            .bytes()
            .map_err(|source| BoardError::Http {
                url: url.to_string(),
                source,
            })?
            .to_vec();

        if let Some(cache) = &self.audio_cache {
            cache.put(url, &bytes);
        }
        Ok(bytes)
    }
}

pub fn parse_string_list(body: &str) -> Result<Vec<String>> {
    Ok(serde_json::from_str(body)?)
}
