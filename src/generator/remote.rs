use std::thread;

use log::{debug, warn};

use crate::error::Result;
use crate::remote::ApiClient;

/// Tile labels served by the backend. A list whose fetch failed is empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RemoteTiles {
    pub phrases: Vec<String>,
    pub names: Vec<String>,
}

pub fn load_phrases(api: &ApiClient) -> Vec<String> {
    or_empty("phrases", api.fetch_string_list(&api.phrases_url()))
}

pub fn load_names(api: &ApiClient) -> Vec<String> {
    or_empty("names", api.fetch_string_list(&api.names_url()))
}

/// Issue both fetches at once and return when both have settled.
pub fn load_remote_tiles(api: &ApiClient) -> RemoteTiles {
    thread::scope(|scope| {
        let phrases = scope.spawn(|| load_phrases(api));
        let names = scope.spawn(|| load_names(api));
        RemoteTiles {
            phrases: phrases.join().unwrap_or_else(|_| {
                warn!("phrase fetch thread panicked");
                Vec::new()
            }),
            names: names.join().unwrap_or_else(|_| {
                warn!("name fetch thread panicked");
                Vec::new()
            }),
        }
    })
}

/// A failed source degrades to no tiles; the page is still built.
pub fn or_empty(source: &str, fetched: Result<Vec<String>>) -> Vec<String> {
    match fetched {
        Ok(labels) => {
            debug!("loaded {} {source}", labels.len());
            labels
        }
        Err(e) => {
            warn!("could not load {source}: {e}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoardError;

    #[test]
    fn test_or_empty_keeps_labels() {
        let labels = or_empty("phrases", Ok(vec!["hej".into(), "farvel".into()]));
        assert_eq!(labels, vec!["hej".to_string(), "farvel".to_string()]);
    }

    #[test]
    fn test_or_empty_degrades_on_failure() {
        let failed = Err(BoardError::Status {
            url: "http://localhost/api/names".into(),
            status: 500,
        });
        assert!(or_empty("names", failed).is_empty());
    }

    #[test]
    fn test_unreachable_server_yields_empty_lists() {
        // Nothing listens on the discard port, so both fetches fail fast.
        let api = ApiClient::new("http://127.0.0.1:9", None).unwrap();
        assert_eq!(load_remote_tiles(&api), RemoteTiles::default());
    }
}
