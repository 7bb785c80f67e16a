use crate::audio::{PlayHandle, Speaker};

/// Letters tapped so far for the word being spelled.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordAccumulator {
    buffer: Vec<String>,
}

impl WordAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokens are not validated; a token may be longer than one character.
    pub fn append(&mut self, token: impl Into<String>) {
        self.buffer.push(token.into());
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    pub fn text(&self) -> String {
        self.buffer.concat()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Speak the accumulated word and start over.
    ///
    /// An empty buffer still issues a request, for empty text.
    // TODO: decide whether an empty flush should stay silent instead of
    // requesting synthesis of "".
    pub fn flush_to_speech(&mut self, speaker: &Speaker) -> PlayHandle {
        let word = self.text();
        let handle = speaker.speak(&word);
        self.clear();
        handle
    }
}
