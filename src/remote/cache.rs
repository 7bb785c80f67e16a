use std::fs::{self, File};
use std::path::PathBuf;
use std::time::SystemTime;

use log::debug;
use sha2::{Digest, Sha256};

/// Flat directory of fetched audio, one file per request URI. Least
/// recently used files are dropped once the directory outgrows `max_bytes`.
#[derive(Clone, Debug)]
pub struct DiskCache {
    base_dir: PathBuf,
    max_bytes: u64,
}

impl DiskCache {
    pub fn new(base_dir: PathBuf, max_bytes: u64) -> Option<Self> {
        fs::create_dir_all(&base_dir).ok()?;
        Some(Self {
            base_dir,
            max_bytes,
        })
    }

    /// A hit marks the entry as recently used.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        let path = self.path_for(key);
        let bytes = fs::read(&path).ok().filter(|bytes| !bytes.is_empty())?;
        if let Ok(file) = File::options().write(true).open(&path) {
            let _ = file.set_modified(SystemTime::now());
        }
        Some(bytes)
    }

    pub fn put(&self, key: &str, content: &[u8]) -> bool {
        if content.is_empty() || content.len() as u64 > self.max_bytes {
            return false;
        }
        if fs::write(self.path_for(key), content).is_err() {
            return false;
        }
        self.evict();
        true
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.base_dir.join(Self::file_name(key))
    }

    /// Hex SHA-256 of the whole key. Distinct URIs never share a file and
    /// the name is stable across builds.
    fn file_name(key: &str) -> String {
        format!("{:x}", Sha256::digest(key.as_bytes()))
    }

    fn evict(&self) {
        let Ok(dir) = fs::read_dir(&self.base_dir) else {
            return;
        };
        let mut entries: Vec<(SystemTime, u64, PathBuf)> = dir
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| {
                let meta = entry.metadata().ok()?;
                if !meta.is_file() {
                    return None;
                }
                let modified = meta.modified().unwrap_or(SystemTime::UNIX_EPOCH);
                Some((modified, meta.len(), entry.path()))
            })
            .collect();

        let mut total: u64 = entries.iter().map(|(_, len, _)| len).sum();
        if total <= self.max_bytes {
            return;
        }

        entries.sort_by_key(|(modified, _, _)| *modified);
        for (_, len, path) in entries {
            if total <= self.max_bytes {
                break;
            }
            if fs::remove_file(&path).is_ok() {
                debug!("evicted {} from audio cache", path.display());
                total = total.saturating_sub(len);
            }
        }
    }
}
