use std::collections::HashMap;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Corrections resolved in this and earlier runs, keyed by the original word.
///
/// A word that maps to itself was deliberately left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplacementCache {
    replacements: HashMap<String, String>,
}

impl ReplacementCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lookup(&self, token: &str) -> Option<&str> {
        self.replacements.get(token).map(String::as_str)
    }

    pub fn record(&mut self, token: &str, replacement: &str) {
        self.replacements
            .insert(token.to_owned(), replacement.to_owned());
    }

    pub fn len(&self) -> usize {
        self.replacements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.replacements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.replacements
            .iter()
            .map(|(token, replacement)| (token.as_str(), replacement.as_str()))
    }

    /// Loads a snapshot written by [`save_snapshot`](Self::save_snapshot).
    ///
    /// A missing or unreadable snapshot yields an empty cache.
    pub fn load_snapshot(path: &Path) -> Self {
        match Self::read_snapshot(path) {
            Ok(cache) => {
                log::debug!(
                    "Loaded {} replacements from {}",
                    cache.len(),
                    path.display()
                );
                cache
            }
            Err(e) => {
                log::debug!("Starting with an empty cache ({}): {}", path.display(), e);
                Self::new()
            }
        }
    }

    fn read_snapshot(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        // decoding from a slice bounds every length prefix by the bytes left
        let bytes = fs::read(path)?;
        let replacements: HashMap<String, String> = bincode::deserialize(&bytes)?;
        Ok(ReplacementCache { replacements })
    }

    /// Atomically replaces the snapshot at `path` with the current entries.
    pub fn save_snapshot(&self, path: &Path) -> io::Result<()> {
        let parent_dir = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent_dir)?;

        let mut temp_file = NamedTempFile::new_in(parent_dir)?;
        {
            let mut writer = BufWriter::new(temp_file.as_file_mut());
            bincode::serialize_into(&mut writer, &self.replacements).map_err(io::Error::other)?;
            writer.flush()?;
        }
        temp_file.persist(path).map_err(|e| e.error)?;
        log::debug!("Saved {} replacements to {}", self.len(), path.display());
        Ok(())
    }
}
