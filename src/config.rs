use std::path::PathBuf;

pub const PHRASE_SEPARATOR: char = '_';
pub const MAX_EDIT_DISTANCE: usize = 2;
pub const MAX_SUGGESTIONS: usize = 10;

/// Directories searched, in order, for a locale's spelling dictionary.
pub const DICTIONARY_DIRS: &[&str] = &[
    "dictionaries",
    "/usr/share/hunspell",
    "/usr/share/myspell/dicts",
    "/usr/share/myspell",
];

/// Settings for one correction run.
#[derive(Debug, Clone)]
pub struct Config {
    pub input_path: PathBuf,
    pub locale: String,
    pub separator: char,
    pub max_edit_distance: usize,
    pub max_suggestions: usize,
    pub dictionary_dirs: Vec<PathBuf>,
    /// Where the snapshot and the corrected dictionary are written.
    pub output_dir: PathBuf,
}

impl Config {
    pub fn new(input_path: impl Into<PathBuf>, locale: impl Into<String>) -> Self {
        Config {
            input_path: input_path.into(),
            locale: locale.into(),
            separator: PHRASE_SEPARATOR,
            max_edit_distance: MAX_EDIT_DISTANCE,
            max_suggestions: MAX_SUGGESTIONS,
            dictionary_dirs: DICTIONARY_DIRS.iter().map(PathBuf::from).collect(),
            output_dir: PathBuf::from("."),
        }
    }

    /// Snapshot of previously resolved words, `<locale>.gob`.
    pub fn cache_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.gob", self.locale))
    }

    /// Corrected synonym dictionary, `<locale>.processed.json`.
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.processed.json", self.locale))
    }
}
