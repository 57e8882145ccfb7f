use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("could not read {}: {source}", path.display())]
    ReadInput { path: PathBuf, source: io::Error },

    #[error("malformed synonym document {}: {source}", path.display())]
    MalformedDocument {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("no spelling dictionary found for locale '{0}'")]
    DictionaryNotFound(String),

    #[error("could not load dictionary {}: {message}", path.display())]
    DictionaryLoad { path: PathBuf, message: String },

    #[error("could not parse Hunspell dictionary {}: {error}", path.display())]
    InvalidHunspell {
        path: PathBuf,
        error: spellbook::ParseDictionaryError,
    },

    #[error("could not save replacement cache {}: {source}", path.display())]
    CacheSave { path: PathBuf, source: io::Error },

    #[error("could not write {} (the file may be partial): {source}", path.display())]
    WriteOutput { path: PathBuf, source: io::Error },

    #[error("could not encode corrected dictionary: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
