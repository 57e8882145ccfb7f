//! Reading and writing synonym dictionaries.
//!
//! Input is a Solr managed synonym resource; only its `managedMap` is used.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Base phrase to its synonym phrases.
pub type SynonymMap = BTreeMap<String, Vec<String>>;

#[derive(Debug, Deserialize)]
struct ManagedSynonyms {
    #[serde(rename = "managedMap")]
    managed_map: SynonymMap,
}

pub fn parse_synonyms(json: &[u8]) -> serde_json::Result<SynonymMap> {
    let document: ManagedSynonyms = serde_json::from_slice(json)?;
    Ok(document.managed_map)
}

pub fn read_synonyms(path: &Path) -> Result<SynonymMap> {
    let data = fs::read(path).map_err(|source| Error::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    parse_synonyms(&data).map_err(|source| Error::MalformedDocument {
        path: path.to_path_buf(),
        source,
    })
}

pub fn to_json(synonyms: &SynonymMap) -> Result<String> {
    Ok(serde_json::to_string(synonyms)?)
}

pub fn write_synonyms(path: &Path, json: &str) -> Result<()> {
    fs::write(path, json).map_err(|source| Error::WriteOutput {
        path: path.to_path_buf(),
        source,
    })
}
