//! Spelling providers and dictionary discovery.
//!
//! The resolver never talks to a dictionary directly: it only needs to know
//! whether a word is known and what the ranked alternatives are. Locales
//! with a Hunspell dictionary are served by `spellbook`, locales that only
//! ship a word list fall back to the symmetric-delete [`SpellCorrector`].

use crate::config::Config;
use crate::error::{Error, Result};
use crate::spellcheck::SpellCorrector;
use std::fs;
use std::path::{Path, PathBuf};

pub trait SpellingProvider {
    fn is_known(&self, word: &str) -> bool;

    /// Ranked alternatives, best guess first.
    fn suggest(&self, word: &str) -> Vec<String>;
}

pub struct HunspellProvider {
    dict: spellbook::Dictionary,
    max_suggestions: usize,
}

impl HunspellProvider {
    pub fn new(
        aff: &str,
        dic: &str,
        max_suggestions: usize,
    ) -> std::result::Result<Self, spellbook::ParseDictionaryError> {
        let dict = spellbook::Dictionary::new(aff, dic)?;
        Ok(HunspellProvider {
            dict,
            max_suggestions,
        })
    }

    pub fn from_files(aff_path: &Path, dic_path: &Path, max_suggestions: usize) -> Result<Self> {
        let read = |path: &Path| {
            fs::read_to_string(path).map_err(|e| Error::DictionaryLoad {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
        };
        let aff = read(aff_path)?;
        let dic = read(dic_path)?;
        Self::new(&aff, &dic, max_suggestions).map_err(|error| Error::InvalidHunspell {
            path: dic_path.to_path_buf(),
            error,
        })
    }
}

impl SpellingProvider for HunspellProvider {
    fn is_known(&self, word: &str) -> bool {
        self.dict.check(word)
    }

    fn suggest(&self, word: &str) -> Vec<String> {
        let mut suggestions = Vec::with_capacity(self.max_suggestions);
        self.dict.suggest(word, &mut suggestions);
        suggestions.truncate(self.max_suggestions);
        suggestions
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionarySource {
    Hunspell { aff: PathBuf, dic: PathBuf },
    WordList(PathBuf),
}

/// Finds the dictionary for `locale` in the first directory that has one.
///
/// Within a directory the lookup order is `<locale>.aff`/`.dic`, then the
/// first regional variant such as `da_DK.aff`/`.dic`, then `<locale>.txt`.
pub fn find_dictionary(locale: &str, dirs: &[PathBuf]) -> Option<DictionarySource> {
    dirs.iter().find_map(|dir| find_in_dir(locale, dir))
}

fn find_in_dir(locale: &str, dir: &Path) -> Option<DictionarySource> {
    let hunspell_pair = |stem: &str| {
        let aff = dir.join(format!("{stem}.aff"));
        let dic = dir.join(format!("{stem}.dic"));
        (aff.is_file() && dic.is_file()).then_some(DictionarySource::Hunspell { aff, dic })
    };

    if let Some(source) = hunspell_pair(locale) {
        return Some(source);
    }

    let prefix = format!("{locale}_");
    let mut regional: Vec<String> = fs::read_dir(dir)
        .ok()?
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter_map(|name| {
            name.strip_suffix(".aff")
                .filter(|stem| stem.starts_with(&prefix))
                .map(str::to_owned)
        })
        .collect();
    regional.sort();
    if let Some(source) = regional.iter().find_map(|stem| hunspell_pair(stem.as_str())) {
        return Some(source);
    }

    let word_list = dir.join(format!("{locale}.txt"));
    word_list
        .is_file()
        .then_some(DictionarySource::WordList(word_list))
}

/// Loads the spelling provider for the configured locale.
pub fn open_provider(config: &Config) -> Result<Box<dyn SpellingProvider>> {
    let source = find_dictionary(&config.locale, &config.dictionary_dirs)
        .ok_or_else(|| Error::DictionaryNotFound(config.locale.clone()))?;

    match source {
        DictionarySource::Hunspell { aff, dic } => {
            log::info!("Using Hunspell dictionary {}", dic.display());
            let provider = HunspellProvider::from_files(&aff, &dic, config.max_suggestions)?;
            Ok(Box::new(provider))
        }
        DictionarySource::WordList(path) => {
            log::info!("Using word list {}", path.display());
            let corrector = SpellCorrector::from_word_list_file(
                &path,
                config.max_edit_distance,
                config.max_suggestions,
            )?;
            Ok(Box::new(corrector))
        }
    }
}
