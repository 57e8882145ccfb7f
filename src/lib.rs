//! Spell-checks Solr synonym dictionaries one word at a time, asking the
//! operator to settle misspellings and remembering every decision between
//! runs.

pub mod cache;
pub mod checker;
pub mod config;
pub mod document;
pub mod error;
pub mod prompt;
pub mod provider;
pub mod resolver;
pub mod run;
pub mod spellcheck;
pub mod symbols;
pub mod transform;

#[cfg(test)]
mod testing;

pub use cache::ReplacementCache;
pub use checker::{CheckResult, WordChecker};
pub use config::Config;
pub use error::{Error, Result};
pub use prompt::{ConsolePrompter, Prompter, Selection};
pub use provider::{HunspellProvider, SpellingProvider};
pub use resolver::Resolver;
pub use spellcheck::SpellCorrector;
