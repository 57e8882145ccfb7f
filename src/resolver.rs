use crate::cache::ReplacementCache;
use crate::checker::WordChecker;
use crate::prompt::{Prompter, Selection};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolutionStats {
    pub cache_hits: usize,
    pub accepted: usize,
    pub auto_corrected: usize,
    pub prompted: usize,
    pub skipped: usize,
}

/// Decides the replacement for each word, asking the operator when the
/// dictionary offers anything other than a single suggestion.
///
/// Every decision made for a misspelled word is recorded in the cache, so a
/// word is asked about at most once. Correct words are not cached.
pub struct Resolver<'a> {
    checker: &'a WordChecker,
    cache: &'a mut ReplacementCache,
    prompter: &'a mut dyn Prompter,
    separator: char,
    stats: ResolutionStats,
}

impl<'a> Resolver<'a> {
    pub fn new(
        checker: &'a WordChecker,
        cache: &'a mut ReplacementCache,
        prompter: &'a mut dyn Prompter,
        separator: char,
    ) -> Self {
        Resolver {
            checker,
            cache,
            prompter,
            separator,
            stats: ResolutionStats::default(),
        }
    }

    pub fn stats(&self) -> ResolutionStats {
        self.stats
    }

    pub fn resolve(&mut self, token: &str) -> String {
        if let Some(replacement) = self.cache.lookup(token) {
            self.stats.cache_hits += 1;
            return replacement.to_owned();
        }

        let check = self.checker.check(token);
        if check.is_correct {
            self.stats.accepted += 1;
            return token.to_owned();
        }

        let replacement = match check.suggestions.as_slice() {
            [only] => {
                log::info!("Replacing \"{}\" with \"{}\"", token, only);
                self.stats.auto_corrected += 1;
                only.clone()
            }
            suggestions => {
                self.stats.prompted += 1;
                match self.prompter.select(token, suggestions) {
                    Selection::Skip | Selection::Choice(0) => {
                        self.stats.skipped += 1;
                        token.to_owned()
                    }
                    Selection::Choice(n) if (1..=suggestions.len()).contains(&n) => {
                        suggestions[n - 1].clone()
                    }
                    Selection::Choice(n) => {
                        log::warn!(
                            "Selection {} is out of range for \"{}\", keeping the word",
                            n,
                            token
                        );
                        self.stats.skipped += 1;
                        token.to_owned()
                    }
                }
            }
        };

        self.cache.record(token, &replacement);
        replacement
    }

    /// Resolves each word of a separator-joined phrase, left to right.
    pub fn resolve_phrase(&mut self, phrase: &str) -> String {
        let mut joined = String::with_capacity(phrase.len());
        for (i, token) in phrase.split(self.separator).enumerate() {
            if i > 0 {
                joined.push(self.separator);
            }
            joined.push_str(&self.resolve(token));
        }
        joined
    }
}
