//! Test doubles for the provider and operator seams.

use crate::prompt::{Prompter, Selection};
use crate::provider::SpellingProvider;
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet, VecDeque};
use std::rc::Rc;

/// In-memory dictionary that counts how often it is consulted.
pub struct FakeProvider {
    known: HashSet<String>,
    suggestions: HashMap<String, Vec<String>>,
    calls: Rc<Cell<usize>>,
}

impl FakeProvider {
    pub fn new(known: &[&str]) -> Self {
        FakeProvider {
            known: known.iter().map(|w| w.to_string()).collect(),
            suggestions: HashMap::new(),
            calls: Rc::new(Cell::new(0)),
        }
    }

    pub fn with_suggestions(mut self, word: &str, suggestions: &[&str]) -> Self {
        self.suggestions.insert(
            word.to_string(),
            suggestions.iter().map(|s| s.to_string()).collect(),
        );
        self
    }

    /// Number of `is_known` lookups, shared with the provider once boxed.
    pub fn calls(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.calls)
    }
}

impl SpellingProvider for FakeProvider {
    fn is_known(&self, word: &str) -> bool {
        self.calls.set(self.calls.get() + 1);
        self.known.contains(word)
    }

    fn suggest(&self, word: &str) -> Vec<String> {
        self.suggestions.get(word).cloned().unwrap_or_default()
    }
}

/// Answers prompts from a fixed script and records what it was asked.
pub struct ScriptedPrompter {
    answers: VecDeque<Selection>,
    asked: Rc<RefCell<Vec<String>>>,
}

impl ScriptedPrompter {
    pub fn new(answers: &[Selection]) -> Self {
        ScriptedPrompter {
            answers: answers.iter().copied().collect(),
            asked: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn asked(&self) -> Rc<RefCell<Vec<String>>> {
        Rc::clone(&self.asked)
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&mut self, word: &str, _suggestions: &[String]) -> Selection {
        self.asked.borrow_mut().push(word.to_string());
        self.answers.pop_front().unwrap_or(Selection::Skip)
    }
}
