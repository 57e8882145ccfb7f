use crate::error::{Error, Result};
use crate::provider::SpellingProvider;
use rayon::prelude::*;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

/// Edit distance between `a` and `b` counted in chars, giving up with
/// `max_dist + 1` once the bound cannot be met.
fn bounded_levenshtein(a: &str, b: &str, max_dist: usize) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (shorter, longer) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    if longer.len() - shorter.len() > max_dist {
        return max_dist + 1;
    }

    let n = longer.len();
    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0; n + 1];

    for (i, sc) in shorter.iter().enumerate() {
        let row = i + 1;
        curr[0] = row;

        let col_min = row.saturating_sub(max_dist).max(1);
        let col_max = (row + max_dist).min(n);

        for j in 1..=n {
            if j < col_min || j > col_max {
                curr[j] = max_dist + 1;
                continue;
            }
            let cost = usize::from(*sc != longer[j - 1]);
            curr[j] = (curr[j - 1] + 1).min(prev[j] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[n]
}

/// Every string reachable from `word` by deleting up to `max_del` chars.
fn deletion_variants(word: &str, max_del: usize, keep_original: bool) -> HashSet<String> {
    let mut seen = HashSet::new();
    if keep_original {
        seen.insert(word.to_owned());
    }
    let mut frontier = vec![word.to_owned()];

    for _ in 0..max_del {
        let mut next = Vec::new();
        for variant in &frontier {
            for (idx, ch) in variant.char_indices() {
                let mut shorter = String::with_capacity(variant.len());
                shorter.push_str(&variant[..idx]);
                shorter.push_str(&variant[idx + ch.len_utf8()..]);
                if seen.insert(shorter.clone()) {
                    next.push(shorter);
                }
            }
        }
        if next.is_empty() {
            break;
        }
        frontier = next;
    }
    seen
}

#[derive(Debug, Clone)]
pub struct Suggestion {
    pub word: String,
    pub distance: usize,
}

/// Symmetric-delete corrector over a plain word list.
///
/// Used for locales that ship a `<locale>.txt` word list instead of a
/// Hunspell dictionary.
#[derive(Debug, Clone)]
pub struct SpellCorrector {
    dictionary: HashSet<String>,
    dictionary_del_mappings: HashMap<String, Vec<String>>, // deletion edits -> correct words
    max_edit_distance: usize,
    max_suggestions: usize,
}

impl SpellCorrector {
    pub fn new(dictionary: HashSet<String>, max_edit_distance: usize, max_suggestions: usize) -> Self {
        let dictionary_del_mappings = dictionary
            .par_iter()
            .fold(HashMap::new, |mut mappings: HashMap<String, Vec<String>>, word| {
                for del_word in deletion_variants(word, max_edit_distance, true) {
                    mappings.entry(del_word).or_default().push(word.clone());
                }
                mappings
            })
            .reduce(HashMap::new, |mut merged, part| {
                for (del_word, mut words) in part {
                    merged.entry(del_word).or_default().append(&mut words);
                }
                merged
            });

        SpellCorrector {
            dictionary,
            dictionary_del_mappings,
            max_edit_distance,
            max_suggestions,
        }
    }

    pub fn from_word_list_file(
        file_path: &Path,
        max_edit_distance: usize,
        max_suggestions: usize,
    ) -> Result<Self> {
        let content = fs::read_to_string(file_path).map_err(|e| Error::DictionaryLoad {
            path: file_path.to_path_buf(),
            message: e.to_string(),
        })?;
        let dictionary: HashSet<String> = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_owned)
            .collect();
        log::debug!(
            "Loaded {} words from {}",
            dictionary.len(),
            file_path.display()
        );
        Ok(Self::new(dictionary, max_edit_distance, max_suggestions))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.dictionary.contains(word) || self.dictionary.contains(&word.to_lowercase())
    }

    /// Ranked corrections for `word`: smallest distance first, then longer
    /// words, then alphabetical.
    pub fn suggest_single_word_corrections(&self, word: &str) -> Vec<Suggestion> {
        let mut candidates = HashSet::new();
        for del_word in deletion_variants(word, self.max_edit_distance, true) {
            if let Some(words) = self.dictionary_del_mappings.get(&del_word) {
                candidates.extend(words.iter().cloned());
            }
        }

        let mut suggestions: Vec<Suggestion> = candidates
            .into_iter()
            .filter(|candidate| candidate != word)
            .filter_map(|candidate| {
                let distance = bounded_levenshtein(word, &candidate, self.max_edit_distance);
                (distance <= self.max_edit_distance).then_some(Suggestion {
                    word: candidate,
                    distance,
                })
            })
            .collect();

        suggestions.sort_by(|a, b| {
            a.distance
                .cmp(&b.distance)
                .then_with(|| b.word.chars().count().cmp(&a.word.chars().count()))
                .then_with(|| a.word.cmp(&b.word))
        });

        suggestions.truncate(self.max_suggestions);
        suggestions
    }
}

impl SpellingProvider for SpellCorrector {
    fn is_known(&self, word: &str) -> bool {
        self.contains(word)
    }

    fn suggest(&self, word: &str) -> Vec<String> {
        self.suggest_single_word_corrections(word)
            .into_iter()
            .map(|s| s.word)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corrector(words: &[&str], max_edit_distance: usize) -> SpellCorrector {
        let dict = words.iter().map(|s| s.to_string()).collect();
        SpellCorrector::new(dict, max_edit_distance, 5)
    }

    #[test]
    fn test_bounded_levenshtein() {
        assert_eq!(bounded_levenshtein("kitten", "sitting", 3), 3);
        assert_eq!(bounded_levenshtein("flaw", "lawn", 2), 2);
        assert_eq!(bounded_levenshtein("same", "same", 0), 0);
    }

    #[test]
    fn test_bounded_levenshtein_cutoff() {
        assert!(bounded_levenshtein("kitten", "sitting", 2) > 2);
    }

    #[test]
    fn test_bounded_levenshtein_counts_chars() {
        // one substitution, although "æ" is two bytes
        assert_eq!(bounded_levenshtein("hus", "hæs", 1), 1);
        assert_eq!(bounded_levenshtein("søndag", "sondag", 2), 1);
    }

    #[test]
    fn test_deletion_variants() {
        let variants = deletion_variants("spelling", 2, false);
        assert!(variants.contains("speling"));
        assert!(!variants.contains("spelling"));
        assert!(deletion_variants("abc", 0, false).is_empty());

        let v = deletion_variants("abc", 2, false);
        for s in ["ab", "ac", "bc", "a", "b", "c"] {
            assert!(v.contains(s), "missing variant {}", s);
        }
    }

    #[test]
    fn test_deletion_variants_multibyte() {
        let v = deletion_variants("øl", 1, false);
        assert!(v.contains("ø"));
        assert!(v.contains("l"));
        assert_eq!(v.len(), 2);
    }

    #[test]
    fn test_suggestion_order() {
        let corrector = corrector(&["spelling", "spilling", "selling"], 2);
        let list = corrector.suggest_single_word_corrections("speling");
        assert_eq!(list[0].word, "spelling"); // distance 1
        assert_eq!(list[0].distance, 1);
        assert_eq!(list[1].word, "spilling"); // distance 2, longer
        assert_eq!(list[2].word, "selling"); // distance 2
    }

    #[test]
    fn test_suggestions_are_truncated() {
        let dict = ["cat", "bat", "hat", "mat", "rat", "sat", "vat"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let corrector = SpellCorrector::new(dict, 1, 3);
        assert_eq!(corrector.suggest_single_word_corrections("zat").len(), 3);
    }

    #[test]
    fn test_provider_interface() {
        let corrector = corrector(&["hus", "søndag"], 2);
        assert!(corrector.is_known("hus"));
        assert!(corrector.is_known("Hus"));
        assert!(!corrector.is_known("hys"));
        assert_eq!(corrector.suggest("sondag"), vec!["søndag".to_string()]);
        assert!(corrector.suggest("xyzzyq").is_empty());
    }

    #[test]
    fn test_from_word_list_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, "hus\n\n  bil \n".as_bytes()).unwrap();
        let corrector = SpellCorrector::from_word_list_file(file.path(), 2, 5).unwrap();
        assert!(corrector.is_known("bil"));
        assert!(corrector.is_known("hus"));
        assert!(!corrector.is_known(""));
    }
}
