use crate::provider::SpellingProvider;
use crate::symbols;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub is_correct: bool,
    pub suggestions: Vec<String>,
}

impl CheckResult {
    fn correct() -> Self {
        CheckResult {
            is_correct: true,
            suggestions: Vec::new(),
        }
    }
}

/// Checks single words against a locale's dictionary.
pub struct WordChecker {
    locale: String,
    provider: Box<dyn SpellingProvider>,
}

impl WordChecker {
    pub fn new(locale: impl Into<String>, provider: Box<dyn SpellingProvider>) -> Self {
        WordChecker {
            locale: locale.into(),
            provider,
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Integers and empty tokens are always correct. Otherwise the token is
    /// normalized with the locale's digraphs; a changed spelling becomes the
    /// first suggestion, followed by the provider's own suggestions when it
    /// does not know the normalized word.
    pub fn check(&self, token: &str) -> CheckResult {
        if token.is_empty() || token.parse::<i64>().is_ok() {
            return CheckResult::correct();
        }

        let normalized = symbols::normalize(&self.locale, token);
        let mut result = CheckResult::correct();

        if normalized != token {
            result.is_correct = false;
            result.suggestions.push(normalized.clone());
        }

        if !self.provider.is_known(&normalized) {
            result.is_correct = false;
            result.suggestions.extend(self.provider.suggest(&normalized));
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeProvider;

    fn checker(locale: &str, provider: FakeProvider) -> WordChecker {
        WordChecker::new(locale, Box::new(provider))
    }

    #[test]
    fn test_integers_are_always_correct() {
        let provider = FakeProvider::new(&[]);
        let calls = provider.calls();
        let checker = checker("da", provider);
        for token in ["42", "-7", "+3", "0", "9223372036854775807"] {
            assert_eq!(checker.check(token), CheckResult::correct());
        }
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_overflowing_number_is_checked() {
        let provider = FakeProvider::new(&[]);
        let calls = provider.calls();
        let checker = checker("da", provider);
        assert!(!checker.check("99999999999999999999").is_correct);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_known_word() {
        let checker = checker("da", FakeProvider::new(&["hus"]));
        assert_eq!(checker.check("hus"), CheckResult::correct());
    }

    #[test]
    fn test_empty_token() {
        let checker = checker("da", FakeProvider::new(&[]));
        assert!(checker.check("").is_correct);
    }

    #[test]
    fn test_normalized_word_is_first_suggestion() {
        let checker = checker("da", FakeProvider::new(&["æ"]));
        let result = checker.check("ae");
        assert!(!result.is_correct);
        assert_eq!(result.suggestions, vec!["æ".to_string()]);
    }

    #[test]
    fn test_normalized_and_provider_suggestions() {
        let provider = FakeProvider::new(&[]).with_suggestions("høs", &["hus", "hos"]);
        let checker = checker("da", provider);
        let result = checker.check("hoes");
        assert!(!result.is_correct);
        assert_eq!(result.suggestions, vec!["høs", "hus", "hos"]);
    }

    #[test]
    fn test_unknown_word_without_suggestions() {
        let checker = checker("en", FakeProvider::new(&[]));
        let result = checker.check("qwxz");
        assert!(!result.is_correct);
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn test_locale_without_digraphs() {
        let checker = checker("en", FakeProvider::new(&["aether"]));
        assert!(checker.check("aether").is_correct);
        assert_eq!(checker.locale(), "en");
    }
}
