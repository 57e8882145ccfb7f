//! Locale symbol table.
//!
//! Synonym exports often spell language-specific letters as ASCII digraphs
//! (`ae` for `æ`). Before a word is spell-checked these digraphs are folded
//! back into the letter the locale's dictionary knows about.

type Digraphs = &'static [(&'static str, &'static str)];

const DANISH_NORWEGIAN: Digraphs = &[("ae", "æ"), ("oe", "ø")];
const FINNISH: Digraphs = &[("ae", "æ"), ("oe", "ø"), ("th", "þ")];
const DUTCH: Digraphs = &[("ij", "ĳ")];

/// Digraph substitutions for `locale`, in the order they are applied.
pub fn digraphs(locale: &str) -> Digraphs {
    match locale {
        "da" | "no" => DANISH_NORWEGIAN,
        "fi" => FINNISH,
        "nl" => DUTCH,
        _ => &[],
    }
}

/// Replaces every configured digraph of `locale` in `token`.
///
/// Substitutions run in table order, each over the output of the previous
/// one. Unknown locales leave the token untouched.
pub fn normalize(locale: &str, token: &str) -> String {
    digraphs(locale)
        .iter()
        .fold(token.to_owned(), |word, (digraph, letter)| {
            word.replace(digraph, letter)
        })
}
