use crate::document::SynonymMap;
use crate::resolver::Resolver;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformed {
    pub synonyms: SynonymMap,
    /// Corrected base phrases that more than one input entry resolved to.
    pub collisions: Vec<String>,
}

/// Corrects every base phrase and synonym of `synonyms`.
///
/// When two base phrases correct to the same phrase the entry processed
/// last replaces the earlier one, and the collision is reported.
pub fn transform(synonyms: &SynonymMap, resolver: &mut Resolver<'_>) -> Transformed {
    let mut corrected = SynonymMap::new();
    let mut origins: HashMap<String, &str> = HashMap::new();
    let mut collisions = Vec::new();

    for (base, phrases) in synonyms {
        log::info!("Analyze: {} {:?}", base, phrases);

        let new_base = resolver.resolve_phrase(base);
        let new_phrases: Vec<String> = phrases
            .iter()
            .map(|phrase| resolver.resolve_phrase(phrase))
            .collect();

        if let Some(earlier) = origins.insert(new_base.clone(), base) {
            log::warn!(
                "\"{}\" and \"{}\" both correct to \"{}\", keeping the synonyms of \"{}\"",
                earlier,
                base,
                new_base,
                base
            );
            collisions.push(new_base.clone());
        }
        corrected.insert(new_base, new_phrases);
    }

    Transformed {
        synonyms: corrected,
        collisions,
    }
}
