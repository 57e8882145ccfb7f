use crate::cache::ReplacementCache;
use crate::checker::WordChecker;
use crate::config::Config;
use crate::document;
use crate::error::{Error, Result};
use crate::prompt::Prompter;
use crate::provider;
use crate::resolver::{ResolutionStats, Resolver};
use crate::transform::{Transformed, transform};

#[derive(Debug, Clone)]
pub struct Report {
    /// The corrected dictionary as written to the output file.
    pub json: String,
    pub stats: ResolutionStats,
    pub collisions: Vec<String>,
    pub cached_words: usize,
}

/// Corrects the configured synonym dictionary.
///
/// The replacement cache is saved whatever happens while correcting, and
/// before the corrected dictionary is written. A failed save still writes
/// the corrected dictionary before the save error is returned.
pub fn run(config: &Config, prompter: &mut dyn Prompter) -> Result<Report> {
    let cache_path = config.cache_path();
    let mut cache = ReplacementCache::load_snapshot(&cache_path);

    let corrected = correct(config, &mut cache, prompter);
    let saved = cache.save_snapshot(&cache_path);

    let (transformed, stats) = match (corrected, saved) {
        (Ok(corrected), Ok(())) => corrected,
        (Ok((transformed, _)), Err(source)) => {
            if let Err(e) = write_output(config, &transformed) {
                log::error!("{}", e);
            }
            return Err(Error::CacheSave {
                path: cache_path,
                source,
            });
        }
        (Err(e), Ok(())) => return Err(e),
        (Err(e), Err(source)) => {
            log::error!("{}", e);
            return Err(Error::CacheSave {
                path: cache_path,
                source,
            });
        }
    };

    let json = write_output(config, &transformed)?;
    Ok(Report {
        json,
        stats,
        collisions: transformed.collisions,
        cached_words: cache.len(),
    })
}

/// Writes the corrected dictionary and echoes it to stdout.
fn write_output(config: &Config, transformed: &Transformed) -> Result<String> {
    let json = document::to_json(&transformed.synonyms)?;
    document::write_synonyms(&config.output_path(), &json)?;
    println!("{}", json);
    Ok(json)
}

fn correct(
    config: &Config,
    cache: &mut ReplacementCache,
    prompter: &mut dyn Prompter,
) -> Result<(Transformed, ResolutionStats)> {
    let provider = provider::open_provider(config)?;
    let checker = WordChecker::new(config.locale.as_str(), provider);
    let synonyms = document::read_synonyms(&config.input_path)?;

    let mut resolver = Resolver::new(&checker, cache, prompter, config.separator);
    let transformed = transform(&synonyms, &mut resolver);
    Ok((transformed, resolver.stats()))
}
