use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use synonym_spellcheck::{Config, ConsolePrompter, run::run};

const USAGE: &str = "Usage: synonym-spellcheck input_file locale";

#[derive(Parser, Debug)]
#[command()]
struct Args {
    #[arg()]
    input_file: PathBuf,
    #[arg()]
    locale: String,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(_) => {
            println!("{}", USAGE);
            return ExitCode::SUCCESS;
        }
    };

    let config = Config::new(args.input_file, args.locale);
    let mut prompter = ConsolePrompter::stdio();

    match run(&config, &mut prompter) {
        Ok(report) => {
            let stats = report.stats;
            log::info!(
                "Done: {} accepted, {} from cache, {} auto-corrected, {} prompted ({} skipped)",
                stats.accepted,
                stats.cache_hits,
                stats.auto_corrected,
                stats.prompted,
                stats.skipped
            );
            if !report.collisions.is_empty() {
                log::warn!(
                    "{} base phrases were overwritten by later entries",
                    report.collisions.len()
                );
            }
            log::info!(
                "Wrote {} and {} ({} cached words)",
                config.output_path().display(),
                config.cache_path().display(),
                report.cached_words
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
