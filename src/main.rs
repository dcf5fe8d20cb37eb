//! Translate a dataset record file and print the client record.
//!
//! Usage:
//!   cargo run -- data/package.json                 # show flow, default language
//!   cargo run -- data/package.json --lang nl-BE    # show flow, Dutch
//!   cargo run -- data/search.json --search --lang nl
//!
//! Optional environment variables:
//! - TERM_TRANSLATIONS_FILE (JSON array of term translations)
//! - SUPPORTED_LANGUAGES (defaults to the enabled registry languages)
//! - LOCALE_DEFAULT (defaults to en)

use anyhow::{bail, Context, Result};
use dataset_translation::config::Config;
use dataset_translation::{InMemoryTermLookup, MetadataTranslator};
use serde_json::Value;
use tracing::info;

#[derive(Debug, PartialEq, Eq)]
struct CliArgs {
    record_file: String,
    lang: Option<String>,
    search: bool,
}

impl CliArgs {
    fn parse(args: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut record_file = None;
        let mut lang = None;
        let mut search = false;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--search" => search = true,
                "--lang" => lang = Some(args.next().context("--lang requires a value")?),
                flag if flag.starts_with("--") => bail!("Unknown option: {}", flag),
                _ if record_file.is_none() => record_file = Some(arg),
                _ => bail!("Unexpected argument: {}", arg),
            }
        }

        Ok(Self {
            record_file: record_file
                .context("Usage: translate-record <record.json> [--lang <hint>] [--search]")?,
            lang,
            search,
        })
    }
}

fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout only carries the translated JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("dataset_translation=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse(std::env::args().skip(1))?;
    let config = Config::from_env()?;

    let lookup = match &config.term_translations_file {
        Some(path) => InMemoryTermLookup::from_json_file(path)?,
        None => {
            info!("TERM_TRANSLATIONS_FILE not set, labels will show the raw terms");
            InMemoryTermLookup::new()
        }
    };

    let raw = std::fs::read_to_string(&args.record_file)
        .with_context(|| format!("Failed to read {}", args.record_file))?;
    let record: Value = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse {} as JSON", args.record_file))?;

    let translator = MetadataTranslator::new(lookup, config.language_settings());
    let output = if args.search {
        info!("Translating search result from {}", args.record_file);
        translator.translate_search_result(record, args.lang.as_deref())?
    } else {
        info!("Translating records from {}", args.record_file);
        translator.translate_records(record, args.lang.as_deref())?
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
