use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::ArgMatches;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;

use vecdump_core::io::read_sparse_vectors_from_reader;
use vecdump_core::models::{SparseVector, TermDictionary};
use vecdump_core::utils::{get_dynamic_reader_w_stdin, get_dynamic_writer_w_stdout};
use vecdump_dictionary::{DictionaryType, load_dictionary};
use vecdump_format::{vector_to_json_string, write_csv};

use crate::config::DumpConfig;

///
/// Everything `dump` needs after merging flags over the config file.
///
#[derive(Debug, PartialEq, Default)]
pub struct DumpOptions {
    pub csv: bool,
    pub names_as_comments: bool,
    pub dictionary: Option<String>,
    pub dictionary_type: DictionaryType,
    pub output: Option<PathBuf>,
}

impl DumpOptions {
    pub fn resolve(matches: &ArgMatches, config: DumpConfig) -> Result<Self> {
        let dictionary_type = match matches.get_one::<String>("dictionary-type") {
            Some(kind) => DictionaryType::from_str(kind).map_err(anyhow::Error::msg)?,
            None => config.dictionary_type.unwrap_or_default(),
        };

        Ok(DumpOptions {
            csv: matches.get_flag("csv") || config.csv.unwrap_or(false),
            names_as_comments: matches.get_flag("names-as-comments")
                || config.names_as_comments.unwrap_or(false),
            dictionary: matches
                .get_one::<String>("dictionary")
                .cloned()
                .or(config.dictionary),
            dictionary_type,
            output: matches
                .get_one::<String>("output")
                .cloned()
                .or(config.output)
                .map(PathBuf::from),
        })
    }
}

pub fn run_dump(matches: &ArgMatches) -> Result<()> {
    let vectors_path = matches
        .get_one::<String>("vectors")
        .expect("A path to a vector file is required.");

    let config = match matches.get_one::<String>("config") {
        Some(path) => DumpConfig::try_from(Path::new(path))
            .with_context(|| format!("Failed to read config file: {}", path))?,
        None => DumpConfig::default(),
    };
    let options = DumpOptions::resolve(matches, config)?;

    let reader = get_dynamic_reader_w_stdin(vectors_path)?;
    let vectors = read_sparse_vectors_from_reader(reader)
        .with_context(|| format!("Failed to read vectors from {}", vectors_path))?;
    info!("Read {} vectors from {}", vectors.len(), vectors_path);

    // csv never uses labels
    let dictionary = match (&options.dictionary, options.csv) {
        (Some(source), false) => Some(
            load_dictionary(source, options.dictionary_type).with_context(|| {
                format!(
                    "Failed to load {} dictionary: {}",
                    options.dictionary_type, source
                )
            })?,
        ),
        (Some(source), true) => {
            info!("Ignoring dictionary {} for CSV output", source);
            None
        }
        (None, _) => None,
    };

    let progress = match &options.output {
        Some(_) => {
            let bar = ProgressBar::new(vectors.len() as u64);
            bar.set_style(
                ProgressStyle::with_template(
                    "[{elapsed_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} {msg}",
                )?
                .progress_chars("##-"),
            );
            bar
        }
        None => ProgressBar::hidden(),
    };

    let mut writer = get_dynamic_writer_w_stdout(options.output.as_deref())?;
    dump_vectors(
        &vectors,
        &options,
        dictionary.as_ref(),
        &mut writer,
        &progress,
    )?;
    writer.flush()?;
    progress.finish_and_clear();

    if let Some(output) = &options.output {
        info!("Wrote {} vectors to {}", vectors.len(), output.display());
    }

    Ok(())
}

///
/// Render every vector to `writer`, one CSV row or one JSON-like line per vector.
///
pub fn dump_vectors<W: Write>(
    vectors: &[SparseVector],
    options: &DumpOptions,
    dictionary: Option<&TermDictionary>,
    writer: &mut W,
    progress: &ProgressBar,
) -> Result<()> {
    let mut buffer = String::new();

    for vector in vectors {
        buffer.clear();
        if options.csv {
            write_csv(vector, options.names_as_comments, &mut buffer)?;
        } else {
            let json = vector_to_json_string(vector, dictionary).with_context(|| {
                format!(
                    "Failed to render vector {}",
                    vector.name().unwrap_or("<unnamed>")
                )
            })?;
            buffer.push_str(&json);
            buffer.push('\n');
        }

        writer.write_all(buffer.as_bytes())?;
        progress.inc(1);
    }

    Ok(())
}
