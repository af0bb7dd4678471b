use std::io::{self, Write};
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use vecdump_core::models::TermDictionary;
use vecdump_dictionary::consts::DEFAULT_RECORDS_PER_SHARD;
use vecdump_dictionary::{
    DictionaryType, load_dictionary, write_sharded_dictionary, write_term_dictionary,
};

fn get_dictionary_type(matches: &ArgMatches, id: &str) -> Result<DictionaryType> {
    let kind = matches
        .get_one::<String>(id)
        .expect("Dictionary type has a default value.");
    DictionaryType::from_str(kind).map_err(anyhow::Error::msg)
}

fn load(source: &str, dictionary_type: DictionaryType) -> Result<TermDictionary> {
    load_dictionary(source, dictionary_type)
        .with_context(|| format!("Failed to load {} dictionary: {}", dictionary_type, source))
}

pub fn run_inspect(matches: &ArgMatches) -> Result<()> {
    let source = matches
        .get_one::<String>("source")
        .expect("A dictionary source is required.");
    let dictionary_type = get_dictionary_type(matches, "dictionary-type")?;

    let dictionary = load(source, dictionary_type)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_summary(&dictionary, matches.get_flag("terms"), &mut out)?;
    out.flush()?;

    Ok(())
}

///
/// Write entry, assigned and unset counts, optionally followed by every assigned term.
///
pub fn write_summary<W: Write>(dictionary: &TermDictionary, terms: bool, out: &mut W) -> Result<()> {
    let assigned = dictionary.assigned();
    writeln!(out, "entries\t{}", dictionary.len())?;
    writeln!(out, "assigned\t{}", assigned)?;
    writeln!(out, "unset\t{}", dictionary.len() - assigned)?;

    if terms {
        for (index, term) in dictionary.iter() {
            writeln!(out, "{}\t{}", index, term)?;
        }
    }

    Ok(())
}

pub fn run_convert(matches: &ArgMatches) -> Result<()> {
    let source = matches
        .get_one::<String>("source")
        .expect("A dictionary source is required.");
    let output = matches
        .get_one::<String>("output")
        .expect("An output path is required.");
    let from = get_dictionary_type(matches, "from")?;
    let to = get_dictionary_type(matches, "to")?;

    let prefix = matches
        .get_one::<String>("prefix")
        .expect("Shard prefix has a default value.");
    let records_per_shard = matches
        .get_one::<usize>("records-per-shard")
        .copied()
        .unwrap_or(DEFAULT_RECORDS_PER_SHARD);

    let dictionary = load(source, from)?;

    match to {
        DictionaryType::Text => {
            write_term_dictionary(&dictionary, output)
                .with_context(|| format!("Failed to write dictionary to {}", output))?;
            info!("Wrote {} entries to {}", dictionary.assigned(), output);
        }
        DictionaryType::Sharded => {
            let paths =
                write_sharded_dictionary(&dictionary, Path::new(output), prefix, records_per_shard)
                    .with_context(|| format!("Failed to write dictionary shards to {}", output))?;
            info!(
                "Wrote {} entries to {} shard(s) in {}",
                dictionary.assigned(),
                paths.len(),
                output
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    use crate::dict::cli::{DICT_CONVERT, create_dict_cli};

    #[rstest]
    fn test_write_summary() {
        let dictionary = TermDictionary::from(vec![Some("apple".to_string()), None]);

        let mut out = Vec::new();
        write_summary(&dictionary, true, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "entries\t2\nassigned\t1\nunset\t1\n0\tapple\n"
        );
    }

    #[rstest]
    fn test_convert_text_to_shards_and_back() {
        let tempdir = tempfile::tempdir().unwrap();
        let flat = tempdir.path().join("dictionary.txt");
        std::fs::write(&flat, "3\napple\t1\t0\nbanana\t1\t1\ncherry\t1\t2\n").unwrap();
        let shard_dir = tempdir.path().join("shards");

        let matches = create_dict_cli()
            .try_get_matches_from([
                "dict",
                DICT_CONVERT,
                flat.to_str().unwrap(),
                shard_dir.to_str().unwrap(),
                "--records-per-shard",
                "2",
            ])
            .unwrap();
        let (_, convert_matches) = matches.subcommand().unwrap();
        run_convert(convert_matches).unwrap();

        let pattern = format!("{}/dictionary.file-*", shard_dir.display());
        let sharded = load(&pattern, DictionaryType::Sharded).unwrap();
        let flat = load(flat.to_str().unwrap(), DictionaryType::Text).unwrap();

        assert_eq!(sharded, flat);
    }
}
