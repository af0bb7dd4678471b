mod config;
mod dict;
mod dump;

use anyhow::Result;
use clap::Command;
use tracing_subscriber::EnvFilter;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "vecdump";
    pub const DEFAULT_LOG_DIRECTIVE: &str = "vecdump=info";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .author("Databio")
        .about("Render sparse feature vectors as human readable text and manage the term dictionaries that label them.")
        .subcommand_required(true)
        .subcommand(dump::cli::create_dump_cli())
        .subcommand(dict::cli::create_dict_cli())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(consts::DEFAULT_LOG_DIRECTIVE.parse()?),
        )
        .init();

    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // DUMP
        //
        Some((dump::cli::DUMP_CMD, matches)) => {
            dump::handlers::run_dump(matches)?;
        }

        //
        // DICTIONARY UTILS
        //
        Some((dict::cli::DICT_CMD, matches)) => match matches.subcommand() {
            Some((dict::cli::DICT_INSPECT, matches)) => {
                dict::handlers::run_inspect(matches)?;
            }
            Some((dict::cli::DICT_CONVERT, matches)) => {
                dict::handlers::run_convert(matches)?;
            }
            _ => unreachable!("Dict subcommand not found"),
        },

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parser_is_well_formed() {
        build_parser().debug_assert();
    }
}
