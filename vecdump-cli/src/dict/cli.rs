use clap::{Arg, ArgAction, Command, arg};

use vecdump_dictionary::consts::{DEFAULT_RECORDS_PER_SHARD, DEFAULT_SHARD_PREFIX};

pub const DICT_CMD: &str = "dict";
pub const DICT_INSPECT: &str = "inspect";
pub const DICT_CONVERT: &str = "convert";

fn dictionary_type_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .required(false)
        .value_parser(["text", "sharded"])
        .default_value("text")
        .help(help)
}

pub fn create_dict_cli() -> Command {
    Command::new(DICT_CMD)
        .author("Databio")
        .about("Inspect and convert term dictionaries")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new(DICT_INSPECT)
                .about("Load a dictionary and report how many of its slots are assigned")
                .arg(
                    Arg::new("source")
                        .required(true)
                        .help("Dictionary file, or a glob for sharded dictionaries"),
                )
                .arg(dictionary_type_arg(
                    "dictionary-type",
                    "How to read the source",
                ))
                .arg(
                    arg!(--terms)
                        .help("Also print every assigned 'index<TAB>term' pair")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new(DICT_CONVERT)
                .about("Convert a dictionary between the flat text and sharded forms")
                .arg(
                    Arg::new("source")
                        .required(true)
                        .help("Dictionary file, or a glob for sharded dictionaries"),
                )
                .arg(
                    Arg::new("output")
                        .required(true)
                        .help("Output file for --to text, output directory for --to sharded"),
                )
                .arg(dictionary_type_arg("from", "Form of the source dictionary"))
                .arg(
                    Arg::new("to")
                        .long("to")
                        .required(false)
                        .value_parser(["text", "sharded"])
                        .default_value("sharded")
                        .help("Form of the output dictionary"),
                )
                .arg(
                    arg!(--prefix <PREFIX>)
                        .required(false)
                        .default_value(DEFAULT_SHARD_PREFIX)
                        .help("File name prefix for written shards"),
                )
                .arg(
                    Arg::new("records-per-shard")
                        .long("records-per-shard")
                        .required(false)
                        .value_parser(clap::value_parser!(usize))
                        .help(format!(
                            "Maximum number of records per shard (default: {})",
                            DEFAULT_RECORDS_PER_SHARD
                        )),
                ),
        )
}
