use clap::{Arg, ArgAction, Command, arg};

pub const DUMP_CMD: &str = "dump";

pub fn create_dump_cli() -> Command {
    Command::new(DUMP_CMD)
        .author("Databio")
        .about("Render sparse vectors as CSV or JSON-like text, optionally labelled with a term dictionary.")
        .arg(
            Arg::new("vectors")
                .required(true)
                .help("Sparse vector file (plain or .gz), or '-' for stdin"),
        )
        .arg(
            arg!(--csv)
                .help("Write dense CSV rows instead of JSON-like text")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("names-as-comments")
                .long("names-as-comments")
                .help("In CSV mode, write each vector name as a '#<name>' line")
                .action(ArgAction::SetTrue),
        )
        .arg(
            arg!(--dictionary <DICTIONARY>)
                .required(false)
                .help("Dictionary used to label JSON-like output: a file path, or a glob for sharded dictionaries"),
        )
        .arg(
            Arg::new("dictionary-type")
                .long("dictionary-type")
                .required(false)
                .value_parser(["text", "sharded"])
                .help("How to read --dictionary (default: text)"),
        )
        .arg(
            arg!(--output <OUTPUT>)
                .short('o')
                .required(false)
                .help("Output path, gzip'd if it ends in .gz (default: stdout)"),
        )
        .arg(
            arg!(--config <CONFIG>)
                .required(false)
                .help("TOML file with defaults for the options above"),
        )
}
