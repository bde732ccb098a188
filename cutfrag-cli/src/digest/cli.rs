use clap::{Arg, Command};

pub const DIGEST_CMD: &str = "digest";

pub fn create_digest_cli() -> Command {
    Command::new(DIGEST_CMD)
        .about("Digest a molecule according to a plan file and write one record per fragment.")
        .arg(
            Arg::new("plan")
                .long("plan")
                .required(true)
                .help("Digest plan (.toml, .json, .yaml or .yml)"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .required(false)
                .help("Output file (default: stdout)"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .required(false)
                .default_value("tsv")
                .value_parser(["tsv", "json"])
                .help("Output format"),
        )
}
