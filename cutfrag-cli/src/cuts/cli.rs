use clap::{Arg, Command};

pub const CUTS_CMD: &str = "cuts";

pub fn create_cuts_cli() -> Command {
    Command::new(CUTS_CMD)
        .about("Write the cuts of a plan file that survive incomplete-cut removal.")
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
}
