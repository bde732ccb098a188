mod cuts;
mod digest;
mod output;
mod plan;

use anyhow::Result;
use clap::{Arg, ArgAction, Command};

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "cutfrag";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Reduce declared restriction cuts and assemble the fragments they release.")
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .global(true)
                .help(
                    "Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG overrides",
                ),
        )
        .subcommand(digest::cli::create_digest_cli())
        .subcommand(cuts::cli::create_cuts_cli())
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    init_logging(matches.get_count("verbose"));

    match matches.subcommand() {
        //
        // DIGEST
        //
        Some((digest::cli::DIGEST_CMD, matches)) => {
            digest::handlers::run_digest(matches)?;
        }

        //
        // REDUCED CUTS
        //
        Some((cuts::cli::CUTS_CMD, matches)) => {
            cuts::handlers::run_cuts(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_parser_is_valid() {
        build_parser().debug_assert();
    }

    #[rstest]
    fn test_verbosity_counts() {
        let matches = build_parser()
            .try_get_matches_from(["cutfrag", "-vv", "cuts", "--plan", "plan.toml"])
            .unwrap();
        assert_eq!(matches.get_count("verbose"), 2);
    }

    #[rstest]
    fn test_format_is_restricted() {
        let result = build_parser().try_get_matches_from([
            "cutfrag", "digest", "--plan", "plan.toml", "--format", "xml",
        ]);
        assert!(result.is_err());
    }
}
