use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use cutfrag_core::CalculatedCuts;

use crate::output::{join_indices, open_output};
use crate::plan::DigestPlan;

pub fn write_cuts(out: &mut dyn Write, cuts: &CalculatedCuts) -> Result<()> {
    writeln!(out, "vc_primary\t{}", join_indices(cuts.vc_primary()))?;
    writeln!(out, "vc_complement\t{}", join_indices(cuts.vc_complement()))?;
    writeln!(
        out,
        "hc_between_strands\t{}",
        join_indices(cuts.hc_between_strands())
    )?;
    Ok(())
}

pub fn run_cuts(matches: &ArgMatches) -> Result<()> {
    let plan_path = matches
        .get_one::<String>("plan")
        .context("--plan is required")?;
    let output_path = matches.get_one::<String>("output");

    let plan = DigestPlan::from_path(Path::new(plan_path))?;
    let cuts = plan
        .sequence_range()?
        .calculated_cuts()
        .context("Failed to reduce cuts")?;

    info!(
        "{} primary, {} complement and {} inter-strand cuts survive",
        cuts.vc_primary().len(),
        cuts.vc_complement().len(),
        cuts.hc_between_strands().len()
    );

    let mut out = open_output(output_path)?;
    write_cuts(&mut *out, &cuts)?;
    out.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cuts::cli::create_cuts_cli;

    use pretty_assertions::assert_eq;
    use rstest::*;
    use std::fs;
    use tempfile::tempdir;

    #[fixture]
    fn path_to_plans() -> &'static str {
        concat!(env!("CARGO_MANIFEST_DIR"), "/../tests/data/plans")
    }

    fn cuts(plan: &str) -> String {
        let dir = tempdir().unwrap();
        let output = dir.path().join("cuts.tsv");
        let matches = create_cuts_cli()
            .try_get_matches_from([
                "cuts",
                "--plan",
                plan,
                "--output",
                output.to_str().unwrap(),
            ])
            .unwrap();
        run_cuts(&matches).unwrap();
        fs::read_to_string(output).unwrap()
    }

    #[rstest]
    #[case("sticky_nick.toml", "vc_primary\t0,2\nvc_complement\t3\nhc_between_strands\t1,2,3\n")]
    #[case("unanchored.json", "vc_primary\t\nvc_complement\t\nhc_between_strands\t\n")]
    #[case("plasmid.yaml", "vc_primary\t3\nvc_complement\t3\nhc_between_strands\t\n")]
    fn test_cuts(path_to_plans: &str, #[case] file: &str, #[case] expected: &str) {
        assert_eq!(cuts(&format!("{}/{}", path_to_plans, file)), expected);
    }

    #[rstest]
    fn test_offset_plan_reports_absolute_indices() {
        let dir = tempdir().unwrap();
        let plan = dir.path().join("offset.toml");
        fs::write(
            &plan,
            "length = 6\nleft = 100\n\n[[cuts]]\nkind = \"vertical\"\n\
             p_cut_right = 103\nc_cut_right = 103\n",
        )
        .unwrap();

        assert_eq!(
            cuts(plan.to_str().unwrap()),
            "vc_primary\t103\nvc_complement\t103\nhc_between_strands\t\n"
        );
    }
}
