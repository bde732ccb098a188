use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;
use serde::Serialize;

use cutfrag_core::models::{DisplayFragment, Fragments};

use crate::output::open_output;
use crate::plan::DigestPlan;

/// One output row: a fragment's bounds, aligned strand text and tags.
#[derive(Debug, Serialize)]
pub struct FragmentRecord {
    pub ordinal: usize,
    #[serde(flatten)]
    pub display: DisplayFragment,
    pub tags: BTreeMap<isize, String>,
}

pub fn fragment_records(
    fragments: &Fragments,
    primary: &str,
    complement: &str,
) -> Result<Vec<FragmentRecord>> {
    fragments
        .iter()
        .enumerate()
        .map(|(ordinal, fragment)| {
            let display = fragment
                .for_display(primary, complement)
                .with_context(|| format!("Failed to render fragment {}", ordinal))?;
            Ok(FragmentRecord {
                ordinal,
                display,
                tags: fragment.tags().clone(),
            })
        })
        .collect()
}

fn or_dot(index: Option<isize>) -> String {
    index.map_or_else(|| ".".to_string(), |i| i.to_string())
}

pub fn write_tsv(out: &mut dyn Write, records: &[FragmentRecord]) -> Result<()> {
    writeln!(
        out,
        "ordinal\tp_left\tp_right\tc_left\tc_right\tprimary\tcomplement\ttags"
    )?;
    for r in records {
        let tags = if r.tags.is_empty() {
            ".".to_string()
        } else {
            r.tags
                .iter()
                .map(|(i, info)| format!("{}:{}", i, info))
                .collect::<Vec<_>>()
                .join(",")
        };
        writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            r.ordinal,
            or_dot(r.display.p_left),
            or_dot(r.display.p_right),
            or_dot(r.display.c_left),
            or_dot(r.display.c_right),
            r.display.primary,
            r.display.complement,
            tags
        )?;
    }
    Ok(())
}

pub fn write_json(out: &mut dyn Write, records: &[FragmentRecord]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, records)?;
    writeln!(out)?;
    Ok(())
}

pub fn run_digest(matches: &ArgMatches) -> Result<()> {
    let plan_path = matches
        .get_one::<String>("plan")
        .context("--plan is required")?;
    let format = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("tsv");
    let output_path = matches.get_one::<String>("output");

    let plan = DigestPlan::from_path(Path::new(plan_path))?;
    let range = plan.sequence_range()?;
    let fragments = range
        .fragments()
        .context("Failed to assemble fragments")?;

    info!("{} fragments from {}", fragments.len(), plan_path);

    let (primary, complement) = plan.display_strands();
    let records = fragment_records(fragments, &primary, &complement)?;

    let mut out = open_output(output_path)?;
    match format {
        "json" => write_json(&mut *out, &records)?,
        _ => write_tsv(&mut *out, &records)?,
    }
    out.flush()?;

    Ok(())
}
