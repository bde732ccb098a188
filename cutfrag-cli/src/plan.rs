//! Digest plan files.
//!
//! A plan names the molecule (length, start index, topology and optionally
//! its two strands) and the cuts to make on it, either directly or as enzyme
//! recognition sites. Plans are read from TOML, JSON or YAML depending on the
//! file extension.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use log::{debug, info};
use serde::Deserialize;

use cutfrag_core::models::{CutLocationPair, CutRange};
use cutfrag_core::{SequenceRange, Topology};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DigestPlan {
    pub length: usize,
    #[serde(default)]
    pub left: usize,
    #[serde(default)]
    pub topology: Topology,
    pub primary: Option<String>,
    pub complement: Option<String>,
    #[serde(default)]
    pub cuts: Vec<CutRange>,
    #[serde(default)]
    pub enzymes: Vec<EnzymeSites>,
    #[serde(default)]
    pub tags: Vec<TagEntry>,
}

/// An enzyme, where it cuts within its site, and where its sites start.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnzymeSites {
    pub name: String,
    pub cut: CutLocationPair,
    #[serde(default)]
    pub sites: Vec<isize>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TagEntry {
    pub index: isize,
    pub info: String,
}

impl DigestPlan {
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read plan file: {}", path.display()))?;

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        let plan: DigestPlan = match extension.as_deref() {
            Some("toml") => toml::from_str(&raw)
                .with_context(|| format!("Failed to parse TOML plan: {}", path.display()))?,
            Some("json") => serde_json::from_str(&raw)
                .with_context(|| format!("Failed to parse JSON plan: {}", path.display()))?,
            Some("yaml") | Some("yml") => serde_yaml::from_str(&raw)
                .with_context(|| format!("Failed to parse YAML plan: {}", path.display()))?,
            _ => bail!(
                "Unsupported plan file extension (expected .toml, .json, .yaml or .yml): {}",
                path.display()
            ),
        };

        plan.validate()
            .with_context(|| format!("Invalid plan file: {}", path.display()))?;
        debug!(
            "loaded plan with {} cuts, {} enzymes and {} tags",
            plan.cuts.len(),
            plan.enzymes.len(),
            plan.tags.len()
        );
        Ok(plan)
    }

    pub fn validate(&self) -> Result<()> {
        if self.length == 0 {
            bail!("length must be greater than 0");
        }
        match (&self.primary, &self.complement) {
            (Some(p), Some(c)) => {
                if p.chars().count() != self.length {
                    bail!("primary has {} bases, expected {}", p.chars().count(), self.length);
                }
                if c.chars().count() != self.length {
                    bail!("complement has {} bases, expected {}", c.chars().count(), self.length);
                }
            }
            (None, None) => {}
            _ => bail!("primary and complement must be given together"),
        }
        Ok(())
    }

    pub fn right(&self) -> isize {
        (self.left + self.length) as isize - 1
    }

    ///
    /// Build the region described by the plan with every cut and tag applied.
    ///
    /// Each enzyme site tags the index of its primary cut with the enzyme
    /// name. The first enzyme to claim an index keeps it; explicit tags are
    /// applied last and replace enzyme tags.
    ///
    pub fn sequence_range(&self) -> Result<SequenceRange> {
        let left = self.left as isize;
        let right = self.right();
        let mut range = SequenceRange::with_topology(
            Some(left),
            Some(right),
            Some(left),
            Some(right),
            self.topology,
        )?;

        range
            .add_cut_ranges(self.cuts.iter().cloned())
            .context("Cut outside the plan's extent")?;

        let mut enzyme_tags: BTreeMap<isize, String> = BTreeMap::new();
        for enzyme in &self.enzymes {
            for &site in &enzyme.sites {
                range.add_cut(enzyme.cut.to_cut_range(site)).with_context(|| {
                    format!("{} site at {} cuts outside the plan's extent", enzyme.name, site)
                })?;
                if let Some(p) = enzyme.cut.primary {
                    enzyme_tags
                        .entry(site + p)
                        .or_insert_with(|| enzyme.name.clone());
                }
            }
            info!("{}: {} sites", enzyme.name, enzyme.sites.len());
        }

        for (index, name) in enzyme_tags {
            range.add_tag(index, name)?;
        }
        for tag in &self.tags {
            range
                .add_tag(tag.index, tag.info.clone())
                .with_context(|| format!("Tag at {} is outside the plan's extent", tag.index))?;
        }

        Ok(range)
    }

    ///
    /// The two strands to render fragments with, indexed by absolute position.
    ///
    /// Positions before `left` are blank. Without strands in the plan a digit
    /// ruler is used for both.
    ///
    pub fn display_strands(&self) -> (String, String) {
        let pad = " ".repeat(self.left);
        match (&self.primary, &self.complement) {
            (Some(p), Some(c)) => (format!("{pad}{p}"), format!("{pad}{c}")),
            _ => {
                let ruler: String = (self.left..self.left + self.length)
                    .map(|i| char::from(b'0' + (i % 10) as u8))
                    .collect();
                (format!("{pad}{ruler}"), format!("{pad}{ruler}"))
            }
        }
    }
}
