use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

/// Open `path` for writing, or stdout when no path is given.
pub fn open_output(path: Option<&String>) -> Result<Box<dyn Write>> {
    match path {
        Some(p) => {
            let file = File::create(Path::new(p))
                .with_context(|| format!("Failed to create output file: {}", p))?;
            info!("Writing output to {}", p);
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}

/// Comma-joined indices, empty when there are none.
pub fn join_indices(indices: &[isize]) -> String {
    indices
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
