//! File-level conversion: one DXF file, or every DXF file in a directory.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use shimwave_core::{convert, ConversionOptions, Waveform, WaveformResult};
use shimwave_dxf::extract_file;
use tracing::{debug, info, warn};

/// Converts one DXF file.
///
/// Forced single-line mode, an unreadable file and a drawing without
/// geometry all yield the flat waveform. Only invalid `options` fail.
pub fn process_dxf_file(
    path: &Path,
    force_single_line: bool,
    options: &ConversionOptions,
) -> WaveformResult<Waveform> {
    if force_single_line {
        debug!("Single line forced for {}", path.display());
        return Ok(convert(Vec::new(), options)?.waveform);
    }

    let geometry = match extract_file(path) {
        Ok(geometry) => geometry,
        Err(e) => {
            warn!("{}; using single line", e);
            return Ok(convert(Vec::new(), options)?.waveform);
        }
    };

    if geometry.is_empty() {
        if !options.quiet {
            info!("No geometry found in {}, creating default single line", path.display());
        }
        return Ok(convert(Vec::new(), options)?.waveform);
    }

    if !options.quiet {
        info!(
            "Found {} lines, {} arcs, and {} ellipses in {}",
            geometry.lines.len(),
            geometry.arcs.len(),
            geometry.ellipses.len(),
            path.display()
        );
    }

    let conversion = convert(geometry.into_segments(), options)?;
    if conversion.is_fallback() && !options.quiet {
        info!("Could not organize segments into a path, creating default single line");
    }
    Ok(conversion.waveform)
}

/// One converted file of a batch.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchEntry {
    /// File stem, used for the output name.
    pub name: String,
    pub source: PathBuf,
    pub waveform: Waveform,
}

/// `*.dxf` files directly inside `dir`, sorted by name.
pub fn find_dxf_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        bail!("Batch directory '{}' not found", dir.display());
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory {}", dir.display()))?
    {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "dxf") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Converts every DXF file in `dir` in parallel.
///
/// Entries come back in file-name order. A missing directory or one without
/// DXF files is an error.
pub fn process_directory(
    dir: &Path,
    force_single_line: bool,
    options: &ConversionOptions,
) -> Result<Vec<BatchEntry>> {
    let files = find_dxf_files(dir)?;
    if files.is_empty() {
        bail!("No DXF files found in {}", dir.display());
    }
    info!("Found {} DXF files", files.len());

    files
        .par_iter()
        .map(|path| -> Result<BatchEntry> {
            debug!("Processing: {}", path.display());
            let waveform = process_dxf_file(path, force_single_line, options)
                .with_context(|| format!("Failed to convert {}", path.display()))?;
            let name = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default();
            Ok(BatchEntry {
                name,
                source: path.clone(),
                waveform,
            })
        })
        .collect()
}

/// Stacks waveforms as columns: `result[sample][file]`.
///
/// Shorter waveforms are padded with their last value, or 0 when empty.
pub fn concatenate(waveforms: &[&Waveform]) -> Vec<Vec<f64>> {
    let rows = waveforms.iter().map(|w| w.len()).max().unwrap_or(0);
    (0..rows)
        .map(|i| {
            waveforms
                .iter()
                .map(|w| {
                    w.samples()
                        .get(i)
                        .or_else(|| w.samples().last())
                        .copied()
                        .unwrap_or(0.0)
                })
                .collect()
        })
        .collect()
}

/// Per-file line of the batch summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileSummary {
    pub name: String,
    pub samples: usize,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl From<&BatchEntry> for FileSummary {
    fn from(entry: &BatchEntry) -> Self {
        Self {
            name: entry.name.clone(),
            samples: entry.waveform.len(),
            min: entry.waveform.min(),
            max: entry.waveform.max(),
        }
    }
}

/// Contents of `batch_summary.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub generated_at: DateTime<Utc>,
    pub version: String,
    pub build_date: String,
    pub force_single_line: bool,
    pub options: ConversionOptions,
    pub files: Vec<FileSummary>,
}

impl BatchSummary {
    pub fn new(entries: &[BatchEntry], force_single_line: bool, options: &ConversionOptions) -> Self {
        Self {
            generated_at: Utc::now(),
            version: crate::VERSION.to_string(),
            build_date: crate::BUILD_DATE.to_string(),
            force_single_line,
            options: options.clone(),
            files: entries.iter().map(FileSummary::from).collect(),
        }
    }
}
