//! Writing waveforms and batch results as JSON.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use shimwave_core::{ConversionOptions, Waveform};
use shimwave_settings::OutputSettings;
use tracing::info;

use crate::pipeline::{concatenate, BatchEntry, BatchSummary};

/// Suffix of every single-waveform file.
pub const WAVEFORM_SUFFIX: &str = ".wfm.json";
pub const CONCATENATED_FILE: &str = "concatenated_waveforms.json";
pub const SUMMARY_FILE: &str = "batch_summary.json";
/// Output directory created inside the batch directory by default.
pub const BATCH_DIR: &str = "batch_waveforms";

/// Where a single-file conversion is written.
///
/// An explicit `output` keeps its stem and gets the `.wfm.json` suffix;
/// otherwise the waveform lands next to `input`.
pub fn waveform_output_path(input: &Path, output: Option<&Path>) -> PathBuf {
    let base = output.unwrap_or(input);
    let already_suffixed = base
        .file_name()
        .is_some_and(|name| name.to_string_lossy().ends_with(WAVEFORM_SUFFIX));
    if already_suffixed {
        base.to_path_buf()
    } else {
        base.with_extension(&WAVEFORM_SUFFIX[1..])
    }
}

/// Serializes `value` to `path` as JSON.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T, pretty: bool) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    if pretty {
        serde_json::to_writer_pretty(&mut writer, value)?;
    } else {
        serde_json::to_writer(&mut writer, value)?;
    }
    writer.write_all(b"\n")?;
    writer
        .flush()
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Files produced by [`write_batch`].
#[derive(Debug, Clone, PartialEq)]
pub struct BatchOutput {
    pub dir: PathBuf,
    pub waveforms: Vec<PathBuf>,
    pub concatenated: PathBuf,
    pub summary: Option<PathBuf>,
}

/// Writes every batch entry, the concatenated matrix and (optionally) the
/// summary into `dir`, creating it if needed.
pub fn write_batch(
    dir: &Path,
    entries: &[BatchEntry],
    force_single_line: bool,
    options: &ConversionOptions,
    settings: &OutputSettings,
) -> Result<BatchOutput> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    let mut waveforms = Vec::with_capacity(entries.len());
    for entry in entries {
        let path = dir.join(format!("{}{}", entry.name, WAVEFORM_SUFFIX));
        write_json(&path, &entry.waveform, settings.pretty)?;
        waveforms.push(path);
    }

    let columns: Vec<&Waveform> = entries.iter().map(|entry| &entry.waveform).collect();
    let concatenated = dir.join(CONCATENATED_FILE);
    write_json(&concatenated, &concatenate(&columns), settings.pretty)?;

    let summary = if settings.write_summary {
        let path = dir.join(SUMMARY_FILE);
        let summary = BatchSummary::new(entries, force_single_line, options);
        write_json(&path, &summary, true)?;
        Some(path)
    } else {
        None
    };

    info!(
        "Saved {} individual waveforms to: {}",
        waveforms.len(),
        dir.display()
    );
    Ok(BatchOutput {
        dir: dir.to_path_buf(),
        waveforms,
        concatenated,
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::process_directory;
    use crate::pipeline::tests::{quiet_options, write_profile};
    use tempfile::TempDir;

    fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> T {
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn test_default_output_next_to_input() {
        let path = waveform_output_path(Path::new("coils/x2.dxf"), None);
        assert_eq!(path, PathBuf::from("coils/x2.wfm.json"));
    }

    #[test]
    fn test_explicit_output_gets_suffix() {
        let input = Path::new("x2.dxf");
        assert_eq!(
            waveform_output_path(input, Some(Path::new("out/shape.txt"))),
            PathBuf::from("out/shape.wfm.json")
        );
        assert_eq!(
            waveform_output_path(input, Some(Path::new("out/shape"))),
            PathBuf::from("out/shape.wfm.json")
        );
        assert_eq!(
            waveform_output_path(input, Some(Path::new("out/shape.wfm.json"))),
            PathBuf::from("out/shape.wfm.json")
        );
    }

    #[test]
    fn test_batch_writes_every_output() {
        let dir = TempDir::new().unwrap();
        write_profile(&dir.path().join("b_high.dxf"), 3.0);
        write_profile(&dir.path().join("a_low.dxf"), 1.0);

        let entries = process_directory(dir.path(), false, &quiet_options()).unwrap();
        let out_dir = dir.path().join("out");
        let written = write_batch(
            &out_dir,
            &entries,
            false,
            &quiet_options(),
            &OutputSettings::default(),
        )
        .unwrap();

        assert_eq!(written.waveforms.len(), 2);
        let low: Waveform = read_json(&out_dir.join("a_low.wfm.json"));
        assert_eq!(low.len(), 50);

        let matrix: Vec<Vec<f64>> = read_json(&out_dir.join(CONCATENATED_FILE));
        assert_eq!(matrix.len(), 50);
        assert!(matrix.iter().all(|row| row.len() == 2));
        assert_eq!(matrix[10][0], low.samples()[10]);

        let summary: BatchSummary = read_json(&out_dir.join(SUMMARY_FILE));
        assert_eq!(summary.files.len(), 2);
        assert_eq!(summary.files[1].name, "b_high");
        assert_eq!(summary.options.num_samples, 50);
        assert_eq!(summary.build_date, crate::BUILD_DATE);
        assert!(summary.files[1].max.unwrap() > summary.files[0].max.unwrap());
    }

    #[test]
    fn test_batch_without_summary() {
        let dir = TempDir::new().unwrap();
        write_profile(&dir.path().join("only.dxf"), 1.0);

        let entries = process_directory(dir.path(), true, &quiet_options()).unwrap();
        assert!(entries[0].waveform.samples().iter().all(|&y| y == 0.0));

        let settings = OutputSettings {
            pretty: true,
            write_summary: false,
        };
        let out_dir = dir.path().join("out");
        let written =
            write_batch(&out_dir, &entries, true, &quiet_options(), &settings).unwrap();
        assert!(written.summary.is_none());
        assert!(!out_dir.join(SUMMARY_FILE).exists());
        assert!(written.concatenated.exists());
    }
}
