use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use shimwave::output::BATCH_DIR;
use shimwave::{
    concatenate, init_logging, process_directory, process_dxf_file, waveform_output_path,
    write_batch, write_json, Settings, Waveform,
};
use tracing::{debug, info};

/// Convert DXF coil drawings to waveform arrays
#[derive(Parser)]
#[command(
    name = "shimwave",
    version = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")"),
    about,
    long_about = None,
    group(ArgGroup::new("input").required(true).args(["dxf_file", "batch"]))
)]
struct Cli {
    /// Path to a single DXF file
    #[arg(value_name = "DXF_FILE")]
    dxf_file: Option<PathBuf>,

    /// Directory of DXF files to process in batch mode
    #[arg(short, long, value_name = "DIR")]
    batch: Option<PathBuf>,

    /// Output waveform file (single) or output directory (batch)
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Number of waveform samples
    #[arg(short, long = "num-samples", value_name = "N")]
    num_samples: Option<usize>,

    /// Force creation of a single line waveform
    #[arg(short, long)]
    single_line: bool,

    /// Print a preview of the result
    #[arg(short, long)]
    preview: bool,

    /// Suppress gap warnings and informational logs
    #[arg(short, long)]
    quiet: bool,

    /// Settings file (.json or .toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

impl Cli {
    /// Settings from `--config` (or defaults) with command line overrides.
    fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::load_from_file(path)
                .with_context(|| format!("Failed to load settings from {}", path.display()))?,
            None => Settings::default(),
        };
        if let Some(n) = self.num_samples {
            settings.conversion.num_samples = n;
        }
        if self.quiet {
            settings.conversion.quiet = true;
        }
        settings.validate()?;
        Ok(settings)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = cli.settings()?;
    init_logging(settings.conversion.quiet)?;

    debug!("Conversion options: {:?}", settings.conversion);

    match (&cli.batch, &cli.dxf_file) {
        (Some(dir), _) => run_batch(&cli, dir, &settings),
        (None, Some(file)) => run_single(&cli, file, &settings),
        (None, None) => anyhow::bail!("Either provide a DXF file or use --batch with a directory"),
    }
}

fn run_single(cli: &Cli, file: &Path, settings: &Settings) -> Result<()> {
    if !file.exists() {
        anyhow::bail!("DXF file '{}' not found", file.display());
    }
    info!("Processing DXF file: {}", file.display());

    let waveform = process_dxf_file(file, cli.single_line, &settings.conversion)?;
    println!("Generated waveform with {} samples", waveform.len());

    if cli.preview {
        print_preview(&waveform);
    }

    let output = waveform_output_path(file, cli.output.as_deref());
    write_json(&output, &waveform, settings.output.pretty)?;
    println!("Saved waveform array to: {}", output.display());
    Ok(())
}

fn run_batch(cli: &Cli, dir: &Path, settings: &Settings) -> Result<()> {
    info!("Processing DXF files in directory: {}", dir.display());

    let entries = process_directory(dir, cli.single_line, &settings.conversion)?;
    let columns: Vec<&Waveform> = entries.iter().map(|entry| &entry.waveform).collect();
    let matrix = concatenate(&columns);
    println!(
        "Batch processing complete! Generated {} waveforms",
        entries.len()
    );
    println!(
        "Concatenated array shape: ({}, {}) [samples x files]",
        matrix.len(),
        entries.len()
    );

    if cli.preview {
        let names: Vec<&str> = entries.iter().map(|entry| entry.name.as_str()).collect();
        println!("\nProcessed files: {:?}", names);
        let values = matrix.iter().flatten().copied();
        if let (Some(min), Some(max)) = (
            values.clone().reduce(f64::min),
            values.reduce(f64::max),
        ) {
            println!("Concatenated array Y range: {:.6} to {:.6}", min, max);
        }
    }

    let output_dir = cli
        .output
        .clone()
        .unwrap_or_else(|| dir.join(BATCH_DIR));
    let written = write_batch(
        &output_dir,
        &entries,
        cli.single_line,
        &settings.conversion,
        &settings.output,
    )?;
    println!(
        "Saved {} individual waveforms to: {}/",
        written.waveforms.len(),
        written.dir.display()
    );
    println!("Saved concatenated array to: {}", written.concatenated.display());
    if let Some(summary) = written.summary {
        println!("Saved batch summary to: {}", summary.display());
    }
    Ok(())
}

fn print_preview(waveform: &Waveform) {
    println!("\nFirst 10 waveform samples:");
    println!("{:?}", waveform.head(10));
    println!("\nLast 10 waveform samples:");
    println!("{:?}", waveform.tail(10));
    if let (Some(min), Some(max)) = (waveform.min(), waveform.max()) {
        println!("\nWaveform Y range: {:.6} to {:.6}", min, max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_quiet_from_config_file() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("shimwave.toml");
        std::fs::write(&config, "[conversion]\nquiet = true\n").unwrap();

        let cli = Cli::try_parse_from([
            "shimwave",
            "coil.dxf",
            "-c",
            config.to_str().unwrap(),
        ])
        .unwrap();
        assert!(!cli.quiet);
        assert!(cli.settings().unwrap().conversion.quiet);
    }

    #[test]
    fn test_flags_override_config() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("shimwave.json");
        std::fs::write(&config, r#"{ "conversion": { "num_samples": 64 } }"#).unwrap();

        let cli = Cli::try_parse_from([
            "shimwave",
            "--batch",
            "coils",
            "-q",
            "-n",
            "128",
            "-c",
            config.to_str().unwrap(),
        ])
        .unwrap();
        let settings = cli.settings().unwrap();
        assert!(settings.conversion.quiet);
        assert_eq!(settings.conversion.num_samples, 128);
    }

    #[test]
    fn test_input_is_required() {
        assert!(Cli::try_parse_from(["shimwave"]).is_err());
        assert!(Cli::try_parse_from(["shimwave", "a.dxf", "--batch", "dir"]).is_err());
    }
}
