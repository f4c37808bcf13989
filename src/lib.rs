//! # Shimwave
//!
//! Converts DXF line-art of shim coil profiles into uniformly sampled
//! waveforms.
//!
//! ## Architecture
//!
//! Shimwave is organized as a workspace with multiple crates:
//!
//! 1. **shimwave-core** - Segment geometry, path assembly, evaluation, resampling
//! 2. **shimwave-dxf** - Model-space LINE/ARC/ELLIPSE extraction
//! 3. **shimwave-settings** - JSON/TOML settings files
//! 4. **shimwave** - Single-file and batch pipeline plus the command line
//!
//! ## Outputs
//!
//! - `<name>.wfm.json`: one waveform as a JSON array
//! - `concatenated_waveforms.json`: batch matrix, one row per sample and one
//!   column per file
//! - `batch_summary.json`: options, build info and per-file ranges

pub mod output;
pub mod pipeline;

pub use shimwave_core::{
    convert, Conversion, ConversionOptions, Segment, Waveform, WaveformError, WaveformResult,
};
pub use shimwave_dxf::{extract_file, ExtractedGeometry, ExtractionError};
pub use shimwave_settings::{OutputSettings, Settings, SettingsError};

pub use output::{waveform_output_path, write_batch, write_json, BatchOutput};
pub use pipeline::{
    concatenate, find_dxf_files, process_directory, process_dxf_file, BatchEntry, BatchSummary,
    FileSummary,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging
///
/// Logs go to stderr so previews on stdout stay readable. `RUST_LOG` is
/// honoured; without it the level is INFO, or WARN when `quiet` is set.
pub fn init_logging(quiet: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let default_level = if quiet {
        tracing::Level::WARN
    } else {
        tracing::Level::INFO
    };
    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_thread_names(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
