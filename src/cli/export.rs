//! CLI command for data export

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::error::{MoodfolioError, MoodfolioResult};
use crate::export::{export_json, export_moods_csv, export_yaml};
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// JSON (full journal, importable)
    Json,
    /// YAML (full journal, human-readable, importable)
    Yaml,
    /// CSV (mood entries only)
    Csv,
}

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path; writes to stdout when omitted
    pub output: Option<PathBuf>,

    /// Export format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ExportFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Handle the export command
pub fn handle_export_command(storage: &Storage, args: ExportArgs) -> MoodfolioResult<()> {
    match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                MoodfolioError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_export(storage, &args, &mut writer)?;
            writer.flush()?;

            match args.format {
                ExportFormat::Csv => println!("Mood entries exported to: {}", path.display()),
                _ => println!("Journal exported to: {}", path.display()),
            }
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = stdout.lock();
            write_export(storage, &args, &mut writer)?;
            writeln!(writer)?;
        }
    }

    Ok(())
}

fn write_export<W: Write>(storage: &Storage, args: &ExportArgs, writer: &mut W) -> MoodfolioResult<()> {
    match args.format {
        ExportFormat::Json => export_json(storage, writer, args.pretty),
        ExportFormat::Yaml => export_yaml(storage, writer),
        ExportFormat::Csv => export_moods_csv(storage, writer),
    }
}
