use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use anyhow::Result;
use log::info;

use crate::profile::ProfileReport;

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Tsv,
    Json,
}

/// Write the reports to `output`, or stdout when no path is given.
pub fn write_profiles(
    reports: &[ProfileReport],
    output: Option<PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    let mut writer: Box<dyn Write> = match &output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(std::io::stdout()),
    };

    write_reports(&mut writer, reports, format)?;

    if let Some(path) = output {
        info!("Wrote {} profiles to {}", reports.len(), path.display());
    }
    Ok(())
}

/// Write the reports to any writer. TSV output is one per-residue table per
/// report, preceded by `#`-prefixed metadata lines; JSON output is a single
/// pretty-printed array.
pub fn write_reports<W: Write>(
    writer: &mut W,
    reports: &[ProfileReport],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Tsv => {
            for report in reports {
                write_tsv(writer, report)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, reports)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}

fn write_tsv<W: Write>(writer: &mut W, report: &ProfileReport) -> Result<()> {
    writeln!(writer, "# Sequence\t{}", report.id)?;
    writeln!(
        writer,
        "# Scale\t{} ({})\tnormalized={}\twindow={}",
        report.scale, report.aaindex_id, report.normalized, report.window
    )?;
    writeln!(writer, "residue_number\tresidue\traw\tsmoothed")?;

    for (i, residue) in report.sequence.bytes().enumerate() {
        writeln!(
            writer,
            "{}\t{}\t{:.6}\t{:.6}",
            i + 1,
            residue as char,
            report.profile.raw[i],
            report.profile.smoothed[i],
        )?;
    }
    writeln!(writer)?;

    Ok(())
}
