// src/output/report.rs

use crate::collect::CollectionOutcome;
use crate::output::REPORT_FILE_NAME;
use log::debug;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Writes the human-readable summary report to the given writer.
///
/// The report names both roots and the three counters from the run.
pub fn write_report(
    writer: &mut dyn Write,
    source_root: &Path,
    output_root: &Path,
    outcome: &CollectionOutcome,
) -> io::Result<()> {
    debug!("Writing collection report...");
    writeln!(writer, "License file collection report")?;
    writeln!(writer, "========================")?;
    writeln!(writer, "Source directory: {}", source_root.display())?;
    writeln!(writer, "Output directory: {}", output_root.display())?;
    writeln!(writer, "Collected files: {}", outcome.collected)?;
    writeln!(writer, "Skipped (copy errors): {}", outcome.skipped)?;
    writeln!(writer, "Ignored files: {}", outcome.ignored)?;
    Ok(())
}

/// Writes the summary report to `COLLECTION_REPORT.txt` in the output root.
pub fn write_report_file(
    source_root: &Path,
    output_root: &Path,
    outcome: &CollectionOutcome,
) -> io::Result<()> {
    let report_path = output_root.join(REPORT_FILE_NAME);
    let mut writer = BufWriter::new(File::create(&report_path)?);
    write_report(&mut writer, source_root, output_root, outcome)?;
    writer.flush()
}
