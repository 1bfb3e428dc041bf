//! Reward dataset: one flat record per decision of every player.

use phhforge_engine::pipeline::{Perspective, Pipeline};
use phhforge_engine::training::RewardRecord;
use std::io::Write;
use std::path::Path;

use super::process_files;
use crate::config::OutputFormat;
use crate::discovery;
use crate::error::CliError;
use crate::ui;
use crate::writer::RecordWriter;

pub fn handle_rewards_command(
    data_dir: &str,
    output: &str,
    max_files: Option<usize>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let files = discovery::walk_phh_files(Path::new(data_dir), max_files)
        .map_err(|e| CliError::InvalidInput(e.to_string()))?;
    if files.is_empty() {
        return Err(CliError::InvalidInput(format!(
            "no .phh files found under {}",
            data_dir
        )));
    }

    let outcome = process_files(&Pipeline::default(), &files, &Perspective::AllPlayers, "rewards");
    let mut writer = RecordWriter::create(Path::new(output), OutputFormat::Json)?;
    for example in outcome.hands.iter().flat_map(|(_, hand)| &hand.examples) {
        writer.write(&RewardRecord::from(example))?;
    }
    let written = writer.finish()?;

    for failure in &outcome.failures {
        ui::display_warning(err, &format!("Skipped {}", failure))?;
    }
    ui::write_summary_line(out, "Files", files.len())?;
    ui::write_summary_line(out, "Failed files", outcome.failures.len())?;
    ui::write_summary_line(out, "Reward records", written)?;
    ui::write_summary_line(out, "Output", output)?;
    Ok(())
}
