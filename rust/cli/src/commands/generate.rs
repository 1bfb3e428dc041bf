//! Training-set generation from hand-history folders.

use phhforge_engine::actions::Dialect;
use phhforge_engine::pipeline::{Perspective, Pipeline};
use phhforge_engine::training::PromptRecord;
use std::io::Write;
use std::path::Path;

use super::process_files;
use crate::config::{self, OutputFormat, Overrides};
use crate::discovery;
use crate::error::CliError;
use crate::ui;
use crate::writer::RecordWriter;

#[derive(Debug, Clone, Default)]
pub struct GenerateArgs {
    pub phh_path: Option<String>,
    pub folders: Option<Vec<String>>,
    pub output: String,
    pub max_files: Option<usize>,
    pub format: Option<OutputFormat>,
    pub player: Option<String>,
    pub positional: bool,
}

/// Handle the generate command.
///
/// Resolves the configuration (defaults, file, environment, then these
/// arguments), discovers `*.phh` files in each target folder, processes them
/// in parallel and writes one [`PromptRecord`] per decision point.
///
/// Files that cannot be read or parsed are reported on `err` and skipped; the
/// command fails only when nothing could be discovered or the output cannot be
/// written.
pub fn handle_generate_command(
    args: GenerateArgs,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let GenerateArgs {
        phh_path,
        folders,
        output,
        max_files,
        format,
        player,
        positional,
    } = args;
    let cfg = config::load_with_sources()?
        .with_overrides(Overrides {
            base_path: phh_path,
            folders,
            max_files,
            format,
            player,
        })?
        .config;

    let found = discovery::discover_in_folders(
        Path::new(&cfg.base_path),
        &cfg.target_folders,
        cfg.max_files_per_folder,
    );
    for missing in &found.missing_folders {
        ui::display_warning(
            err,
            &format!("Folder not found, skipping: {}", missing.display()),
        )?;
    }
    if found.files.is_empty() {
        return Err(CliError::InvalidInput(format!(
            "no .phh files found under {} in folders {}",
            cfg.base_path,
            cfg.target_folders.join(",")
        )));
    }

    let perspective = match cfg.perspective {
        Some(name) => Perspective::Player(name),
        None => Perspective::AllPlayers,
    };
    let dialect = if positional {
        Dialect::Positional
    } else {
        Dialect::Lenient
    };
    let pipeline = Pipeline::new(dialect);
    tracing::info!(files = found.files.len(), ?perspective, "generating training data");
    let outcome = process_files(&pipeline, &found.files, &perspective, "generate");

    let mut writer = RecordWriter::create(Path::new(&output), cfg.output_format)?;
    let mut hands_with_examples = 0usize;
    let issues = outcome.issue_count();
    for (_, hand) in outcome.hands {
        if !hand.examples.is_empty() {
            hands_with_examples += 1;
        }
        for example in hand.examples {
            writer.write(&PromptRecord::from(example))?;
        }
    }
    let written = writer.finish()?;

    for failure in &outcome.failures {
        ui::display_warning(err, &format!("Skipped {}", failure))?;
    }
    ui::write_summary_line(out, "Files", found.files.len())?;
    ui::write_summary_line(out, "Failed files", outcome.failures.len())?;
    ui::write_summary_line(out, "Hands used", hands_with_examples)?;
    ui::write_summary_line(out, "Hand issues", issues)?;
    ui::write_summary_line(out, "Examples", written)?;
    ui::write_summary_line(out, "Output", &output)?;
    tracing::info!(examples = written, output = %output, "wrote training data");
    Ok(())
}
