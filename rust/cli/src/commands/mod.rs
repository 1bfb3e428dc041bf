//! Command handler modules for the phhforge CLI.
//!
//! Each command lives in its own file and exposes
//! `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`, taking its
//! output streams as `&mut dyn Write` parameters.

mod cfg;
mod generate;
mod inspect;
mod rewards;

pub use cfg::handle_cfg_command;
pub use generate::{GenerateArgs, handle_generate_command};
pub use inspect::handle_inspect_command;
pub use rewards::handle_rewards_command;

use indicatif::{ProgressBar, ProgressStyle};
use phhforge_engine::pipeline::{HandOutput, Perspective, Pipeline};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

use crate::error::BatchValidationError;
use crate::io_utils::read_text_auto;

/// Files that produced output, and the ones that failed with a reason.
#[derive(Debug, Default)]
pub(crate) struct BatchOutcome {
    pub hands: Vec<(PathBuf, HandOutput)>,
    pub failures: Vec<BatchValidationError<String>>,
}

impl BatchOutcome {
    pub fn issue_count(&self) -> usize {
        self.hands.iter().map(|(_, h)| h.issues.len()).sum()
    }
}

pub(crate) fn progress_bar(len: u64, label: &'static str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    if let Ok(style) =
        ProgressStyle::with_template("{msg} [{elapsed_precise}] {wide_bar} {pos}/{len} ({eta})")
    {
        pb.set_style(style.progress_chars("█▉▊▋▌▍▎▏  "));
    }
    pb.set_message(label);
    pb
}

/// Runs every file through the pipeline in parallel; results keep input order.
pub(crate) fn process_files(
    pipeline: &Pipeline,
    files: &[PathBuf],
    perspective: &Perspective,
    label: &'static str,
) -> BatchOutcome {
    let pb = progress_bar(files.len() as u64, label);
    let results: Vec<Result<HandOutput, String>> = files
        .par_iter()
        .map(|path| {
            let result = process_file(pipeline, path, perspective);
            pb.inc(1);
            result
        })
        .collect();
    pb.finish_and_clear();

    let mut outcome = BatchOutcome::default();
    for (path, result) in files.iter().zip(results) {
        match result {
            Ok(hand) => outcome.hands.push((path.clone(), hand)),
            Err(message) => outcome.failures.push(BatchValidationError {
                item_context: path.display().to_string(),
                message,
            }),
        }
    }
    outcome
}

fn process_file(
    pipeline: &Pipeline,
    path: &Path,
    perspective: &Perspective,
) -> Result<HandOutput, String> {
    let text = read_text_auto(path)?;
    let output = pipeline
        .process(&text, perspective)
        .map_err(|e| e.to_string())?;
    for issue in &output.issues {
        tracing::debug!(file = %path.display(), %issue, "hand issue");
    }
    Ok(output)
}
