//! Configuration command handler.
//!
//! Prints the resolved configuration as JSON, each value next to the layer it
//! came from:
//!
//! ```json
//! {
//!   "base_path": {
//!     "value": ".",
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &e.to_string())?;
            return Err(CliError::Config(e.to_string()));
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "base_path": {
            "value": config.base_path,
            "source": sources.base_path,
        },
        "target_folders": {
            "value": config.target_folders,
            "source": sources.target_folders,
        },
        "max_files_per_folder": {
            "value": config.max_files_per_folder,
            "source": sources.max_files_per_folder,
        },
        "output_format": {
            "value": config.output_format,
            "source": sources.output_format,
        },
        "perspective": {
            "value": config.perspective,
            "source": sources.perspective,
        }
    });
    let json_str = serde_json::to_string_pretty(&display)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
