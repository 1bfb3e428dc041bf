//! Command-line argument types.

use clap::{Parser, Subcommand};

use crate::config::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "phhforge",
    version,
    about = "Turn PHH poker hand histories into per-decision training data"
)]
pub struct PhhforgeCli {
    /// Raise log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate prompt/target training examples from hand-history folders
    Generate {
        /// Directory holding the target folders
        #[arg(long)]
        phh_path: Option<String>,
        /// Comma-separated folder names under the base path
        #[arg(long, value_delimiter = ',')]
        folders: Option<Vec<String>>,
        #[arg(long)]
        output: String,
        /// Maximum files read from each folder
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        max_files: Option<u64>,
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
        /// Only generate decisions for this player
        #[arg(long)]
        player: Option<String>,
        /// Only accept the operator directly after the seat (`p1 f`)
        #[arg(long)]
        positional: bool,
    },
    /// Build the flat reward dataset from every record below a directory
    Rewards {
        #[arg(long)]
        data_dir: String,
        #[arg(long)]
        output: String,
        /// Maximum files read in total
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        max_files: Option<u64>,
    },
    /// Show the parsed fields, events and decision points of one record
    Inspect {
        #[arg(long)]
        input: String,
        /// Player whose decision points to list (default: every player)
        #[arg(long)]
        player: Option<String>,
    },
    /// Display the resolved configuration and where each value came from
    Cfg,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_parses_folder_list() {
        let cli = PhhforgeCli::try_parse_from([
            "phhforge",
            "generate",
            "--folders",
            "30,40",
            "--output",
            "out.json",
            "--format",
            "jsonl",
        ])
        .unwrap();
        match cli.cmd {
            Commands::Generate {
                folders, format, ..
            } => {
                assert_eq!(folders, Some(vec!["30".to_string(), "40".to_string()]));
                assert_eq!(format, Some(OutputFormat::Jsonl));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn max_files_must_be_positive() {
        let res = PhhforgeCli::try_parse_from([
            "phhforge",
            "generate",
            "--output",
            "o.json",
            "--max-files",
            "0",
        ]);
        assert!(res.is_err());
    }

    #[test]
    fn verbose_is_global() {
        let cli = PhhforgeCli::try_parse_from(["phhforge", "cfg", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
