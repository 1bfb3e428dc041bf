//! Shared fixtures for the CLI integration tests.
//!
//! - `run_cli` drives `phhforge_cli::run` in-process and captures both streams.
//! - `PhhTree` lays out hand-history folders inside a `tempfile` directory.
//! - `clear_env` removes every `PHHFORGE_*` variable; callers are `#[serial]`.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct CliResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

pub fn run_cli(args: &[&str]) -> CliResult {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let argv = std::iter::once("phhforge").chain(args.iter().copied());
    let exit_code = phhforge_cli::run(argv, &mut out, &mut err);
    CliResult {
        exit_code,
        stdout: String::from_utf8_lossy(&out).into_owned(),
        stderr: String::from_utf8_lossy(&err).into_owned(),
    }
}

pub const ENV_VARS: [&str; 5] = [
    "PHHFORGE_CONFIG",
    "PHHFORGE_BASE_PATH",
    "PHHFORGE_FOLDERS",
    "PHHFORGE_MAX_FILES",
    "PHHFORGE_FORMAT",
];

pub fn clear_env() {
    for key in ENV_VARS {
        unsafe {
            std::env::remove_var(key);
        }
    }
}

/// Heads-up hand: p1 raises, p2 calls, both check the flop, p2 folds to a turn bet.
pub fn heads_up_hand(hand: u64) -> String {
    format!(
        "variant = 'NT'\n\
         antes = [0, 0]\n\
         blinds_or_straddles = [50, 100]\n\
         min_bet = 100\n\
         starting_stacks = [10000, 8000]\n\
         actions = ['d dh p1 AhKh', 'd dh p2 7c7d', 'p1 cbr 300', 'p2 cc', 'd db Jc8d2s', 'p2 cc', 'p1 cc', 'd db 4h', 'p2 cbr 500', 'p1 f']\n\
         hand = {hand}\n\
         players = ['Hero', 'Villain']\n\
         finishing_stacks = [9700, 8300]\n"
    )
}

pub struct PhhTree {
    dir: tempfile::TempDir,
}

impl PhhTree {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn root_str(&self) -> String {
        self.dir.path().to_string_lossy().into_owned()
    }

    pub fn write(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("mkdir");
        }
        fs::write(&path, contents).expect("write fixture");
        path
    }

    pub fn out_path(&self, name: &str) -> String {
        self.dir.path().join(name).to_string_lossy().into_owned()
    }
}
