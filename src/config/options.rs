// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;

/// Runtime knobs. `Default` mirrors the compile-time constants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    /// Site root; page and bio hrefs are resolved against it.
    pub base_url: String,
    /// Pause after each scraped page.
    pub delay: Duration,
    /// Directory that the bare `.csv` / `.json` names typed at the prompts live in.
    pub data_dir: PathBuf,
    /// Fixed RNG seed for quote selection.
    pub seed: Option<u64>,
    pub log_file: Option<PathBuf>,
    pub show_help: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            delay: Duration::from_millis(REQUEST_DELAY_MS),
            data_dir: PathBuf::from("."),
            seed: None,
            log_file: Some(PathBuf::from(DEFAULT_LOG_FILE)),
            show_help: false,
        }
    }
}

impl Options {
    pub fn resolve(&self, file_name: &str) -> PathBuf {
        self.data_dir.join(file_name)
    }
}
