use crate::error::{GeneSearchError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_DATASET_PATH: &str = "sequences.0.txt";
pub const DEFAULT_COMMANDS_PATH: &str = "commands.0.txt";
pub const DEFAULT_OUTPUT_PATH: &str = "genedata.txt";
pub const DEFAULT_AUTHOR: &str = "Katya";
pub const DEFAULT_TITLE: &str = "Генетический поиск";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub dataset_path: PathBuf,
    pub commands_path: PathBuf,
    pub output_path: PathBuf,
    /// First transcript line
    pub author: String,
    /// Second transcript line
    pub title: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATASET_PATH),
            commands_path: PathBuf::from(DEFAULT_COMMANDS_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            author: DEFAULT_AUTHOR.to_string(),
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl RunConfig {
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| GeneSearchError::io(path, e))?;
        serde_json::from_str(&text).map_err(|source| GeneSearchError::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}
