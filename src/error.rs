use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GeneSearchError>;

#[derive(Debug, Error)]
pub enum GeneSearchError {
    #[error("Dataset file '{}' not found", path.display())]
    MissingDataset { path: PathBuf },

    #[error("Could not access '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not parse config JSON '{}': {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl GeneSearchError {
    /// Maps a dataset read failure, keeping "not found" apart from other I/O errors.
    pub fn dataset_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::MissingDataset { path }
        } else {
            Self::Io { path, source }
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
