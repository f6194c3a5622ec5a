pub mod amino_acids;
pub mod command;
pub mod config;
pub mod error;
pub mod genetic_record;
pub mod processor;
pub mod record_store;
pub mod run_length;
pub mod runner;
pub mod sequence_analytics;
pub mod transcript;

pub use error::{GeneSearchError, Result};
