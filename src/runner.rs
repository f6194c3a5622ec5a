use crate::{
    config::RunConfig,
    error::{GeneSearchError, Result},
    processor::CommandProcessor,
    record_store::{RecordStore, read_text_lossy},
    transcript::Transcript,
};
use log::{info, warn};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub records_loaded: usize,
    pub dataset_available: bool,
    pub commands_read: usize,
    pub blocks_emitted: usize,
    pub lines_skipped: usize,
    pub output_path: PathBuf,
}

/// Loads the dataset, or an empty store if it cannot be read.
pub fn load_dataset(path: &Path) -> (RecordStore, bool) {
    match RecordStore::load_from_path(path) {
        Ok(store) => {
            info!("Loaded {} record(s) from '{}'", store.len(), path.display());
            for record in store.nonstandard_records() {
                warn!(
                    "Protein '{}' ({}) has non-standard amino-acid letters",
                    record.protein(),
                    record.organism()
                );
            }
            (store, true)
        }
        Err(e) => {
            warn!("{e}; continuing with an empty dataset");
            (RecordStore::default(), false)
        }
    }
}

/// Processes every line of `script` against `store`.
pub fn process<'a>(
    config: &RunConfig,
    store: &'a RecordStore,
    script: &str,
) -> CommandProcessor<'a> {
    let transcript = Transcript::with_header(&config.author, &config.title);
    let mut processor = CommandProcessor::new(store, transcript);
    processor.process_script(script.lines());
    processor
}

/// Full run: dataset, command script, transcript file.
pub fn run(config: &RunConfig) -> Result<RunSummary> {
    let (store, dataset_available) = load_dataset(&config.dataset_path);
    let script = read_text_lossy(&config.commands_path)
        .map_err(|e| GeneSearchError::io(&config.commands_path, e))?;

    let processor = process(config, &store, &script);
    let commands_read = processor.commands_read();
    let lines_skipped = processor.lines_skipped();
    let transcript = processor.into_transcript();
    transcript.write_to_path(&config.output_path)?;
    info!(
        "Processing complete. Results written to '{}'",
        config.output_path.display()
    );

    Ok(RunSummary {
        records_loaded: store.len(),
        dataset_available,
        commands_read,
        blocks_emitted: transcript.block_count(),
        lines_skipped,
        output_path: config.output_path.clone(),
    })
}
