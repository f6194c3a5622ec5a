use crate::{
    command::{Command, ParsedLine, SkipReason, parse_command_line},
    record_store::RecordStore,
    sequence_analytics::{mode_symbol, positional_difference},
    transcript::Transcript,
};
use log::debug;

pub const SEARCH_HEADER: &str = "organism\t\t\tprotein";
pub const SEARCH_NOT_FOUND: &str = "NOT FOUND";
pub const DIFF_HEADER: &str = "amino-acids difference:";
pub const MODE_HEADER: &str = "amino-acids occurs: ";
pub const MISSING_PREFIX: &str = "Отсутствует: ";

/// What happened to one line of the command script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Blank or whitespace-only; the operation counter is untouched.
    Blank,
    /// Non-blank but not runnable; the counter still advances.
    Skipped { operation: usize, reason: SkipReason },
    /// A result block was appended under this operation number.
    Emitted { operation: usize },
}

/// Runs script lines against a record store, appending one block per runnable command.
#[derive(Debug)]
pub struct CommandProcessor<'a> {
    store: &'a RecordStore,
    transcript: Transcript,
    next_operation: usize,
    skipped: usize,
}

impl<'a> CommandProcessor<'a> {
    pub fn new(store: &'a RecordStore, transcript: Transcript) -> Self {
        Self {
            store,
            transcript,
            next_operation: 1,
            skipped: 0,
        }
    }

    /// Number of non-blank lines seen so far.
    pub fn commands_read(&self) -> usize {
        self.next_operation - 1
    }

    pub fn lines_skipped(&self) -> usize {
        self.skipped
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn into_transcript(self) -> Transcript {
        self.transcript
    }

    pub fn process_script<'l, I>(&mut self, lines: I)
    where
        I: IntoIterator<Item = &'l str>,
    {
        for line in lines {
            self.process_line(line);
        }
    }

    pub fn process_line(&mut self, line: &str) -> LineOutcome {
        match parse_command_line(line) {
            ParsedLine::Blank => LineOutcome::Blank,
            ParsedLine::Command(command) => {
                let operation = self.advance();
                self.execute(operation, &command);
                LineOutcome::Emitted { operation }
            }
            ParsedLine::Skipped(reason) => {
                let operation = self.advance();
                debug!("Skipping command line {operation:03} ({reason:?}): {line:?}");
                self.skipped += 1;
                LineOutcome::Skipped { operation, reason }
            }
        }
    }

    fn advance(&mut self) -> usize {
        let operation = self.next_operation;
        self.next_operation += 1;
        operation
    }

    fn execute(&mut self, operation: usize, command: &Command) {
        self.transcript.begin_block(operation, &command.echo());
        match command {
            // Matching uses the query as written; only the echo is decoded.
            Command::Search { query } => self.search(query),
            Command::Diff { first, second } => self.diff(first, second),
            Command::Mode { protein } => self.mode(protein),
        }
    }

    fn search(&mut self, query: &str) {
        let hits = self.store.search_by_sequence_substring(query);
        self.transcript.push(SEARCH_HEADER);
        if hits.is_empty() {
            self.transcript.push(SEARCH_NOT_FOUND);
            return;
        }
        for hit in hits {
            self.transcript
                .push(format!("{}\t{}", hit.organism, hit.protein));
        }
    }

    fn diff(&mut self, first: &str, second: &str) {
        self.transcript.push(DIFF_HEADER);
        let a = self.store.find_by_protein(first);
        let b = self.store.find_by_protein(second);
        match (a, b) {
            (Some(a), Some(b)) => {
                let diff = positional_difference(a.amino_acids(), b.amino_acids());
                self.transcript.push(diff.to_string());
            }
            _ => {
                let missing = [(first, a.is_none()), (second, b.is_none())]
                    .into_iter()
                    .filter(|(_, absent)| *absent)
                    .map(|(name, _)| name)
                    .collect::<Vec<_>>()
                    .join(" ");
                self.transcript
                    .push(format!("{MISSING_PREFIX}{}", missing.trim()));
            }
        }
    }

    fn mode(&mut self, protein: &str) {
        self.transcript.push(MODE_HEADER);
        match self.store.find_by_protein(protein) {
            Some(record) => {
                let result = mode_symbol(record.amino_acids());
                self.transcript
                    .push(format!("{}\t\t {} ", result.symbol, result.count));
            }
            None => self.transcript.push(format!("{MISSING_PREFIX}{protein}")),
        }
    }
}
