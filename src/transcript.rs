use crate::error::{GeneSearchError, Result};
use std::{fs::File, io::BufWriter, io::Write, path::Path};

pub const BLOCK_SEPARATOR: &str =
    "---------------------------------------------------------------------";

/// Append-only list of output lines, persisted once at the end of a run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transcript {
    lines: Vec<String>,
    blocks: usize,
}

impl Transcript {
    /// Starts a transcript with the fixed author and title lines.
    pub fn with_header(author: &str, title: &str) -> Self {
        Self {
            lines: vec![author.to_string(), title.to_string()],
            blocks: 0,
        }
    }

    pub fn push<S: Into<String>>(&mut self, line: S) {
        self.lines.push(line.into());
    }

    /// Opens a result block: separator, then `NNN\t<echo>`.
    pub fn begin_block(&mut self, operation: usize, echo: &str) {
        self.push(BLOCK_SEPARATOR);
        self.push(format!("{operation:03}\t{echo}"));
        self.blocks += 1;
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn block_count(&self) -> usize {
        self.blocks
    }

    /// Every line terminated by `\n`.
    pub fn render(&self) -> String {
        let mut ret = String::with_capacity(self.lines.iter().map(|l| l.len() + 1).sum());
        for line in &self.lines {
            ret.push_str(line);
            ret.push('\n');
        }
        ret
    }

    pub fn write_to_path<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| GeneSearchError::io(path, e))?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(self.render().as_bytes())
            .and_then(|_| writer.flush())
            .map_err(|e| GeneSearchError::io(path, e))
    }
}
