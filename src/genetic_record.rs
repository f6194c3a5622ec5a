use serde::{Deserialize, Serialize};

const FIELD_SEPARATOR: char = '\t';

/// One row of the protein table. Immutable once parsed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneticRecord {
    protein: String,
    organism: String,
    amino_acids: String,
}

impl GeneticRecord {
    pub fn new(protein: &str, organism: &str, amino_acids: &str) -> Self {
        Self {
            protein: protein.to_string(),
            organism: organism.to_string(),
            amino_acids: amino_acids.to_string(),
        }
    }

    /// Parses `protein\torganism\tamino_acids`, trimming each field.
    ///
    /// Returns `None` for blank lines and lines with fewer than three fields.
    /// Fields beyond the third are ignored.
    pub fn from_line(line: &str) -> Option<Self> {
        if line.trim().is_empty() {
            return None;
        }
        let mut fields = line.split(FIELD_SEPARATOR).map(str::trim);
        let protein = fields.next()?;
        let organism = fields.next()?;
        let amino_acids = fields.next()?;
        Some(Self::new(protein, organism, amino_acids))
    }

    #[inline(always)]
    pub fn protein(&self) -> &str {
        &self.protein
    }

    #[inline(always)]
    pub fn organism(&self) -> &str {
        &self.organism
    }

    #[inline(always)]
    pub fn amino_acids(&self) -> &str {
        &self.amino_acids
    }
}
