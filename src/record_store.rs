use crate::{
    amino_acids::AminoAcids,
    error::{GeneSearchError, Result},
    genetic_record::GeneticRecord,
};
use log::debug;
use serde::Serialize;
use std::path::Path;

/// Reads a text file, replacing invalid UTF-8 sequences with U+FFFD.
pub fn read_text_lossy(path: &Path) -> std::io::Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Upper-cases one char, keeping it unchanged when the mapping is not a single char.
#[inline(always)]
fn simple_uppercase(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Char-by-char case-insensitive equality.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .map(simple_uppercase)
        .eq(b.chars().map(simple_uppercase))
}

/// Organism and protein of a record whose sequence matched a search.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SearchHit<'a> {
    pub organism: &'a str,
    pub protein: &'a str,
}

/// Records in file order. Read-only after loading.
#[derive(Clone, Debug, Default)]
pub struct RecordStore {
    records: Vec<GeneticRecord>,
}

impl RecordStore {
    pub fn new(records: Vec<GeneticRecord>) -> Self {
        Self { records }
    }

    /// Builds the store from dataset lines, silently dropping blank and short lines.
    pub fn load<'a, I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let records = lines
            .into_iter()
            .enumerate()
            .filter_map(|(idx, line)| {
                let record = GeneticRecord::from_line(line);
                if record.is_none() && !line.trim().is_empty() {
                    debug!("Skipping dataset line {}: fewer than 3 fields", idx + 1);
                }
                record
            })
            .collect();
        Self { records }
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = read_text_lossy(path).map_err(|e| GeneSearchError::dataset_read(path, e))?;
        Ok(Self::load(text.lines()))
    }

    pub fn records(&self) -> &[GeneticRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First record whose protein name equals `name`, ignoring case.
    pub fn find_by_protein(&self, name: &str) -> Option<&GeneticRecord> {
        self.records
            .iter()
            .find(|record| eq_ignore_case(record.protein(), name))
    }

    /// Every record whose sequence contains `query` verbatim, in file order.
    /// An empty query matches every record.
    pub fn search_by_sequence_substring(&self, query: &str) -> Vec<SearchHit<'_>> {
        self.records
            .iter()
            .filter(|record| record.amino_acids().contains(query))
            .map(|record| SearchHit {
                organism: record.organism(),
                protein: record.protein(),
            })
            .collect()
    }

    /// Records whose sequence uses letters outside the standard amino-acid alphabet.
    pub fn nonstandard_records(&self) -> impl Iterator<Item = &GeneticRecord> {
        self.records
            .iter()
            .filter(|record| !AminoAcids::is_valid_sequence(record.amino_acids()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn store() -> RecordStore {
        RecordStore::load(
            [
                "HBA\tHuman\tVHLTPEEK",
                "",
                "broken line",
                "BBG\tMouse\tVHLTPDEK",
                "hba\tRat\tMMMM",
                "INS\tHuman\tGIVEQCC",
            ]
            .into_iter(),
        )
    }

    #[test]
    fn test_load_skips_malformed_lines() {
        let store = store();
        assert_eq!(store.len(), 4);
        let names: Vec<&str> = store.records().iter().map(|r| r.protein()).collect();
        assert_eq!(names, vec!["HBA", "BBG", "hba", "INS"]);
    }

    #[test]
    fn test_find_by_protein_is_case_insensitive_and_first_wins() {
        let store = store();
        let record = store.find_by_protein("Hba").expect("HBA present");
        assert_eq!(record.organism(), "Human");
        assert!(store.find_by_protein("XYZ").is_none());
    }

    #[test]
    fn test_find_by_protein_folds_one_char_at_a_time() {
        let store = RecordStore::load(["straße\tHuman\tVHL", "Éclair\tCat\tMK"]);
        assert!(store.find_by_protein("STRASSE").is_none());
        assert_eq!(
            store.find_by_protein("STRAßE").map(|r| r.protein()),
            Some("straße")
        );
        assert_eq!(
            store.find_by_protein("éCLAIR").map(|r| r.protein()),
            Some("Éclair")
        );
        assert!(eq_ignore_case("hBa", "HbA"));
        assert!(!eq_ignore_case("HBA", "HBAA"));
    }

    #[test]
    fn test_search_is_case_sensitive_substring() {
        let store = store();
        let hits = store.search_by_sequence_substring("VHLTP");
        assert_eq!(
            hits,
            vec![
                SearchHit {
                    organism: "Human",
                    protein: "HBA"
                },
                SearchHit {
                    organism: "Mouse",
                    protein: "BBG"
                },
            ]
        );
        assert!(store.search_by_sequence_substring("vhltp").is_empty());
        assert!(store.search_by_sequence_substring("V.L").is_empty());
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let store = store();
        assert_eq!(store.search_by_sequence_substring("").len(), store.len());
    }

    #[test]
    fn test_nonstandard_records() {
        let store = RecordStore::load(["A\tX\tVHL", "B\tY\tVHZ"].into_iter());
        let odd: Vec<&str> = store.nonstandard_records().map(|r| r.protein()).collect();
        assert_eq!(odd, vec!["B"]);
    }

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "HBA\tHuman\tVHLTPEEK\r").expect("write");
        writeln!(file, "BBG\tMouse\tVHLTPDEK").expect("write");
        let store = RecordStore::load_from_path(file.path()).expect("load dataset");
        assert_eq!(store.len(), 2);
        assert_eq!(store.records()[0].amino_acids(), "VHLTPEEK");
    }

    #[test]
    fn test_load_from_path_keeps_lines_around_invalid_utf8() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(b"HBA\tHuman\tVHLTPEEK\nBBG\tMus m\xFCs\tVHLTPDEK\n")
            .expect("write");
        let store = RecordStore::load_from_path(file.path()).expect("load dataset");
        assert_eq!(store.len(), 2);
        assert_eq!(store.records()[0].protein(), "HBA");
        assert_eq!(store.records()[1].organism(), "Mus m\u{FFFD}s");
        assert_eq!(store.records()[1].amino_acids(), "VHLTPDEK");
    }

    #[test]
    fn test_load_from_missing_path() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = RecordStore::load_from_path(dir.path().join("absent.txt"))
            .expect_err("file is absent");
        assert!(matches!(err, GeneSearchError::MissingDataset { .. }));
    }
}
