/// One-letter codes of the 20 standard amino acids, in alphabetical order
pub const STANDARD_AMINO_ACIDS: [char; 20] = [
    'A', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'K', 'L', 'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'V', 'W',
    'Y',
];

#[derive(Clone, Copy, Debug, Default)]
pub struct AminoAcids;

impl AminoAcids {
    #[inline(always)]
    pub fn is_valid_letter(letter: char) -> bool {
        matches!(
            letter,
            'A' | 'C'
                | 'D'
                | 'E'
                | 'F'
                | 'G'
                | 'H'
                | 'I'
                | 'K'
                | 'L'
                | 'M'
                | 'N'
                | 'P'
                | 'Q'
                | 'R'
                | 'S'
                | 'T'
                | 'V'
                | 'W'
                | 'Y'
        )
    }

    /// True if every letter is a standard upper-case amino acid code. Empty sequences are valid.
    pub fn is_valid_sequence(sequence: &str) -> bool {
        sequence.chars().all(Self::is_valid_letter)
    }
}
