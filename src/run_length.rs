//! Run-length notation for query strings: a single digit followed by a symbol stands for
//! that many copies of the symbol, e.g. `3A2B` is `AAABB`.

/// Longest run a single `<digit><symbol>` group can describe.
pub const MAX_RUN: usize = 9;

/// Shortest run worth encoding; shorter runs are written out literally.
pub const MIN_ENCODED_RUN: usize = 3;

#[derive(Clone, Copy, Debug, Default)]
pub struct RunLengthCodec;

impl RunLengthCodec {
    /// Expands `<digit><symbol>` pairs left to right.
    ///
    /// A digit `0` removes its symbol. A digit at the very end has no symbol to repeat and is
    /// copied as-is. Everything else passes through unchanged.
    pub fn decode(s: &str) -> String {
        let mut ret = String::with_capacity(s.len());
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            match c.to_digit(10) {
                Some(n) => match chars.next() {
                    Some(symbol) => ret.extend(std::iter::repeat_n(symbol, n as usize)),
                    None => ret.push(c),
                },
                None => ret.push(c),
            }
        }
        ret
    }

    /// Writes runs of 3 or more identical symbols as `<length><symbol>`, splitting runs
    /// longer than 9 into groups of at most 9. Runs of 1 or 2 stay literal.
    pub fn encode(s: &str) -> String {
        let mut ret = String::with_capacity(s.len());
        let mut chars = s.chars().peekable();
        while let Some(c) = chars.next() {
            let mut run = 1;
            while run < MAX_RUN && chars.next_if_eq(&c).is_some() {
                run += 1;
            }
            if run >= MIN_ENCODED_RUN {
                ret.push_str(&run.to_string());
                ret.push(c);
            } else {
                ret.extend(std::iter::repeat_n(c, run));
            }
        }
        ret
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode() {
        assert_eq!(RunLengthCodec::decode("3A2B"), "AAABB");
        assert_eq!(RunLengthCodec::decode("A"), "A");
        assert_eq!(RunLengthCodec::decode(""), "");
        assert_eq!(RunLengthCodec::decode("V3HL"), "VHHHL");
    }

    #[test]
    fn test_decode_trailing_digit_is_literal() {
        assert_eq!(RunLengthCodec::decode("5"), "5");
        assert_eq!(RunLengthCodec::decode("2AB7"), "AAB7");
    }

    #[test]
    fn test_decode_zero_drops_symbol() {
        assert_eq!(RunLengthCodec::decode("0AB"), "B");
    }

    #[test]
    fn test_decode_digit_consumes_following_digit() {
        assert_eq!(RunLengthCodec::decode("23"), "33");
        assert_eq!(RunLengthCodec::decode("12A"), "2A");
    }

    #[test]
    fn test_encode() {
        assert_eq!(RunLengthCodec::encode("AAABB"), "3ABB");
        assert_eq!(RunLengthCodec::encode("ABC"), "ABC");
        assert_eq!(RunLengthCodec::encode(""), "");
        assert_eq!(RunLengthCodec::encode("VHHHHL"), "V4HL");
    }

    #[test]
    fn test_encode_caps_groups_at_nine() {
        assert_eq!(RunLengthCodec::encode(&"C".repeat(12)), "9C3C");
        assert_eq!(RunLengthCodec::encode(&"C".repeat(10)), "9CC");
        assert_eq!(RunLengthCodec::encode(&"C".repeat(9)), "9C");
    }

    #[test]
    fn test_round_trip_short_runs() {
        for s in ["VHLTPEEK", "AAABBBBBBBBBC", "MMMMMMMMMKKW", "GIVEQCCTSICSLYQLENYCN"] {
            assert_eq!(RunLengthCodec::decode(&RunLengthCodec::encode(s)), s);
        }
    }

    #[test]
    fn test_round_trip_every_symbol_and_run_length() {
        let symbols = ['A', 'K', 'W', 'Y', 'x', '-', '*', 'ß', 'Ж'];
        for &c in &symbols {
            for len in 1..=MAX_RUN {
                let s = c.to_string().repeat(len);
                assert_eq!(RunLengthCodec::decode(&RunLengthCodec::encode(&s)), s);
            }
        }
    }

    #[test]
    fn test_round_trip_mixed_runs() {
        let symbols = ['A', 'C', 'ß', '-'];
        for &first in &symbols {
            for &second in symbols.iter().filter(|&&s| s != first) {
                for first_len in 1..=MAX_RUN {
                    for second_len in 1..=MAX_RUN {
                        let s = format!(
                            "{}{}{}",
                            first.to_string().repeat(first_len),
                            second.to_string().repeat(second_len),
                            first
                        );
                        assert_eq!(RunLengthCodec::decode(&RunLengthCodec::encode(&s)), s);
                    }
                }
            }
        }
    }

    #[test]
    fn test_long_runs_still_decode() {
        let s = "A".repeat(20);
        assert_eq!(RunLengthCodec::decode(&RunLengthCodec::encode(&s)), s);
    }
}
