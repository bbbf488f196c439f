//! DNA sequence type and strand transforms

use std::collections::HashMap;
use std::fmt;

use bio::alphabets::Alphabet;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::error::{DnaError, Result};

/// Canonical DNA bases
pub const STANDARD_BASES: &[u8; 4] = b"ACGT";

/// Complement pairing. Only the four uppercase bases are mapped; every
/// other character is left as-is by `complement`.
pub static COMPLEMENT: Lazy<HashMap<char, char>> = Lazy::new(|| {
    let mut map = HashMap::new();
    map.insert('A', 'T');
    map.insert('T', 'A');
    map.insert('C', 'G');
    map.insert('G', 'C');
    map
});

static CANONICAL_ALPHABET: Lazy<Alphabet> = Lazy::new(|| Alphabet::new(STANDARD_BASES));

/// Check if a character is a canonical DNA base (case-sensitive)
pub fn is_standard_base(c: char) -> bool {
    c.is_ascii() && CANONICAL_ALPHABET.is_word([c as u8])
}

/// An ordered string of nucleotide characters.
///
/// `Sequence::new` accepts any text: lowercase letters, ambiguity codes and
/// anything else are carried through the transforms unchanged and ignored
/// by the composition counts. Use `Sequence::validated` to reject input that
/// is not strictly `A`/`C`/`G`/`T`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sequence(String);

impl Sequence {
    pub fn new(bases: impl Into<String>) -> Self {
        Self(bases.into())
    }

    /// Build a sequence, rejecting any character outside `A`, `C`, `G`, `T`.
    pub fn validated(bases: impl Into<String>) -> Result<Self> {
        let seq = Self::new(bases);
        match seq.0.chars().enumerate().find(|&(_, c)| !is_standard_base(c)) {
            Some((i, c)) => Err(DnaError::InvalidSequence {
                character: c,
                position: i + 1,
            }),
            None => Ok(seq),
        }
    }

    /// True if every character is one of the four canonical bases.
    /// The empty sequence is canonical.
    pub fn is_canonical(&self) -> bool {
        CANONICAL_ALPHABET.is_word(self.0.as_bytes())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Number of characters (not bytes)
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn complement(&self) -> Sequence {
        complement(self)
    }

    pub fn reverse(&self) -> Sequence {
        reverse(self)
    }

    pub fn reverse_complement(&self) -> Sequence {
        reverse_complement(self)
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Sequence {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Sequence {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for Sequence {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Substitute A<->T and C<->G, passing every other character through.
pub fn complement(seq: &Sequence) -> Sequence {
    Sequence(
        seq.0
            .chars()
            .map(|c| *COMPLEMENT.get(&c).unwrap_or(&c))
            .collect(),
    )
}

/// Invert the order of characters.
pub fn reverse(seq: &Sequence) -> Sequence {
    Sequence(seq.0.chars().rev().collect())
}

/// Complement, then reverse.
pub fn reverse_complement(seq: &Sequence) -> Sequence {
    reverse(&complement(seq))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complement() {
        assert_eq!(complement(&"ATCG".into()).as_str(), "TAGC");
    }

    #[test]
    fn test_reverse() {
        assert_eq!(reverse(&"ATCG".into()).as_str(), "GCTA");
    }

    #[test]
    fn test_reverse_complement() {
        assert_eq!(reverse_complement(&"ATCG".into()).as_str(), "CGAT");
        assert_eq!(Sequence::from("AACG").reverse_complement().as_str(), "CGTT");
    }

    #[test]
    fn test_empty_sequence() {
        let empty = Sequence::default();
        assert!(complement(&empty).is_empty());
        assert!(reverse(&empty).is_empty());
        assert!(reverse_complement(&empty).is_empty());
        assert!(empty.is_canonical());
    }

    #[test]
    fn test_non_alphabet_passes_through() {
        assert_eq!(complement(&"a".into()).as_str(), "a");
        assert_eq!(complement(&"N".into()).as_str(), "N");
        assert_eq!(complement(&"AtNg-C".into()).as_str(), "TtNg-G");
        assert_eq!(reverse_complement(&"ANc".into()).as_str(), "cNT");
    }

    #[test]
    fn test_reverse_is_char_aware() {
        let seq = Sequence::from("Aé C");
        assert_eq!(reverse(&seq).as_str(), "C éA");
        assert_eq!(seq.len(), 4);
    }

    #[test]
    fn test_validated() {
        assert!(Sequence::validated("ACGT").is_ok());
        assert!(Sequence::validated("").is_ok());

        match Sequence::validated("ACgT") {
            Err(DnaError::InvalidSequence { character, position }) => {
                assert_eq!(character, 'g');
                assert_eq!(position, 3);
            }
            other => panic!("expected InvalidSequence, got {:?}", other),
        }
    }

    #[test]
    fn test_is_standard_base() {
        for &b in STANDARD_BASES {
            assert!(is_standard_base(b as char));
        }
        assert!(!is_standard_base('a'));
        assert!(!is_standard_base('N'));
        assert!(!is_standard_base('é'));
    }

    #[test]
    fn test_validated_reports_first_non_ascii() {
        match Sequence::validated("ACé") {
            Err(DnaError::InvalidSequence { character, position }) => {
                assert_eq!(character, 'é');
                assert_eq!(position, 3);
            }
            other => panic!("expected InvalidSequence, got {:?}", other),
        }
    }

    #[test]
    fn test_is_canonical() {
        assert!(Sequence::from("GATTACA").is_canonical());
        assert!(!Sequence::from("GATTACN").is_canonical());
        assert!(!Sequence::from("gattaca").is_canonical());
    }
}
