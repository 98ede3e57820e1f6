use bio::alphabets::dna;

/// Reverse complement of a nucleotide sequence, upper-cased.
///
/// Complementation follows the `bio` DNA alphabet: A/T and C/G pair, IUPAC
/// ambiguity codes map to their complements, and anything else is left as is.
/// The output always has the same length as the input.
///
/// # Examples
///
/// ```
/// use unitig_locator::search::reverse_complement;
///
/// assert_eq!(reverse_complement(b"ATCG"), b"CGAT".to_vec());
/// assert_eq!(reverse_complement(b"aacn"), b"NGTT".to_vec());
/// ```
pub fn reverse_complement(seq: &[u8]) -> Vec<u8> {
    dna::revcomp(seq.iter().map(u8::to_ascii_uppercase))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_complement_basic() {
        assert_eq!(reverse_complement(b"ATCG"), b"CGAT");
        assert_eq!(reverse_complement(b"AAAC"), b"GTTT");
        assert!(reverse_complement(b"").is_empty());
    }

    #[test]
    fn test_lowercase_input_is_uppercased() {
        assert_eq!(reverse_complement(b"acgtt"), b"AACGT");
    }

    #[test]
    fn test_involution() {
        for seq in [&b"ACGT"[..], b"GATTACA", b"TTTTTTTTTA", b"CCGGA", b"A"] {
            let twice = reverse_complement(&reverse_complement(seq));
            assert_eq!(twice, seq);
        }
    }

    #[test]
    fn test_length_preserved_with_ambiguity_codes() {
        let seq = b"ACGTNRYKMSWBDHV";
        assert_eq!(reverse_complement(seq).len(), seq.len());
        assert_eq!(reverse_complement(b"N"), b"N");
    }
}
