/// Iterator over every start position of `pattern` in `text`.
///
/// After a match at `p` the search resumes at `p + 1`, so overlapping matches are
/// all reported. An empty pattern yields nothing.
#[derive(Debug, Clone)]
pub struct Occurrences<'a> {
    text: &'a [u8],
    pattern: &'a [u8],
    offset: usize,
}

impl Iterator for Occurrences<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.pattern.is_empty() || self.offset >= self.text.len() {
            return None;
        }

        let rest = &self.text[self.offset..];
        match rest
            .windows(self.pattern.len())
            .position(|window| window == self.pattern)
        {
            Some(rel) => {
                let pos = self.offset + rel;
                self.offset = pos + 1;
                Some(pos)
            }
            None => {
                self.offset = self.text.len();
                None
            }
        }
    }
}

impl std::iter::FusedIterator for Occurrences<'_> {}

/// Find all start positions of `pattern` in `text`, including overlapping ones.
///
/// The returned iterator is lazy and borrows both inputs; calling this again with
/// the same inputs reproduces the same positions. Callers are expected to pass a
/// non-empty pattern; an empty one finds nothing.
///
/// # Examples
///
/// ```
/// use unitig_locator::search::find_occurrences;
///
/// let hits: Vec<usize> = find_occurrences(b"AAAA", b"AA").collect();
/// assert_eq!(hits, vec![0, 1, 2]);
/// ```
pub fn find_occurrences<'a>(text: &'a [u8], pattern: &'a [u8]) -> Occurrences<'a> {
    Occurrences {
        text,
        pattern,
        offset: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions(text: &str, pattern: &str) -> Vec<usize> {
        find_occurrences(text.as_bytes(), pattern.as_bytes()).collect()
    }

    /// Brute-force reference: every offset where the pattern matches
    fn naive(text: &str, pattern: &str) -> Vec<usize> {
        let (t, p) = (text.as_bytes(), pattern.as_bytes());
        if p.len() > t.len() {
            return Vec::new();
        }
        (0..=t.len() - p.len())
            .filter(|&i| &t[i..i + p.len()] == p)
            .collect()
    }

    #[test]
    fn test_overlapping_matches() {
        assert_eq!(positions("AAAA", "AA"), vec![0, 1, 2]);
        assert_eq!(positions("ACACACA", "ACA"), vec![0, 2, 4]);
    }

    #[test]
    fn test_no_match_and_long_pattern() {
        assert!(positions("ACGT", "TTT").is_empty());
        assert!(positions("AC", "ACGT").is_empty());
        assert!(positions("", "A").is_empty());
    }

    #[test]
    fn test_match_at_end() {
        assert_eq!(positions("GGGACGT", "ACGT"), vec![3]);
        assert_eq!(positions("ACGT", "ACGT"), vec![0]);
    }

    #[test]
    fn test_matches_brute_force() {
        let text = "ACGTTACGTACGTTTAAACGTACGAAAATTTT";
        for pattern in ["A", "AA", "AAA", "ACG", "ACGT", "TT", "CGTAC", "GGG"] {
            let found = positions(text, pattern);
            assert_eq!(found, naive(text, pattern), "pattern {pattern}");
            for p in &found {
                assert_eq!(&text[*p..*p + pattern.len()], pattern);
            }
        }
    }

    #[test]
    fn test_restartable() {
        let text = b"TATATATA";
        let first: Vec<usize> = find_occurrences(text, b"TATA").collect();
        let second: Vec<usize> = find_occurrences(text, b"TATA").collect();
        assert_eq!(first, second);
        assert_eq!(first, vec![0, 2, 4]);
    }

    #[test]
    fn test_empty_pattern_finds_nothing() {
        assert!(positions("ACGT", "").is_empty());
    }

    #[test]
    fn test_fused_after_exhaustion() {
        let mut iter = find_occurrences(b"ACGT", b"CG");
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }
}
