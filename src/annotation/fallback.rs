/// Picks the first acceptable candidate from an ordered list, or a default.
///
/// Each candidate is offered with its own exclusion test, so different steps of
/// the chain can reject different placeholders (`?`, `group_` prefixes, ...).
///
/// ```
/// use unitig_locator::annotation::FallbackChain;
///
/// let name = FallbackChain::new()
///     .offer(Some("?"), |s| s == "?")
///     .offer(Some("LT_01"), |s| s == "?")
///     .resolve("Unknown");
/// assert_eq!(name, "LT_01");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackChain<'a> {
    chosen: Option<&'a str>,
}

impl<'a> FallbackChain<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer a candidate. It is taken if nothing has been chosen yet, it is
    /// present, and `excluded` does not reject it.
    #[must_use]
    pub fn offer<F>(self, candidate: Option<&'a str>, excluded: F) -> Self
    where
        F: FnOnce(&str) -> bool,
    {
        if self.chosen.is_some() {
            return self;
        }
        Self {
            chosen: candidate.filter(|c| !excluded(c)),
        }
    }

    /// The chosen candidate, if any
    pub fn chosen(self) -> Option<&'a str> {
        self.chosen
    }

    /// The chosen candidate, or `default` if every candidate was rejected
    pub fn resolve(self, default: &'a str) -> &'a str {
        self.chosen.unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_acceptable_wins() {
        let chosen = FallbackChain::new()
            .offer(None, |_| false)
            .offer(Some("group_1"), |s| s.starts_with("group_"))
            .offer(Some("rplL"), |s| s.starts_with("group_"))
            .offer(Some("later"), |_| false)
            .chosen();
        assert_eq!(chosen, Some("rplL"));
    }

    #[test]
    fn test_default_when_all_rejected() {
        let name = FallbackChain::new()
            .offer(Some("?"), |s| s == "?")
            .resolve("Unknown");
        assert_eq!(name, "Unknown");
        assert_eq!(FallbackChain::new().resolve("id"), "id");
    }
}
