//! Context filters restricting which block types a replace may apply within.

use std::collections::HashSet;
use std::fmt;

/// Matches a block type label.
pub enum ContextMatcher {
    Predicate(Box<dyn Fn(&str) -> bool>),
    Kinds(HashSet<String>),
    Kind(String),
}

impl ContextMatcher {
    pub fn matches(&self, kind: &str) -> bool {
        match self {
            Self::Predicate(f) => f(kind),
            Self::Kinds(kinds) => kinds.contains(kind),
            Self::Kind(k) => k == kind,
        }
    }
}

impl fmt::Debug for ContextMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Predicate(_) => f.write_str("Predicate(..)"),
            Self::Kinds(kinds) => f.debug_tuple("Kinds").field(kinds).finish(),
            Self::Kind(kind) => f.debug_tuple("Kind").field(kind).finish(),
        }
    }
}

impl From<&str> for ContextMatcher {
    fn from(kind: &str) -> Self {
        Self::Kind(kind.to_string())
    }
}

impl From<String> for ContextMatcher {
    fn from(kind: String) -> Self {
        Self::Kind(kind)
    }
}

impl<const N: usize> From<[&str; N]> for ContextMatcher {
    fn from(kinds: [&str; N]) -> Self {
        Self::Kinds(kinds.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<String>> for ContextMatcher {
    fn from(kinds: Vec<String>) -> Self {
        Self::Kinds(kinds.into_iter().collect())
    }
}

/// Inclusion and exclusion filters, evaluated independently.
#[derive(Debug, Default)]
pub struct ContextFilter {
    pub only_in: Option<ContextMatcher>,
    pub ignore_in: Option<ContextMatcher>,
}

impl ContextFilter {
    /// Whether a replace may run inside a block of this kind.
    pub fn allows(&self, kind: &str) -> bool {
        if let Some(only_in) = &self.only_in
            && !only_in.matches(kind)
        {
            return false;
        }
        if let Some(ignore_in) = &self.ignore_in
            && ignore_in.matches(kind)
        {
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matcher_shapes() {
        assert!(ContextMatcher::from("code").matches("code"));
        assert!(!ContextMatcher::from("code").matches("paragraph"));

        let kinds = ContextMatcher::from(["paragraph", "quote"]);
        assert!(kinds.matches("quote"));
        assert!(!kinds.matches("heading"));

        let prefix = ContextMatcher::Predicate(Box::new(|kind: &str| kind.starts_with("heading")));
        assert!(prefix.matches("heading-two"));
        assert!(!prefix.matches("paragraph"));
    }

    #[test]
    fn test_unfiltered_allows_everything() {
        assert!(ContextFilter::default().allows("anything"));
    }

    #[test]
    fn test_only_in() {
        let filter = ContextFilter {
            only_in: Some(["paragraph"].into()),
            ignore_in: None,
        };
        assert!(filter.allows("paragraph"));
        assert!(!filter.allows("heading"));
    }

    #[test]
    fn test_ignore_in() {
        let filter = ContextFilter {
            only_in: None,
            ignore_in: Some("code".into()),
        };
        assert!(filter.allows("paragraph"));
        assert!(!filter.allows("code"));
    }

    #[test]
    fn test_ignore_in_wins_over_only_in() {
        let filter = ContextFilter {
            only_in: Some(["paragraph", "code"].into()),
            ignore_in: Some("code".into()),
        };
        assert!(filter.allows("paragraph"));
        assert!(!filter.allows("code"));
    }
}
