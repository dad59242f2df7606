use std::collections::HashSet;

/// Repository names exempt from alarming.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowedSet {
    names: HashSet<String>,
}

impl AllowedSet {
    /// Parse a whitespace-separated list of names. Duplicates collapse.
    pub fn parse(raw: &str) -> Self {
        raw.split_whitespace().collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names in sorted order, for logging.
    pub fn sorted(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.names.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl<S: Into<String>> FromIterator<S> for AllowedSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Exact, case-sensitive membership check.
pub fn is_allowed(name: &str, allowed: &AllowedSet) -> bool {
    allowed.contains(name)
}
