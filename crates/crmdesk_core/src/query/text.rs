//! Case-insensitive free-text matching.

/// Normalized search text. Blank input matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextQuery {
    needle: String,
}

impl TextQuery {
    pub fn new(raw: &str) -> Self {
        Self {
            needle: raw.trim().to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.needle
    }

    /// Substring match against one field.
    pub fn matches(&self, field: &str) -> bool {
        self.is_empty() || field.to_lowercase().contains(&self.needle)
    }

    /// Substring match against any of `fields`.
    pub fn matches_any<'a, I>(&self, fields: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        if self.is_empty() {
            return true;
        }
        fields
            .into_iter()
            .any(|field| field.to_lowercase().contains(&self.needle))
    }
}

impl From<&str> for TextQuery {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::TextQuery;

    #[test]
    fn matching_ignores_case_and_surrounding_space() {
        let query = TextQuery::new("  ACME ");
        assert!(query.matches("Acme Corp"));
        assert!(query.matches_any(["nobody", "sales@acme.io"]));
        assert!(!query.matches_any(["Globex", "Initech"]));
    }

    #[test]
    fn trailing_space_is_stripped_before_matching() {
        let query = TextQuery::new("ana ");
        assert_eq!(query.as_str(), "ana");
        assert!(query.matches("Anabel"));
    }

    #[test]
    fn blank_query_matches_everything() {
        let query = TextQuery::new("   ");
        assert!(query.is_empty());
        assert!(query.matches(""));
        assert!(query.matches_any(std::iter::empty::<&str>()));
    }
}
