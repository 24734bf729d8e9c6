use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BrandQueryError {
    #[error("brand name must not be empty")]
    Empty,
}

/// A validated candidate brand name.
///
/// Constructed via [`BrandQuery::parse`], which trims surrounding whitespace
/// and rejects empty input. Created per request, discarded once the report is
/// produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandQuery {
    name: String,
}

impl BrandQuery {
    /// Validate raw user input into a `BrandQuery`.
    ///
    /// # Errors
    ///
    /// Returns [`BrandQueryError::Empty`] if the input is empty or contains
    /// only whitespace.
    pub fn parse(raw: &str) -> Result<Self, BrandQueryError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(BrandQueryError::Empty);
        }
        Ok(Self {
            name: trimmed.to_string(),
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lowercase form used by the containment heuristics.
    #[must_use]
    pub fn name_lower(&self) -> String {
        self.name.to_lowercase()
    }

    /// Derive the base label for candidate domains: lowercase alphanumeric
    /// characters only. Returns `None` when nothing usable remains (e.g. a
    /// name made entirely of punctuation).
    #[must_use]
    pub fn domain_label(&self) -> Option<String> {
        let label: String = self
            .name
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .collect::<String>()
            .to_lowercase();
        if label.is_empty() {
            None
        } else {
            Some(label)
        }
    }
}

impl std::fmt::Display for BrandQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
