//! HeadingExclusions - instructional titles kept out of the printed headings.

use std::collections::BTreeSet;

use crate::domain::catalog::ContentCatalog;

/// Set of heading titles that are dropped from the print artifact.
///
/// Only the heading line is dropped; content under it still exports.
/// Matching is exact after trimming surrounding whitespace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadingExclusions {
    titles: BTreeSet<String>,
}

impl HeadingExclusions {
    pub fn new<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            titles: titles
                .into_iter()
                .map(|t| t.as_ref().trim().to_string())
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }

    /// Titles of every section the catalog marks as suppressed.
    pub fn from_catalog(catalog: &ContentCatalog) -> Self {
        Self::new(catalog.suppressed_titles())
    }

    /// Adds extra titles (for example from configuration).
    pub fn with_extra<I, S>(mut self, titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.titles.extend(Self::new(titles).titles);
        self
    }

    pub fn excludes(&self, heading: &str) -> bool {
        self.titles.contains(heading.trim())
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}
