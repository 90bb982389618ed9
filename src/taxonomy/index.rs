use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::utils::orf::strip_orf_suffix;

#[derive(Error, Debug)]
pub enum TaxonomyError {
    #[error("Failed to read taxonomy file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Taxonomy line {line} has fewer than 2 tab-separated fields")]
    MalformedRow { line: usize },

    #[error("No taxonomy entry for sequence '{0}'")]
    KeyNotFound(String),
}

/// Immutable mapping from normalized sequence identifier to taxonomy string.
///
/// Built eagerly from a tab-separated file (field 0 = identifier, field 1 =
/// taxonomy string, further fields ignored). Identifiers are normalized with
/// [`strip_orf_suffix`] before insertion, so a file keyed by original
/// sequence names answers lookups for the ORF-derived names a gene caller
/// produces. Taxonomy strings are stored verbatim, never parsed.
#[derive(Debug, Clone, Default)]
pub struct TaxonomyIndex {
    sequence_to_taxonomy: HashMap<String, String>,
}

impl TaxonomyIndex {
    /// Build an index from a taxonomy file.
    ///
    /// # Errors
    ///
    /// Returns `TaxonomyError::Io` if the file cannot be read, or
    /// `TaxonomyError::MalformedRow` if any row has fewer than 2 fields.
    pub fn from_file(path: &Path) -> Result<Self, TaxonomyError> {
        let content = std::fs::read_to_string(path)?;
        let index = Self::from_text(&content)?;
        debug!(
            "Loaded {} taxonomy entries from {}",
            index.len(),
            path.display()
        );
        Ok(index)
    }

    /// Build an index from tab-separated text.
    ///
    /// Rows are keyed last-write-wins: a duplicate identifier keeps the later
    /// taxonomy string. Blank lines are skipped.
    ///
    /// # Errors
    ///
    /// Returns `TaxonomyError::MalformedRow` (with a 1-based line number) if
    /// any row has fewer than 2 fields; the whole build fails rather than
    /// skipping the row.
    pub fn from_text(text: &str) -> Result<Self, TaxonomyError> {
        let mut sequence_to_taxonomy = HashMap::new();

        for (i, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let fields: Vec<&str> = line.split('\t').collect();
            if fields.len() < 2 {
                return Err(TaxonomyError::MalformedRow { line: i + 1 });
            }

            sequence_to_taxonomy.insert(
                strip_orf_suffix(fields[0]).to_string(),
                fields[1].to_string(),
            );
        }

        Ok(Self {
            sequence_to_taxonomy,
        })
    }

    /// Look up the taxonomy string for an already-normalized identifier.
    ///
    /// No partial or fuzzy matching. Callers holding an ORF-derived
    /// identifier should use [`lookup_orf`](Self::lookup_orf) instead.
    ///
    /// # Errors
    ///
    /// Returns `TaxonomyError::KeyNotFound` if the identifier is absent;
    /// the caller decides whether a missing taxonomy is fatal.
    pub fn lookup(&self, id: &str) -> Result<&str, TaxonomyError> {
        self.sequence_to_taxonomy
            .get(id)
            .map(String::as_str)
            .ok_or_else(|| TaxonomyError::KeyNotFound(id.to_string()))
    }

    /// Normalize an ORF-derived identifier, then look it up.
    ///
    /// # Errors
    ///
    /// Returns `TaxonomyError::KeyNotFound` if the normalized identifier is
    /// absent.
    pub fn lookup_orf(&self, id: &str) -> Result<&str, TaxonomyError> {
        self.lookup(strip_orf_suffix(id))
    }

    /// Get the taxonomy string for a normalized identifier
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&str> {
        self.sequence_to_taxonomy.get(id).map(String::as_str)
    }

    /// Number of entries in the index
    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence_to_taxonomy.len()
    }

    /// Check if the index is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence_to_taxonomy.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text_normalizes_keys() {
        let index = TaxonomyIndex::from_text(
            "geneA_0_10_20\td__Bacteria;p__Foo\ngeneB\td__Archaea;p__Bar\n",
        )
        .unwrap();

        assert_eq!(index.lookup("geneA").unwrap(), "d__Bacteria;p__Foo");
        assert_eq!(index.lookup("geneB").unwrap(), "d__Archaea;p__Bar");

        let err = index.lookup("geneC").unwrap_err();
        assert!(matches!(err, TaxonomyError::KeyNotFound(_)));
        assert!(err.to_string().contains("geneC"));
    }

    #[test]
    fn test_lookup_requires_normalized_key() {
        let index = TaxonomyIndex::from_text("geneA\td__Bacteria\n").unwrap();

        // The raw ORF name is not a key; callers normalize first
        assert!(index.lookup("geneA_1_2_3").is_err());
        assert_eq!(index.lookup_orf("geneA_1_2_3").unwrap(), "d__Bacteria");
    }

    #[test]
    fn test_malformed_row() {
        let err = TaxonomyIndex::from_text("geneA\td__Bacteria\ngeneB\n").unwrap_err();
        match err {
            TaxonomyError::MalformedRow { line } => assert_eq!(line, 2),
            other => panic!("expected MalformedRow, got {other:?}"),
        }
    }

    #[test]
    fn test_extra_fields_ignored() {
        let index =
            TaxonomyIndex::from_text("geneA\td__Bacteria\t0.98\textra\n").unwrap();
        assert_eq!(index.lookup("geneA").unwrap(), "d__Bacteria");
    }

    #[test]
    fn test_duplicate_rows_last_write_wins() {
        let index = TaxonomyIndex::from_text(
            "geneA\td__Bacteria\ngeneA_1_2_3\td__Archaea\n",
        )
        .unwrap();

        // Both rows normalize to the same key; the later row wins
        assert_eq!(index.len(), 1);
        assert_eq!(index.lookup("geneA").unwrap(), "d__Archaea");
    }

    #[test]
    fn test_blank_lines_skipped() {
        let index = TaxonomyIndex::from_text("geneA\td__Bacteria\n\ngeneB\td__Archaea\n").unwrap();
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_taxonomy_stored_verbatim() {
        let index = TaxonomyIndex::from_text("geneA\t d__Bacteria; p__Foo \n").unwrap();
        assert_eq!(index.lookup("geneA").unwrap(), " d__Bacteria; p__Foo ");
    }

    #[test]
    fn test_from_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = TaxonomyIndex::from_file(&dir.path().join("missing.tsv")).unwrap_err();
        assert!(matches!(err, TaxonomyError::Io(_)));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("taxonomy.tsv");
        std::fs::write(&path, "geneA_0_10_20\td__Bacteria;p__Foo\n").unwrap();

        let index = TaxonomyIndex::from_file(&path).unwrap();
        assert_eq!(index.len(), 1);
        assert_eq!(index.get("geneA"), Some("d__Bacteria;p__Foo"));
        assert_eq!(index.get("geneZ"), None);
    }
}
