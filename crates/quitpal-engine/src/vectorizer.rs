use std::collections::HashMap;

use quitpal_core::{QuitpalError, QuitpalResult};

/// Tokenize text into lowercase words, splitting on any non-alphanumeric
/// character.
///
/// No stemming, no stop-word removal, no length filter — the similarity
/// measure is pure term co-occurrence over raw counts.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// An N×V term-count matrix over a sentence set.
///
/// The vocabulary is derived fresh from the given sentences in first-seen
/// order. Column ordering is consistent across all N rows of one `fit`
/// call so the rows are directly comparable; it is not stable across
/// calls.
#[derive(Debug, Clone)]
pub struct TermCountMatrix {
    vocabulary: Vec<String>,
    rows: Vec<Vec<f32>>,
}

impl TermCountMatrix {
    /// Build the matrix for `sentences`.
    ///
    /// Fails with [`QuitpalError::EmptyVocabulary`] when the sentence set
    /// yields zero distinct tokens.
    pub fn fit(sentences: &[String]) -> QuitpalResult<Self> {
        let tokenized: Vec<Vec<String>> =
            sentences.iter().map(|s| tokenize(s)).collect();

        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut vocabulary: Vec<String> = Vec::new();
        for tokens in &tokenized {
            for token in tokens {
                if !index.contains_key(token.as_str()) {
                    index.insert(token.as_str(), vocabulary.len());
                    vocabulary.push(token.clone());
                }
            }
        }

        if vocabulary.is_empty() {
            return Err(QuitpalError::EmptyVocabulary);
        }

        let rows = tokenized
            .iter()
            .map(|tokens| {
                let mut row = vec![0.0f32; vocabulary.len()];
                for token in tokens {
                    if let Some(&col) = index.get(token.as_str()) {
                        row[col] += 1.0;
                    }
                }
                row
            })
            .collect();

        Ok(Self { vocabulary, rows })
    }

    /// Number of rows (sentences).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the matrix has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The count vector for row `index`, or `None` when out of range.
    pub fn row(&self, index: usize) -> Option<&[f32]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Iterate over all row vectors in order.
    pub fn rows(&self) -> impl Iterator<Item = &[f32]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// The vocabulary tokens in column order.
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }
}
