use std::fmt;
use std::fs;
use std::path::Path;

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use super::{Suggestion, SuggestionType};
use crate::api::Job;
use crate::error::SrmError;

/// Local pool of suggestions filtered per keystroke
pub struct SuggestionCatalog {
    entries: Vec<Suggestion>,
    matcher: SkimMatcherV2,
}

impl fmt::Debug for SuggestionCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuggestionCatalog")
            .field("entries", &self.entries.len())
            .finish_non_exhaustive()
    }
}

impl Default for SuggestionCatalog {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl SuggestionCatalog {
    pub fn new(entries: Vec<Suggestion>) -> Self {
        Self {
            entries,
            matcher: SkimMatcherV2::default().ignore_case(),
        }
    }

    /// Load a JSON array of suggestions
    pub fn load(path: &Path) -> Result<Self, SrmError> {
        let contents = fs::read_to_string(path).map_err(|source| SrmError::CatalogRead {
            path: path.to_path_buf(),
            source,
        })?;
        let entries: Vec<Suggestion> =
            serde_json::from_str(&contents).map_err(|source| SrmError::CatalogParse {
                path: path.to_path_buf(),
                source,
            })?;
        log::debug!("Loaded {} catalog entries from {:?}", entries.len(), path);
        Ok(Self::new(entries))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add jobs as `job` suggestions, replacing earlier entries with the same id
    pub fn extend_with_jobs(&mut self, jobs: &[Job]) {
        for job in jobs {
            let suggestion = job.to_suggestion();
            self.entries
                .retain(|e| !(e.suggestion_type == SuggestionType::Job && e.id == suggestion.id));
            self.entries.push(suggestion);
        }
    }

    /// Best matches for `term`, highest score first. Every whitespace-separated
    /// word of the term must match the name or the category.
    pub fn search(&self, term: &str, limit: usize) -> Vec<Suggestion> {
        let words: Vec<&str> = term.split_whitespace().collect();
        if words.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<(usize, i64)> = self
            .entries
            .iter()
            .enumerate()
            .filter_map(|(idx, entry)| {
                let mut total = 0;
                for word in &words {
                    let name_score = self.matcher.fuzzy_match(&entry.name, word);
                    let category_score = entry
                        .category
                        .as_deref()
                        .and_then(|c| self.matcher.fuzzy_match(c, word))
                        .map(|s| s / 2);
                    total += name_score.max(category_score)?;
                }
                Some((idx, total))
            })
            .collect();

        // Stable sort keeps catalog order for equal scores
        scored.sort_by(|a, b| b.1.cmp(&a.1));

        scored
            .into_iter()
            .take(limit)
            .map(|(idx, _)| self.entries[idx].clone())
            .collect()
    }
}
