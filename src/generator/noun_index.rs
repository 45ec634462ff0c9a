use std::collections::HashMap;

use crate::nlp::Annotator;

/// Size of the CommonNounPool drawn from the ranked index.
pub const COMMON_POOL_SIZE: usize = 30;

/// Document-wide noun occurrence counts, ranked once per generation request.
/// The top entries supply distractors for every synthesized question.
pub struct NounFrequencyIndex {
    ranked: Vec<(String, usize)>,
}

impl NounFrequencyIndex {
    /// Tags the whole document and counts each distinct noun surface form.
    /// Ranking is by descending count; ties keep first-encountered order so
    /// the ranking is stable across runs.
    pub fn build(annotator: &dyn Annotator, text: &str) -> Self {
        let mut counts: HashMap<String, (usize, usize)> = HashMap::new();

        for (position, token) in annotator
            .tag(text)
            .into_iter()
            .filter(|t| t.is_noun())
            .enumerate()
        {
            counts
                .entry(token.text)
                .and_modify(|(count, _)| *count += 1)
                .or_insert((1, position));
        }

        let mut ranked: Vec<(String, usize, usize)> = counts
            .into_iter()
            .map(|(noun, (count, first_seen))| (noun, count, first_seen))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

        Self {
            ranked: ranked.into_iter().map(|(noun, count, _)| (noun, count)).collect(),
        }
    }

    /// The top `limit` noun surface forms; all of them when the document has
    /// fewer distinct nouns than that.
    pub fn common_nouns(&self, limit: usize) -> Vec<String> {
        self.ranked
            .iter()
            .take(limit)
            .map(|(noun, _)| noun.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }
}
