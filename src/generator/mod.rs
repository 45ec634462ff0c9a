pub mod noun_index;
pub mod selector;
pub mod synthesizer;

pub use noun_index::{NounFrequencyIndex, COMMON_POOL_SIZE};
pub use selector::select_candidates;
pub use synthesizer::{synthesize_question, BLANK_MARKER, GENERIC_DISTRACTORS};

use std::sync::Arc;

use rand::Rng;

use crate::models::domain::Question;
use crate::nlp::{normalize, Annotator};

/// The full generation pipeline: normalize, select candidate sentences,
/// rank document nouns, then synthesize one question per sampled sentence.
pub struct QuizGenerator {
    annotator: Arc<dyn Annotator>,
}

impl QuizGenerator {
    pub fn new(annotator: Arc<dyn Annotator>) -> Self {
        Self { annotator }
    }

    pub fn generate(&self, text: &str, n: usize) -> Vec<Question> {
        self.generate_with_rng(text, n, &mut rand::thread_rng())
    }

    /// Deterministic entry point: every random draw (sentence sampling,
    /// answer choice, option shuffling) flows through `rng`.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        text: &str,
        n: usize,
        rng: &mut R,
    ) -> Vec<Question> {
        let text = normalize(text);
        if text.is_empty() {
            return Vec::new();
        }

        let candidates = select_candidates(self.annotator.as_ref(), &text, n);
        let index = NounFrequencyIndex::build(self.annotator.as_ref(), &text);
        let common_pool = index.common_nouns(COMMON_POOL_SIZE);

        let amount = n.min(candidates.len());
        let questions: Vec<Question> = rand::seq::index::sample(rng, candidates.len(), amount)
            .iter()
            .filter_map(|i| {
                synthesize_question(self.annotator.as_ref(), &candidates[i], &common_pool, rng)
            })
            .collect();

        log::info!(
            "generated {} of {} requested questions from {} candidate sentences",
            questions.len(),
            n,
            candidates.len()
        );
        questions
    }
}
