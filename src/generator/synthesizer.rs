use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::domain::Question;
use crate::nlp::Annotator;

/// Placeholder substituted for the answer in a question prompt.
pub const BLANK_MARKER: &str = "______";

/// Number of wrong options per question.
pub const DISTRACTOR_COUNT: usize = 3;

/// Last-resort distractor vocabulary for documents whose noun pool is too
/// small or overlaps the sentence completely.
pub const GENERIC_DISTRACTORS: [&str; 6] = ["person", "thing", "place", "time", "way", "idea"];

/// Turns one candidate sentence into a question, or `None` when the
/// sentence contains no nouns to blank.
///
/// The answer is drawn uniformly from the sentence's noun occurrences, so
/// nouns used twice are twice as likely to be picked. Distractors come from
/// the ranked `common_pool`, skipping the answer and anything already in the
/// sentence, then from the generic fallback list in random order until
/// three exist.
pub fn synthesize_question<R: Rng + ?Sized>(
    annotator: &dyn Annotator,
    sentence: &str,
    common_pool: &[String],
    rng: &mut R,
) -> Option<Question> {
    let sentence_nouns: Vec<String> = annotator
        .tag(sentence)
        .into_iter()
        .filter(|t| t.is_noun())
        .map(|t| t.text)
        .collect();

    let answer = sentence_nouns.choose(rng)?.clone();

    let mut distractors: Vec<String> = Vec::with_capacity(DISTRACTOR_COUNT);
    for noun in common_pool {
        if noun != &answer && !sentence_nouns.contains(noun) {
            distractors.push(noun.clone());
        }
        if distractors.len() >= DISTRACTOR_COUNT {
            break;
        }
    }

    if distractors.len() < DISTRACTOR_COUNT {
        let mut fallback = GENERIC_DISTRACTORS;
        fallback.shuffle(rng);
        for word in fallback {
            if distractors.len() >= DISTRACTOR_COUNT {
                break;
            }
            if word != answer && !distractors.iter().any(|d| d == word) {
                distractors.push(word.to_string());
            }
        }
    }

    let mut options = distractors;
    options.push(answer.clone());
    options.shuffle(rng);

    // First substring occurrence, deliberately not whole-word: a short
    // answer noun inside a longer word gets blanked instead.
    let prompt = sentence.replacen(answer.as_str(), BLANK_MARKER, 1);

    Some(Question::new(prompt, options, answer))
}
