use crate::nlp::Annotator;

/// Candidate sentences shorter than this carry too little content to blank.
const MIN_SENTENCE_LEN: usize = 10;

/// Word chunks from the last-resort tier must clear a higher bar.
const MIN_CHUNK_LEN: usize = 20;

/// Produces the candidate sentence pool for `n` requested questions.
///
/// Three tiers, each attempted only when the previous one yields fewer than
/// `n` usable sentences; tiers replace one another, they are never merged:
///   1. annotator segmentation,
///   2. naive delimiter splitting on `.`/`!`/`?`,
///   3. fixed-size word chunking.
/// The result may still hold fewer than `n` entries for very short
/// documents; callers then generate fewer questions.
pub fn select_candidates(annotator: &dyn Annotator, text: &str, n: usize) -> Vec<String> {
    let n = n.max(1);

    let mut sentences: Vec<String> = annotator
        .sentences(text)
        .iter()
        .map(|s| s.trim().to_string())
        .filter(|s| s.chars().count() > MIN_SENTENCE_LEN)
        .collect();

    if sentences.len() < n {
        log::debug!(
            "annotator produced {} usable sentences for {} requested, splitting on punctuation",
            sentences.len(),
            n
        );
        sentences = text
            .split(['.', '!', '?'])
            .map(|s| s.trim().to_string())
            .filter(|s| s.chars().count() > MIN_SENTENCE_LEN)
            .collect();
    }

    if sentences.len() < n {
        log::debug!(
            "punctuation split produced {} usable sentences for {} requested, chunking words",
            sentences.len(),
            n
        );
        let words: Vec<&str> = text.split_whitespace().collect();
        let chunk_size = (words.len() / n).max(10);
        sentences = words
            .chunks(chunk_size)
            .map(|chunk| chunk.join(" "))
            .filter(|s| s.chars().count() > MIN_CHUNK_LEN)
            .take(n)
            .collect();
    }

    sentences
}
