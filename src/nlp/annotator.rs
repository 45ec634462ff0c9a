use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Coarse part-of-speech tag. The generator only ever needs to know whether
/// a token is a noun, so everything else collapses into `Other`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum PosTag {
    Noun,
    Other,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub tag: PosTag,
}

impl Token {
    pub fn is_noun(&self) -> bool {
        self.tag == PosTag::Noun
    }
}

/// Linguistic annotation service: sentence segmentation plus per-token
/// part-of-speech tagging, scoped to whatever text the caller hands in
/// (a single sentence or a whole document).
#[cfg_attr(test, mockall::automock)]
pub trait Annotator: Send + Sync {
    fn sentences(&self, text: &str) -> Vec<String>;
    fn tag(&self, text: &str) -> Vec<Token>;
}

/// High-frequency English function words. None of these can be a content
/// noun, so the tagger rejects them before any other rule runs.
static FUNCTION_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // articles & determiners
        "the", "this", "that", "these", "those",
        // be-verbs
        "is", "are", "was", "were", "be", "been", "being", "am",
        // auxiliaries
        "have", "has", "had", "do", "does", "did",
        // modals
        "will", "would", "shall", "should", "may", "might", "can", "could", "must",
        // prepositions
        "to", "of", "in", "for", "on", "with", "at", "by", "from", "into", "about",
        // conjunctions & negation
        "and", "or", "but", "not", "no", "if", "then", "than", "so", "as",
        // pronouns
        "i", "you", "he", "she", "it", "we", "they",
        "me", "him", "her", "us", "them",
        "my", "your", "his", "our", "their", "its",
        // interrogatives
        "who", "what", "which", "when", "where", "how", "why",
        // adverbs & quantifiers
        "very", "also", "just", "too", "more", "most",
        "one", "some", "any", "all", "each", "every", "other", "another",
        "such", "like", "only", "own", "same", "new", "old",
        "many", "much", "few", "several",
        "there", "here", "now",
        "up", "out", "off", "over", "under", "between", "through", "after", "before",
        // common verbs that act as function words
        "get", "got", "make", "made", "went", "gone",
        "come", "came", "take", "took", "taken", "give", "gave", "given",
        "said", "says", "say",
    ]
    .into_iter()
    .collect()
});

/// A word directly following one of these is almost always a noun phrase
/// head (or at least inside one).
static DETERMINERS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "a", "an", "this", "that", "these", "those", "my", "your", "his",
        "her", "its", "our", "their", "each", "every", "some", "any", "no",
        "many", "several", "most", "few", "both", "another",
    ]
    .into_iter()
    .collect()
});

/// Derivational suffixes that mark English nominals.
const NOMINAL_SUFFIXES: [&str; 17] = [
    "tion", "sion", "ment", "ness", "ity", "ance", "ence", "ship", "hood",
    "dom", "ism", "ist", "age", "ery", "logy", "graphy", "ure",
];

/// Title and latinism abbreviations whose trailing period does not end a
/// sentence.
static ABBREVIATIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "etc", "eg",
        "ie", "al", "fig", "inc", "ltd", "co", "approx",
    ]
    .into_iter()
    .collect()
});

/// Rule-based annotator. Sentence boundaries are terminator punctuation
/// followed by whitespace and a capital (with an abbreviation guard); nouns
/// are non-function words carrying a nominal suffix or following a
/// determiner.
pub struct HeuristicAnnotator;

impl HeuristicAnnotator {
    pub fn new() -> Self {
        Self
    }

    fn classify(word: &str, previous: Option<&str>) -> PosTag {
        if word.len() < 3 || !word.chars().all(|c| c.is_alphabetic()) {
            return PosTag::Other;
        }
        if FUNCTION_WORDS.contains(word) {
            return PosTag::Other;
        }
        if has_nominal_suffix(word) {
            return PosTag::Noun;
        }
        match previous {
            Some(prev) if DETERMINERS.contains(prev) => PosTag::Noun,
            _ => PosTag::Other,
        }
    }
}

impl Default for HeuristicAnnotator {
    fn default() -> Self {
        Self::new()
    }
}

impl Annotator for HeuristicAnnotator {
    fn sentences(&self, text: &str) -> Vec<String> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let mut out = Vec::new();
        let mut start = 0usize;

        for (pos, &(i, c)) in chars.iter().enumerate() {
            if c != '.' && c != '!' && c != '?' {
                continue;
            }
            // Terminators glued to more text (decimals, initialisms,
            // version numbers) do not end a sentence.
            if let Some(&(_, next)) = chars.get(pos + 1) {
                if !next.is_whitespace() {
                    continue;
                }
            }
            if c == '.' && ends_with_abbreviation(&text[start..i]) {
                continue;
            }
            // The next sentence must open with a capital, digit or quote.
            let mut j = pos + 1;
            while j < chars.len() && chars[j].1.is_whitespace() {
                j += 1;
            }
            if j < chars.len() {
                let opener = chars[j].1;
                if !(opener.is_uppercase()
                    || opener.is_numeric()
                    || opener == '"'
                    || opener == '\u{201C}')
                {
                    continue;
                }
            }

            let after = i + c.len_utf8();
            let span = text[start..after].trim();
            if !span.is_empty() {
                out.push(span.to_string());
            }
            start = after;
        }

        let tail = text[start..].trim();
        if !tail.is_empty() {
            out.push(tail.to_string());
        }
        out
    }

    fn tag(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut previous: Option<String> = None;

        for raw in text.split_whitespace() {
            let clean = raw.trim_matches(|c: char| !c.is_alphanumeric());
            if clean.is_empty() {
                continue;
            }
            let lower = clean.to_lowercase();
            let tag = Self::classify(&lower, previous.as_deref());
            tokens.push(Token {
                text: clean.to_string(),
                tag,
            });
            previous = Some(lower);
        }
        tokens
    }
}

fn has_nominal_suffix(word: &str) -> bool {
    // Plurals count too, so try both the word and its stem; checking the
    // word first keeps -ness/-ism forms that themselves end in 's'.
    let stem = word.strip_suffix('s').unwrap_or(word);
    [word, stem].iter().any(|w| {
        NOMINAL_SUFFIXES
            .iter()
            .any(|suffix| w.len() >= suffix.len() + 2 && w.ends_with(suffix))
    })
}

fn ends_with_abbreviation(prefix: &str) -> bool {
    let last_word: String = prefix
        .rsplit(char::is_whitespace)
        .next()
        .unwrap_or("")
        .chars()
        .filter(|c| c.is_alphabetic())
        .collect();
    ABBREVIATIONS.contains(last_word.to_lowercase().as_str())
}
