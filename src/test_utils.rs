use crate::models::domain::Question;

#[cfg(test)]
pub mod fixtures {
    use super::*;

    /// Eight well-formed sentences, each carrying several heuristic-taggable
    /// nouns, with enough distinct nouns document-wide to fill distractor
    /// pools without backfill.
    pub fn sample_document() -> &'static str {
        "The government announced a new taxation policy in the parliament. \
         The decision faced criticism from the opposition. \
         Many citizens joined a demonstration in the capital. \
         The administration defended the regulation during a television interview. \
         A spokesman said the situation required patience. \
         The organization published information about the education budget. \
         Several economists questioned the direction of the nation. \
         The population expected an explanation from the ministry."
    }

    /// One sentence, one noun: forces generic distractor backfill.
    pub fn noun_poor_text() -> &'static str {
        "The harbour stayed calm throughout winter."
    }

    /// Creates a question with a known answer and generic wrong options.
    pub fn test_question(answer: &str) -> Question {
        Question::new(
            "The ______ was discussed at length".to_string(),
            vec![
                answer.to_string(),
                "person".to_string(),
                "place".to_string(),
                "idea".to_string(),
            ],
            answer.to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_sample_document_is_multi_sentence() {
        assert!(sample_document().matches(". ").count() >= 6);
    }

    #[test]
    fn test_test_question_answer_is_an_option() {
        let question = test_question("budget");
        assert!(question.options.contains(&question.answer));
        assert_eq!(question.options.len(), 4);
    }
}
