use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One generated multiple-choice question.
///
/// `prompt` is the source sentence with the answer noun blanked out;
/// `options` holds the answer plus three distractors in shuffled order.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub id: String,
    pub prompt: String,
    pub options: Vec<String>,
    pub answer: String,
}

impl Question {
    pub fn new(prompt: String, options: Vec<String>, answer: String) -> Self {
        Question {
            id: Uuid::new_v4().to_string(),
            prompt,
            options,
            answer,
        }
    }

    pub fn is_correct(&self, selected: &str) -> bool {
        self.answer == selected
    }
}
