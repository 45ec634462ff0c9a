use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::question::Question;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum SessionPhase {
    Idle,
    Active,
    Graded,
}

/// The one in-memory quiz session. A new generation request replaces it
/// wholesale; responses live and die with the question set they index.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizSession {
    pub id: String,
    pub questions: Vec<Question>,
    pub responses: Vec<Option<String>>,
    pub phase: SessionPhase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    pub fn idle() -> Self {
        QuizSession {
            id: Uuid::new_v4().to_string(),
            questions: Vec::new(),
            responses: Vec::new(),
            phase: SessionPhase::Idle,
            generated_at: None,
            submitted_at: None,
        }
    }

    /// Fresh `Active` session around a newly generated question set, with
    /// every response cleared. An empty set is still a valid active session.
    pub fn activate(questions: Vec<Question>) -> Self {
        let responses = vec![None; questions.len()];
        QuizSession {
            id: Uuid::new_v4().to_string(),
            questions,
            responses,
            phase: SessionPhase::Active,
            generated_at: Some(Utc::now()),
            submitted_at: None,
        }
    }

    /// Count of responses matching their question's answer.
    pub fn score(&self) -> usize {
        self.questions
            .iter()
            .zip(self.responses.iter())
            .filter(|(question, response)| response.as_deref() == Some(question.answer.as_str()))
            .count()
    }

    pub fn score_report(&self) -> ScoreReport {
        let results: Vec<QuestionResult> = self
            .questions
            .iter()
            .zip(self.responses.iter())
            .enumerate()
            .map(|(index, (question, response))| QuestionResult {
                index,
                prompt: question.prompt.clone(),
                options: question.options.clone(),
                selected: response.clone(),
                answer: question.answer.clone(),
                correct: response.as_deref() == Some(question.answer.as_str()),
            })
            .collect();

        ScoreReport {
            score: results.iter().filter(|r| r.correct).count(),
            total: results.len(),
            results,
            submitted_at: self.submitted_at,
        }
    }
}

/// Per-question grading outcome, revealed on submission.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionResult {
    pub index: usize,
    pub prompt: String,
    pub options: Vec<String>,
    pub selected: Option<String>,
    pub answer: String,
    pub correct: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScoreReport {
    pub score: usize,
    pub total: usize,
    pub results: Vec<QuestionResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime<Utc>>,
}
