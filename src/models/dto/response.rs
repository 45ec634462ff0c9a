use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::{QuizSession, ScoreReport, SessionPhase};

/// A question as shown while answering: prompt and options only. The
/// answer stays server-side until the session is graded.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionDto {
    pub index: usize,
    pub prompt: String,
    pub options: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub session_id: String,
    pub phase: SessionPhase,
    pub questions: Vec<QuestionDto>,
    pub responses: Vec<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<ScoreReport>,
}

impl From<&QuizSession> for SessionView {
    fn from(session: &QuizSession) -> Self {
        let questions = session
            .questions
            .iter()
            .enumerate()
            .map(|(index, question)| QuestionDto {
                index,
                prompt: question.prompt.clone(),
                options: question.options.clone(),
            })
            .collect();

        let report = match session.phase {
            SessionPhase::Graded => Some(session.score_report()),
            _ => None,
        };

        SessionView {
            session_id: session.id.clone(),
            phase: session.phase,
            questions,
            responses: session.responses.clone(),
            generated_at: session.generated_at,
            report,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ExtractTextResponse {
    pub text: String,
    pub character_count: usize,
}

impl ExtractTextResponse {
    pub fn new(text: String) -> Self {
        let character_count = text.chars().count();
        ExtractTextResponse {
            text,
            character_count,
        }
    }
}
