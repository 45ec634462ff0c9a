use tokio::sync::RwLock;

use crate::{
    errors::{AppError, AppResult},
    generator::QuizGenerator,
    models::domain::{QuizSession, ScoreReport, SessionPhase},
};

/// Owns the single in-memory quiz session across the answer/submit
/// lifecycle. One generation request or submission runs to completion
/// before the next action touches the state.
pub struct SessionService {
    generator: QuizGenerator,
    session: RwLock<QuizSession>,
}

impl SessionService {
    pub fn new(generator: QuizGenerator) -> Self {
        Self {
            generator,
            session: RwLock::new(QuizSession::idle()),
        }
    }

    /// Runs the full pipeline and replaces the session wholesale: fresh
    /// question set, cleared responses, phase `Active`. Degenerate input
    /// produces an empty-but-active session, never an error.
    pub async fn generate(&self, text: &str, n: usize) -> QuizSession {
        let questions = self.generator.generate(text, n);
        if questions.is_empty() {
            log::warn!("no questions could be generated from the supplied text");
        }

        let fresh = QuizSession::activate(questions);
        let mut session = self.session.write().await;
        *session = fresh.clone();
        fresh
    }

    /// Overwrites the response recorded for one question. Legal in both
    /// `Active` and `Graded` phases; grading is not re-run.
    pub async fn record_answer(&self, index: usize, option: &str) -> AppResult<QuizSession> {
        let mut session = self.session.write().await;
        if session.phase == SessionPhase::Idle {
            return Err(AppError::Conflict(
                "no quiz has been generated yet".to_string(),
            ));
        }

        {
            let question = session.questions.get(index).ok_or_else(|| {
                AppError::ValidationError(format!(
                    "question index {} is out of range (quiz has {} questions)",
                    index,
                    session.questions.len()
                ))
            })?;
            if !question.options.iter().any(|o| o == option) {
                return Err(AppError::ValidationError(format!(
                    "'{}' is not an option of question {}",
                    option, index
                )));
            }
        }

        session.responses[index] = Some(option.to_string());
        Ok(session.clone())
    }

    /// Grades the active session and transitions it to `Graded`.
    pub async fn submit(&self) -> AppResult<ScoreReport> {
        let mut session = self.session.write().await;
        match session.phase {
            SessionPhase::Idle => Err(AppError::Conflict(
                "no quiz has been generated yet".to_string(),
            )),
            SessionPhase::Graded => Err(AppError::Conflict(
                "quiz has already been submitted".to_string(),
            )),
            SessionPhase::Active => {
                session.phase = SessionPhase::Graded;
                session.submitted_at = Some(chrono::Utc::now());
                let report = session.score_report();
                log::info!("quiz graded: {}/{}", report.score, report.total);
                Ok(report)
            }
        }
    }

    pub async fn current(&self) -> QuizSession {
        self.session.read().await.clone()
    }
}
