pub mod question;
pub mod session;

pub use question::Question;
pub use session::{QuestionResult, QuizSession, ScoreReport, SessionPhase};
