pub mod document_handler;
pub mod quiz_handler;

pub use document_handler::extract_document;
pub use quiz_handler::{generate_quiz, get_quiz, health_check, record_answer, submit_quiz};
