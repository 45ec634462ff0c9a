use std::sync::Arc;

use crate::{
    config::Config,
    generator::QuizGenerator,
    nlp::{Annotator, HeuristicAnnotator},
    services::{ExtractionService, SessionService},
};

#[derive(Clone)]
pub struct AppState {
    pub session_service: Arc<SessionService>,
    pub extraction_service: Arc<ExtractionService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let annotator: Arc<dyn Annotator> = Arc::new(HeuristicAnnotator::new());
        let generator = QuizGenerator::new(annotator);

        Self {
            session_service: Arc::new(SessionService::new(generator)),
            extraction_service: Arc::new(ExtractionService::new()),
            config: Arc::new(config),
        }
    }
}
