pub mod extraction_service;
pub mod session_service;

pub use extraction_service::{DocumentKind, ExtractionService};
pub use session_service::SessionService;
