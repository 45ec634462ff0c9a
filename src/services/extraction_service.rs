use std::panic::{catch_unwind, AssertUnwindSafe};

/// Declared content type of an uploaded document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    PlainText,
}

impl DocumentKind {
    /// Maps a `Content-Type` header value (parameters ignored) to a
    /// supported document kind.
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        let essence = content_type.split(';').next().unwrap_or("").trim();
        match essence {
            "application/pdf" => Some(DocumentKind::Pdf),
            "text/plain" => Some(DocumentKind::PlainText),
            _ => None,
        }
    }
}

/// Best-effort text extraction from uploaded documents. Extraction never
/// fails outward: an unreadable document degrades to empty text and the
/// pipeline downstream produces an empty question set.
pub struct ExtractionService;

impl ExtractionService {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(&self, bytes: &[u8], kind: DocumentKind) -> String {
        match kind {
            DocumentKind::PlainText => String::from_utf8_lossy(bytes).into_owned(),
            DocumentKind::Pdf => self.extract_pdf(bytes),
        }
    }

    /// Two strategies in sequence: `pdf-extract` first, `lopdf` page
    /// extraction only if the first raises.
    fn extract_pdf(&self, bytes: &[u8]) -> String {
        // pdf-extract can panic on malformed documents, which counts as the
        // first strategy raising.
        let primary = catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem(bytes)));
        match primary {
            Ok(Ok(text)) => text,
            Ok(Err(err)) => {
                log::warn!("primary pdf extraction failed: {err}; trying lopdf");
                Self::extract_with_lopdf(bytes)
            }
            Err(_) => {
                log::warn!("primary pdf extraction panicked; trying lopdf");
                Self::extract_with_lopdf(bytes)
            }
        }
    }

    fn extract_with_lopdf(bytes: &[u8]) -> String {
        let extracted = lopdf::Document::load_mem(bytes).and_then(|document| {
            let pages: Vec<u32> = document.get_pages().keys().copied().collect();
            document.extract_text(&pages)
        });
        match extracted {
            Ok(text) => text,
            Err(err) => {
                log::warn!("fallback pdf extraction failed: {err}; treating document as empty");
                String::new()
            }
        }
    }
}

impl Default for ExtractionService {
    fn default() -> Self {
        Self::new()
    }
}
