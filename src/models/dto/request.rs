use serde::Deserialize;
use validator::Validate;

/// Generation request. `question_count` falls back to the configured
/// default when omitted; out-of-range counts are rejected rather than
/// clamped (the interactive surface owns clamping).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateQuizRequest {
    pub text: String,

    #[validate(range(min = 1, max = 20))]
    pub question_count: Option<u8>,
}

impl GenerateQuizRequest {
    pub fn resolved_count(&self, default: usize) -> usize {
        self.question_count.map(usize::from).unwrap_or(default)
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RecordAnswerRequest {
    pub question_index: usize,

    #[validate(length(min = 1, max = 200))]
    pub option: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_generate_request() {
        let request = GenerateQuizRequest {
            text: "Some source text".to_string(),
            question_count: Some(5),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_question_count_out_of_range() {
        let request = GenerateQuizRequest {
            text: "Some source text".to_string(),
            question_count: Some(21),
        };
        assert!(request.validate().is_err());

        let request = GenerateQuizRequest {
            text: "Some source text".to_string(),
            question_count: Some(0),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_omitted_count_is_valid_and_resolves_to_default() {
        let request = GenerateQuizRequest {
            text: "Some source text".to_string(),
            question_count: None,
        };
        assert!(request.validate().is_ok());
        assert_eq!(request.resolved_count(5), 5);
    }

    #[test]
    fn test_explicit_count_wins_over_default() {
        let request = GenerateQuizRequest {
            text: "Some source text".to_string(),
            question_count: Some(12),
        };
        assert_eq!(request.resolved_count(5), 12);
    }

    #[test]
    fn test_empty_option_is_rejected() {
        let request = RecordAnswerRequest {
            question_index: 0,
            option: String::new(),
        };
        assert!(request.validate().is_err());
    }
}
