use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub default_question_count: usize,
    pub max_question_count: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            default_question_count: env::var("DEFAULT_QUESTION_COUNT")
                .ok()
                .and_then(|n| n.parse().ok())
                .unwrap_or(5),
            max_question_count: env::var("MAX_QUESTION_COUNT")
                .ok()
                .and_then(|n| n.parse().ok())
                .unwrap_or(20),
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            default_question_count: 5,
            max_question_count: 20,
        }
    }
}
