use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub question_id_start: u64,
    pub choice_id_start: u64,
    pub log_filter: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            question_id_start: parse_id_start(env::var("QUESTION_ID_START").ok()),
            choice_id_start: parse_id_start(env::var("CHOICE_ID_START").ok()),
            log_filter: env::var("LOG_FILTER").unwrap_or_else(|_| "info".to_string()),
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            question_id_start: 1000,
            choice_id_start: 10,
            log_filter: "debug".to_string(),
        }
    }
}

/// Missing or unparsable starts fall back to 1
fn parse_id_start(value: Option<String>) -> u64 {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(1)
}
