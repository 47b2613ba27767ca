use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Id exhausted: {0}")]
    IdExhausted(String),
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::IdExhausted(_) => "ID_EXHAUSTED",
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1))]
        name: String,
    }

    #[test]
    fn test_error_messages() {
        let err = AppError::ValidationError("title".into());
        assert_eq!(err.to_string(), "Validation error: title");
        assert_eq!(err.error_code(), "VALIDATION_ERROR");

        let err = AppError::IdExhausted("question ids".into());
        assert_eq!(err.to_string(), "Id exhausted: question ids");
        assert_eq!(err.error_code(), "ID_EXHAUSTED");
    }

    #[test]
    fn test_from_validation_errors() {
        let sample = Sample {
            name: String::new(),
        };
        let err: AppError = sample.validate().unwrap_err().into();

        match err {
            AppError::ValidationError(msg) => assert!(msg.contains("name")),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
