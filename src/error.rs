use crate::cli::OutputFormat;

#[derive(Debug, thiserror::Error)]
pub enum GrindstoneError {
    #[error("{0}: no such problem")]
    ProblemNotFound(String),

    #[error("{0}: no such flashcard")]
    CardNotFound(String),

    #[error("data directory unavailable: {0}")]
    DataDir(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("parse error: {0}")]
    ParseError(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl GrindstoneError {
    pub fn error_code(&self) -> &str {
        match self {
            GrindstoneError::ProblemNotFound(_) => "problem_not_found",
            GrindstoneError::CardNotFound(_) => "card_not_found",
            GrindstoneError::DataDir(_) => "data_dir",
            GrindstoneError::Storage(_) => "storage",
            GrindstoneError::ParseError(_) => "parse_error",
            GrindstoneError::InvalidArgument(_) => "invalid_argument",
        }
    }
}

pub fn format_error(error: &GrindstoneError, format: &OutputFormat) {
    match format {
        OutputFormat::Human => {
            eprintln!("error: {error}");
        }
        OutputFormat::Json => {
            let json = serde_json::json!({
                "error": error.error_code(),
                "message": error.to_string(),
            });
            eprintln!("{json}");
        }
    }
}
