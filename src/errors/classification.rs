use super::types::SiftError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorClassification {
    pub error_type: &'static str,
    pub exit_code: i32,
}

impl SiftError {
    /// Classify this error to determine its type and the process exit code.
    pub fn classify(&self) -> ErrorClassification {
        match self {
            SiftError::Input { .. } => ErrorClassification {
                error_type: "InputError",
                exit_code: 2,
            },
            SiftError::Json(_) => ErrorClassification {
                error_type: "ParseError",
                exit_code: 3,
            },
            SiftError::Io(_) => ErrorClassification {
                error_type: "IoError",
                exit_code: 1,
            },
            SiftError::Internal(_) => ErrorClassification {
                error_type: "InternalError",
                exit_code: 1,
            },
        }
    }
}
