// src/application/error_handling.rs
//
// Error handling for command results
//
// - Maps internal errors to presentation-friendly responses
// - Provides one error format for every command
// - Logs storage failures in full; the response carries a summary

use serde::{Deserialize, Serialize};

use crate::domain::ViolationKind;
use crate::error::AppError;

/// Standard error response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violation: Option<ViolationKind>,
    pub details: Option<String>,
}

/// Error categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Unknown identifier
    NotFound,

    /// Rejected by a constraint check
    Validation,

    /// Database or pool failure
    Database,

    /// File system failure
    FileSystem,

    /// Invalid configuration
    Configuration,

    /// Anything else
    Internal,
}

impl ErrorResponse {
    pub fn from_app_error(error: AppError) -> Self {
        match error {
            AppError::NotFound(resource) => Self::not_found(&resource),

            AppError::Constraint(violation) => Self {
                success: false,
                error_type: ErrorType::Validation,
                message: violation.message().to_string(),
                violation: Some(violation.kind()),
                details: Some(violation.kind().to_string()),
            },

            AppError::Database(db_error) => {
                log::error!("Database error: {:?}", db_error);
                Self::internal(ErrorType::Database, "Database operation failed", Some(db_error.to_string()))
            }

            AppError::Pool(pool_error) => {
                log::error!("Connection pool error: {}", pool_error);
                Self::internal(ErrorType::Database, "Database connection failed", None)
            }

            AppError::Storage(message) => {
                log::error!("Storage error: {}", message);
                Self::internal(ErrorType::Database, "Storage operation failed", Some(message))
            }

            AppError::Io(io_error) => {
                log::error!("IO error: {:?}", io_error);
                Self::internal(ErrorType::FileSystem, "File system operation failed", Some(io_error.to_string()))
            }

            AppError::Serialization(serde_error) => {
                log::error!("Serialization error: {:?}", serde_error);
                Self::internal(ErrorType::Internal, "Data serialization failed", None)
            }

            AppError::Config(message) => Self::internal(ErrorType::Configuration, &message, None),

            AppError::Other(message) => {
                log::error!("Other error: {}", message);
                Self::internal(ErrorType::Internal, &message, None)
            }
        }
    }

    pub fn not_found(resource: &str) -> Self {
        Self {
            success: false,
            error_type: ErrorType::NotFound,
            message: format!("{} not found", resource),
            violation: None,
            details: None,
        }
    }

    fn internal(error_type: ErrorType, message: &str, details: Option<String>) -> Self {
        Self {
            success: false,
            error_type,
            message: message.to_string(),
            violation: None,
            details,
        }
    }
}

/// Helper trait to convert Results into serialized ErrorResponses
pub trait ToErrorResponse<T> {
    fn to_error_response(self) -> Result<T, String>;
}

impl<T> ToErrorResponse<T> for Result<T, AppError> {
    fn to_error_response(self) -> Result<T, String> {
        self.map_err(|e| {
            let error_response = ErrorResponse::from_app_error(e);
            serde_json::to_string(&error_response).unwrap_or_else(|_| "Internal error".to_string())
        })
    }
}
