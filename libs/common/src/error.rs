//! Custom error types for the common library
//!
//! This module defines the database error taxonomy that services map onto
//! their own responses.

use sqlx::Error as SqlxError;
use thiserror::Error;

/// Custom error type for database operations
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Error occurred while establishing a connection
    #[error("Database connection error: {0}")]
    Connection(#[source] SqlxError),

    /// Error occurred during query execution
    #[error("Database query error: {0}")]
    Query(#[source] SqlxError),

    /// Configuration error
    #[error("Database configuration error: {0}")]
    Configuration(String),
}

impl DatabaseError {
    /// The underlying message, without the category prefix
    pub fn driver_message(&self) -> String {
        match self {
            DatabaseError::Connection(e) | DatabaseError::Query(e) => e.to_string(),
            DatabaseError::Configuration(msg) => msg.clone(),
        }
    }
}

/// Type alias for Result with DatabaseError
pub type DatabaseResult<T> = Result<T, DatabaseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_driver_message_strips_prefix() {
        let err = DatabaseError::Query(SqlxError::RowNotFound);
        assert_eq!(err.driver_message(), SqlxError::RowNotFound.to_string());
        assert!(err.to_string().starts_with("Database query error: "));

        let err = DatabaseError::Configuration("Invalid database URL".to_string());
        assert_eq!(err.driver_message(), "Invalid database URL");
    }
}
