// Error types for the herodex application.
// Covers backend API failures, JSON decoding, and terminal IO.

#![allow(dead_code)]

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HerodexError {
    #[error("backend request failed: {0}")]
    Api(#[from] reqwest::Error),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, HerodexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_the_rendered_message() {
        let err = HerodexError::NotFound("http://localhost:4000/superheroes".to_string());
        assert_eq!(
            err.to_string(),
            "resource not found: http://localhost:4000/superheroes"
        );

        let err = HerodexError::Other("HTTP 500: boom".to_string());
        assert_eq!(err.to_string(), "HTTP 500: boom");
    }
}
