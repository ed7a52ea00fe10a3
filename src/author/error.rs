use thiserror::Error;

pub type AuthorResult<T> = Result<T, AuthorError>;

type BoxedCause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failures raised by author validation and persistence.
#[derive(Debug, Error)]
pub enum AuthorError {
    /// Malformed UUID or email. UUID failures keep the parser error.
    #[error("{message}")]
    InvalidFormat {
        message: String,
        #[source]
        source: Option<uuid::Error>,
    },
    /// Token, hash or email length out of bounds.
    #[error("{0}")]
    InvalidLength(String),
    /// Required field is blank.
    #[error("{0}")]
    EmptyValue(String),
    /// Connectivity, constraint or row decoding failure at the database boundary.
    #[error("{context}: {source}")]
    Storage {
        context: &'static str,
        #[source]
        source: BoxedCause,
    },
}

impl AuthorError {
    pub(crate) fn storage<E>(context: &'static str, source: E) -> Self
    where
        E: Into<BoxedCause>,
    {
        Self::Storage {
            context,
            source: source.into(),
        }
    }

    pub(crate) fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            message: message.into(),
            source: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn storage_keeps_cause_in_chain() {
        let inner = AuthorError::EmptyValue("username is empty".into());
        let err = AuthorError::storage("decode author row", inner);

        assert_eq!(err.to_string(), "decode author row: username is empty");
        let cause = err.source().expect("cause is chained");
        assert_eq!(cause.to_string(), "username is empty");
    }

    #[test]
    fn validation_kinds_display_bare_message() {
        let err = AuthorError::InvalidLength("hash must be 97 characters".into());
        assert_eq!(err.to_string(), "hash must be 97 characters");
        assert!(err.source().is_none());

        let err = AuthorError::invalid_format("email is not valid");
        assert_eq!(err.to_string(), "email is not valid");
        assert!(err.source().is_none());
    }
}
