use thiserror::Error;

/// Coarse classification of a [`RequestError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The client sent something unacceptable; answer with a 400-class response.
    BadRequest,
    /// The component was misused or the front-end is misconfigured.
    Logic,
}

/// Errors raised while validating or reading a request context.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Logic(String),
}

impl RequestError {
    pub(crate) fn bad_request<S: Into<String>>(message: S) -> Self {
        Self::BadRequest(message.into())
    }

    pub(crate) fn logic<S: Into<String>>(message: S) -> Self {
        Self::Logic(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::BadRequest(_) => ErrorKind::BadRequest,
            Self::Logic(_) => ErrorKind::Logic,
        }
    }

    pub fn is_bad_request(&self) -> bool {
        matches!(self, Self::BadRequest(_))
    }

    pub fn is_logic(&self) -> bool {
        matches!(self, Self::Logic(_))
    }

    pub fn message(&self) -> &str {
        match self {
            Self::BadRequest(message) | Self::Logic(message) => message,
        }
    }

    /// HTTP status a boundary layer should answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::BadRequest(_) => 400,
            Self::Logic(_) => 500,
        }
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;
