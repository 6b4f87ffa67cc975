use lambda_http::http::StatusCode;
use lambda_http::{Error as LambdaError, Response};
use thiserror::Error as ThisError;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failures of the book workflows, before they are mapped to a Lambda outcome.
#[derive(Debug, ThisError)]
pub enum BookError {
    #[error("missing configuration: {0} is not set")]
    Config(&'static str),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("book '{title}' by {author} was not found")]
    NotFound { author: String, title: String },

    #[error("book '{title}' by {author} already exists")]
    AlreadyExists { author: String, title: String },

    #[error("malformed item in books table: {0}")]
    MalformedItem(String),

    #[error("record store request failed")]
    RecordStore(#[source] BoxError),

    #[error("blob store request failed")]
    BlobStore(#[source] BoxError),

    #[error("notification request failed")]
    Notification(#[source] BoxError),

    #[error("mail request failed")]
    Mail(#[source] BoxError),
}

impl BookError {
    pub fn record_store(err: impl Into<BoxError>) -> Self {
        Self::RecordStore(err.into())
    }

    pub fn blob_store(err: impl Into<BoxError>) -> Self {
        Self::BlobStore(err.into())
    }

    pub fn notification(err: impl Into<BoxError>) -> Self {
        Self::Notification(err.into())
    }

    pub fn mail(err: impl Into<BoxError>) -> Self {
        Self::Mail(err.into())
    }

    /// Status returned to the caller for rejections, `None` for failures that
    /// should surface to the runtime.
    pub fn status_code(&self) -> Option<StatusCode> {
        match self {
            Self::InvalidRequest(_) => Some(StatusCode::BAD_REQUEST),
            Self::NotFound { .. } => Some(StatusCode::NOT_FOUND),
            Self::AlreadyExists { .. } => Some(StatusCode::CONFLICT),
            _ => None,
        }
    }
}

/// Outcome of a request handler that is not a success response.
#[derive(Debug)]
pub enum Error {
    /// Rejection that is answered with a regular response.
    HttpError(Response<String>),
    /// Failure handed back to the Lambda runtime.
    LambdaError(LambdaError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::HttpError(response) => {
                write!(f, "{}: {}", response.status(), response.body())
            }
            Error::LambdaError(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for Error {}

impl From<lambda_http::http::Error> for Error {
    fn from(err: lambda_http::http::Error) -> Self {
        Error::LambdaError(Box::new(err))
    }
}

impl From<BookError> for Error {
    fn from(err: BookError) -> Self {
        match err.status_code() {
            Some(status) => match super::utils::text_response(status, err.to_string()) {
                Ok(response) => Error::HttpError(response),
                Err(err) => err,
            },
            None => Error::LambdaError(Box::new(err)),
        }
    }
}

/// Collapses a handler result into what `lambda_http::run` expects.
pub fn into_lambda_result(
    result: Result<Response<String>, Error>,
) -> Result<Response<String>, LambdaError> {
    match result {
        Ok(val) => Ok(val),
        Err(Error::HttpError(val)) => Ok(val),
        Err(Error::LambdaError(err)) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejections_become_responses() {
        let err: Error = BookError::NotFound {
            author: "Aldous Huxley".into(),
            title: "Island".into(),
        }
        .into();

        let response = into_lambda_result(Err(err)).expect("rejection is a response");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.body().contains("Island"));
    }

    #[test]
    fn duplicates_are_conflicts() {
        let err = BookError::AlreadyExists {
            author: "a".into(),
            title: "t".into(),
        };
        assert_eq!(err.status_code(), Some(StatusCode::CONFLICT));
    }

    #[test]
    fn service_failures_reach_the_runtime() {
        let source = std::io::Error::new(std::io::ErrorKind::Other, "throttled");
        let err: Error = BookError::notification(source).into();

        let err = into_lambda_result(Err(err)).expect_err("service failure propagates");
        assert_eq!(err.to_string(), "notification request failed");
    }

    #[test]
    fn config_errors_name_the_variable() {
        let err = BookError::Config("BOOKS_TABLE");
        assert_eq!(
            err.to_string(),
            "missing configuration: BOOKS_TABLE is not set"
        );
        assert!(err.status_code().is_none());
    }
}
