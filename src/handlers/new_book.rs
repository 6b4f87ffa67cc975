use std::path::PathBuf;

use lambda_http::http::StatusCode;
use lambda_http::{Request as LambdaRequest, Response as LambdaResponse};
use lambda_runtime::Error as RuntimeError;
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::adapters::{BlobStore, Notifier, RecordStore};
use crate::book::{BookKey, BookRecord};
use crate::common::errors::{BookError, Error};
use crate::common::event::{extract_event, into_status_response, StatusResponse};
use crate::common::utils::{extract_request, text_response};

pub const BOOK_CREATED: &str = "Your book was created";

#[derive(Debug, Clone, Deserialize)]
pub struct BookAttributes {
    pub author: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Request {
    pub attributes: BookAttributes,
    pub file_path: PathBuf,
}

/// Subject and message announcing a new book on the topic.
pub fn announcement(author: &str, title: &str) -> (String, String) {
    (
        format!("A new book of {}", author),
        format!("{} was just published by {}", title, author),
    )
}

/// Stores the record, uploads the file and announces the book, in that order.
/// The first failing step aborts the rest; earlier steps are not undone.
pub async fn create_new_book(
    request: Request,
    records: &dyn RecordStore,
    blobs: &dyn BlobStore,
    notifier: &dyn Notifier,
) -> Result<BookRecord, BookError> {
    let Request {
        attributes,
        file_path,
    } = request;
    if attributes.author.trim().is_empty() || attributes.title.trim().is_empty() {
        return Err(BookError::InvalidRequest(
            "author and title must not be empty".into(),
        ));
    }

    let record = BookRecord::new(
        BookKey::new(attributes.author, attributes.title),
        attributes.description,
    );

    info!("Creating book instance");
    records.put_book(&record).await?;

    info!("Uploading book to {}", record.storage_key);
    blobs.upload_file(&record.storage_key, &file_path).await?;

    info!("Broadcasting new book message");
    let (subject, message) = announcement(&record.author, &record.title);
    notifier.publish(&subject, &message).await?;

    Ok(record)
}

#[tracing::instrument(skip_all)]
pub async fn process_request(
    request: LambdaRequest,
    records: &dyn RecordStore,
    blobs: &dyn BlobStore,
    notifier: &dyn Notifier,
) -> Result<LambdaResponse<String>, Error> {
    let request = extract_request::<Request>(request)?;
    create_new_book(request, records, blobs, notifier).await?;

    text_response(StatusCode::CREATED, BOOK_CREATED)
}

/// Direct invocation: the event is the request payload.
#[tracing::instrument(skip_all)]
pub async fn process_event(
    event: Value,
    records: &dyn RecordStore,
    blobs: &dyn BlobStore,
    notifier: &dyn Notifier,
) -> Result<StatusResponse, RuntimeError> {
    let result = match extract_event::<Request>(event) {
        Ok(request) => create_new_book(request, records, blobs, notifier)
            .await
            .map(|_| ()),
        Err(err) => Err(err),
    };

    into_status_response(result, StatusCode::CREATED.as_u16(), BOOK_CREATED)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn announcement_text() {
        let (subject, message) = announcement("George R. R. Martin", "A Song of Ice and Fire");
        assert_eq!(subject, "A new book of George R. R. Martin");
        assert_eq!(
            message,
            "A Song of Ice and Fire was just published by George R. R. Martin"
        );
    }

    #[test]
    fn description_is_optional() {
        let request: Request = serde_json::from_str(
            r#"{"attributes": {"author": "a", "title": "t"}, "file_path": "/tmp/book.pdf"}"#,
        )
        .unwrap();

        assert_eq!(request.attributes.description, "");
        assert_eq!(request.file_path, PathBuf::from("/tmp/book.pdf"));
    }
}
