//! Seams to the managed services used by the entry points.
//!
//! Each trait has one AWS-backed implementation; the handlers only see the
//! traits so they can be driven by in-memory doubles in tests.

use std::path::Path;

use async_trait::async_trait;

use crate::book::{BookKey, BookRecord};
use crate::common::errors::BookError;

pub mod blob_store;
pub mod mailer;
pub mod notifier;
pub mod record_store;

pub use blob_store::S3BlobStore;
pub use mailer::SesMailer;
pub use notifier::SnsNotifier;
pub use record_store::DynamoRecordStore;

/// Key-value table holding book metadata.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Stores a new book. Fails with [`BookError::AlreadyExists`] when the
    /// (author, title) pair is taken.
    async fn put_book(&self, record: &BookRecord) -> Result<(), BookError>;

    async fn get_book(&self, key: &BookKey) -> Result<Option<BookRecord>, BookError>;
}

/// Object store holding uploaded book files.
#[async_trait]
pub trait BlobStore: Send + Sync {
    async fn upload_file(&self, key: &str, path: &Path) -> Result<(), BookError>;
}

/// Topic announcing new books.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn publish(&self, subject: &str, message: &str) -> Result<(), BookError>;
}

/// Outgoing text email.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, to: &[String], subject: &str, body: &str) -> Result<(), BookError>;
}
