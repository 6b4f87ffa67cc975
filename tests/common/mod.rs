//! In-memory stand-ins for DynamoDB, S3, SNS and SES.

#![allow(dead_code)]

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use book_lambdas::adapters::{BlobStore, Mailer, Notifier, RecordStore};
use book_lambdas::book::{BookKey, BookRecord};
use book_lambdas::common::errors::BookError;
use lambda_http::{Body, Request};

#[derive(Debug, Clone, PartialEq)]
pub struct SentEmail {
    pub to: Vec<String>,
    pub subject: String,
    pub body: String,
}

#[derive(Default)]
pub struct FakeTable {
    items: Mutex<HashMap<BookKey, BookRecord>>,
    fail: bool,
}

#[derive(Default)]
pub struct FakeBucket {
    objects: Mutex<HashMap<String, Vec<u8>>>,
    fail: bool,
}

#[derive(Default)]
pub struct FakeTopic {
    notifications: Mutex<Vec<(String, String)>>,
    fail: bool,
}

#[derive(Default)]
pub struct FakeMailbox {
    sent: Mutex<Vec<SentEmail>>,
    fail: bool,
}

fn unavailable(service: &str) -> Box<dyn std::error::Error + Send + Sync> {
    format!("{} unavailable", service).into()
}

#[async_trait]
impl RecordStore for FakeTable {
    async fn put_book(&self, record: &BookRecord) -> Result<(), BookError> {
        if self.fail {
            return Err(BookError::RecordStore(unavailable("dynamodb")));
        }
        let mut items = self.items.lock().expect("poisoned mutex");
        if items.contains_key(&record.key()) {
            return Err(BookError::AlreadyExists {
                author: record.author.clone(),
                title: record.title.clone(),
            });
        }
        items.insert(record.key(), record.clone());
        Ok(())
    }

    async fn get_book(&self, key: &BookKey) -> Result<Option<BookRecord>, BookError> {
        if self.fail {
            return Err(BookError::RecordStore(unavailable("dynamodb")));
        }
        Ok(self.items.lock().expect("poisoned mutex").get(key).cloned())
    }
}

#[async_trait]
impl BlobStore for FakeBucket {
    async fn upload_file(&self, key: &str, path: &Path) -> Result<(), BookError> {
        if self.fail {
            return Err(BookError::BlobStore(unavailable("s3")));
        }
        let body = std::fs::read(path).map_err(BookError::blob_store)?;
        self.objects
            .lock()
            .expect("poisoned mutex")
            .insert(key.to_string(), body);
        Ok(())
    }
}

#[async_trait]
impl Notifier for FakeTopic {
    async fn publish(&self, subject: &str, message: &str) -> Result<(), BookError> {
        if self.fail {
            return Err(BookError::Notification(unavailable("sns")));
        }
        self.notifications
            .lock()
            .expect("poisoned mutex")
            .push((subject.to_string(), message.to_string()));
        Ok(())
    }
}

#[async_trait]
impl Mailer for FakeMailbox {
    async fn send(&self, to: &[String], subject: &str, body: &str) -> Result<(), BookError> {
        if self.fail {
            return Err(BookError::Mail(unavailable("ses")));
        }
        self.sent.lock().expect("poisoned mutex").push(SentEmail {
            to: to.to_vec(),
            subject: subject.to_string(),
            body: body.to_string(),
        });
        Ok(())
    }
}

/// All four services, plus assertions over what they received.
#[derive(Default)]
pub struct Fixture {
    pub table: FakeTable,
    pub bucket: FakeBucket,
    pub topic: FakeTopic,
    pub mailbox: FakeMailbox,
}

impl Fixture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_table() -> Self {
        Self {
            table: FakeTable {
                fail: true,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    pub fn failing_bucket() -> Self {
        Self {
            bucket: FakeBucket {
                fail: true,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    pub fn failing_topic() -> Self {
        Self {
            topic: FakeTopic {
                fail: true,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    pub fn failing_mailbox() -> Self {
        Self {
            mailbox: FakeMailbox {
                fail: true,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    pub fn data_path() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/resources")
    }

    pub fn add_book(&self, author: &str, title: &str) {
        let record = BookRecord::new(BookKey::new(author, title), "A test description");
        self.table
            .items
            .lock()
            .expect("poisoned mutex")
            .insert(record.key(), record);
    }

    pub fn book(&self, author: &str, title: &str) -> Option<BookRecord> {
        self.table
            .items
            .lock()
            .expect("poisoned mutex")
            .get(&BookKey::new(author, title))
            .cloned()
    }

    pub fn object(&self, key: &str) -> Option<Vec<u8>> {
        self.bucket
            .objects
            .lock()
            .expect("poisoned mutex")
            .get(key)
            .cloned()
    }

    pub fn object_count(&self) -> usize {
        self.bucket.objects.lock().expect("poisoned mutex").len()
    }

    pub fn notifications(&self) -> Vec<(String, String)> {
        self.topic
            .notifications
            .lock()
            .expect("poisoned mutex")
            .clone()
    }

    pub fn sent_emails(&self) -> Vec<SentEmail> {
        self.mailbox.sent.lock().expect("poisoned mutex").clone()
    }

    pub fn assert_dynamo_item(&self, author: &str, title: &str) {
        assert!(
            self.book(author, title).is_some(),
            "no item for '{}' by {}",
            title,
            author
        );
    }

    pub fn assert_s3_object(&self, key: &str, expected_text: &str) {
        let body = self.object(key).unwrap_or_else(|| panic!("no object at {}", key));
        let body = String::from_utf8(body).expect("object is utf-8");
        assert!(body.contains(expected_text), "object body: {:?}", body);
    }

    pub fn assert_new_book_message_sent(&self, expected_message: &str) {
        let notifications = self.notifications();
        let (_, message) = notifications.first().expect("no notification published");
        assert!(message.contains(expected_message), "message: {:?}", message);
    }

    pub fn assert_recommendation_email_sent(&self, expected_body: &str) {
        let emails = self.sent_emails();
        let email = emails.first().expect("no email sent");
        assert!(email.body.contains(expected_body), "body: {:?}", email.body);
    }
}

/// API Gateway style request carrying a JSON body.
pub fn json_request(body: &serde_json::Value) -> Request {
    lambda_http::http::Request::builder()
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("valid request")
}

/// Direct invocation event as the original handlers receive it: the payload
/// serialized into a JSON string.
pub fn dumped_event(payload: &serde_json::Value) -> serde_json::Value {
    serde_json::Value::String(payload.to_string())
}
