use crate::common::errors::BookError;

pub const BOOKS_TABLE_VAR: &str = "BOOKS_TABLE";
pub const BOOKS_BUCKET_VAR: &str = "BOOKS_BUCKET";
pub const NEW_BOOK_TOPIC_ARN_VAR: &str = "NEW_BOOK_TOPIC_ARN";
pub const RECOMMENDATION_SOURCE_EMAIL_VAR: &str = "RECOMMENDATION_SOURCE_EMAIL";

/// Settings of the "create new book" entry point.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBookConfig {
    pub books_table: String,
    pub books_bucket: String,
    pub new_book_topic_arn: String,
}

/// Settings of the "send recommendation" entry point.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationConfig {
    pub books_table: String,
    pub recommendation_source_email: String,
}

impl NewBookConfig {
    pub fn from_env() -> Result<Self, BookError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, BookError> {
        Ok(Self {
            books_table: required(&lookup, BOOKS_TABLE_VAR)?,
            books_bucket: required(&lookup, BOOKS_BUCKET_VAR)?,
            new_book_topic_arn: required(&lookup, NEW_BOOK_TOPIC_ARN_VAR)?,
        })
    }
}

impl RecommendationConfig {
    pub fn from_env() -> Result<Self, BookError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, BookError> {
        Ok(Self {
            books_table: required(&lookup, BOOKS_TABLE_VAR)?,
            recommendation_source_email: required(&lookup, RECOMMENDATION_SOURCE_EMAIL_VAR)?,
        })
    }
}

/// Name of the books table, for tooling that needs nothing else.
pub fn books_table_from_env() -> Result<String, BookError> {
    required(&|name: &str| std::env::var(name).ok(), BOOKS_TABLE_VAR)
}

fn required(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<String, BookError> {
    match lookup(name) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(BookError::Config(name)),
    }
}
