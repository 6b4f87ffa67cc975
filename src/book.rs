use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use crate::common::errors::BookError;

pub const AUTHOR_ATTRIBUTE: &str = "Author";
pub const TITLE_ATTRIBUTE: &str = "Title";
pub const DESCRIPTION_ATTRIBUTE: &str = "Description";
pub const STORAGE_KEY_ATTRIBUTE: &str = "S3Key";

/// Identity of a book in the table: partition key `Author`, sort key `Title`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BookKey {
    pub author: String,
    pub title: String,
}

impl BookKey {
    pub fn new(author: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            title: title.into(),
        }
    }

    /// Object key of the uploaded book file.
    pub fn storage_key(&self) -> String {
        format!("books/{}/{}", self.author, self.title)
    }

    pub fn to_key(&self) -> HashMap<String, AttributeValue> {
        HashMap::from([
            (
                AUTHOR_ATTRIBUTE.to_string(),
                AttributeValue::S(self.author.clone()),
            ),
            (
                TITLE_ATTRIBUTE.to_string(),
                AttributeValue::S(self.title.clone()),
            ),
        ])
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRecord {
    pub author: String,
    pub title: String,
    pub description: String,
    pub storage_key: String,
}

impl BookRecord {
    pub fn new(key: BookKey, description: impl Into<String>) -> Self {
        let storage_key = key.storage_key();
        Self {
            author: key.author,
            title: key.title,
            description: description.into(),
            storage_key,
        }
    }

    pub fn key(&self) -> BookKey {
        BookKey::new(&self.author, &self.title)
    }
}

impl From<BookRecord> for HashMap<String, AttributeValue> {
    fn from(record: BookRecord) -> Self {
        HashMap::from([
            (AUTHOR_ATTRIBUTE.to_string(), AttributeValue::S(record.author)),
            (TITLE_ATTRIBUTE.to_string(), AttributeValue::S(record.title)),
            (
                DESCRIPTION_ATTRIBUTE.to_string(),
                AttributeValue::S(record.description),
            ),
            (
                STORAGE_KEY_ATTRIBUTE.to_string(),
                AttributeValue::S(record.storage_key),
            ),
        ])
    }
}

impl TryFrom<HashMap<String, AttributeValue>> for BookRecord {
    type Error = BookError;

    fn try_from(mut item: HashMap<String, AttributeValue>) -> Result<Self, Self::Error> {
        let author = take_string(&mut item, AUTHOR_ATTRIBUTE)?
            .ok_or_else(|| BookError::MalformedItem(format!("{} is missing", AUTHOR_ATTRIBUTE)))?;
        let title = take_string(&mut item, TITLE_ATTRIBUTE)?
            .ok_or_else(|| BookError::MalformedItem(format!("{} is missing", TITLE_ATTRIBUTE)))?;
        let description = take_string(&mut item, DESCRIPTION_ATTRIBUTE)?.unwrap_or_default();
        // hand-written items may lack the object key
        let storage_key = match take_string(&mut item, STORAGE_KEY_ATTRIBUTE)? {
            Some(val) => val,
            None => BookKey::new(&author, &title).storage_key(),
        };

        Ok(Self {
            author,
            title,
            description,
            storage_key,
        })
    }
}

fn take_string(
    item: &mut HashMap<String, AttributeValue>,
    name: &str,
) -> Result<Option<String>, BookError> {
    match item.remove(name) {
        None => Ok(None),
        Some(AttributeValue::S(val)) => Ok(Some(val)),
        Some(other) => Err(BookError::MalformedItem(format!(
            "{} is not a string: {:?}",
            name, other
        ))),
    }
}
