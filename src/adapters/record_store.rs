use async_trait::async_trait;
use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::create_table::CreateTableError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::types::{
    AttributeDefinition, BillingMode, KeySchemaElement, KeyType, ScalarAttributeType,
};
use tracing::{error, info};

use crate::adapters::RecordStore;
use crate::book::{BookKey, BookRecord, AUTHOR_ATTRIBUTE, TITLE_ATTRIBUTE};
use crate::common::errors::BookError;

#[derive(Debug, Clone)]
pub struct DynamoRecordStore {
    client: aws_sdk_dynamodb::Client,
    table_name: String,
}

impl DynamoRecordStore {
    pub fn new(client: aws_sdk_dynamodb::Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Creates the books table keyed by `Author` (hash) and `Title` (range).
    /// Returns `false` when the table already exists.
    pub async fn create_table(&self) -> Result<bool, BookError> {
        let author_key = KeySchemaElement::builder()
            .attribute_name(AUTHOR_ATTRIBUTE)
            .key_type(KeyType::Hash)
            .build()
            .map_err(BookError::record_store)?;
        let title_key = KeySchemaElement::builder()
            .attribute_name(TITLE_ATTRIBUTE)
            .key_type(KeyType::Range)
            .build()
            .map_err(BookError::record_store)?;
        let author_definition = AttributeDefinition::builder()
            .attribute_name(AUTHOR_ATTRIBUTE)
            .attribute_type(ScalarAttributeType::S)
            .build()
            .map_err(BookError::record_store)?;
        let title_definition = AttributeDefinition::builder()
            .attribute_name(TITLE_ATTRIBUTE)
            .attribute_type(ScalarAttributeType::S)
            .build()
            .map_err(BookError::record_store)?;

        info!("Creating table {}", self.table_name);
        let result = self
            .client
            .create_table()
            .table_name(&self.table_name)
            .key_schema(author_key)
            .key_schema(title_key)
            .attribute_definitions(author_definition)
            .attribute_definitions(title_definition)
            .billing_mode(BillingMode::PayPerRequest)
            .send()
            .await;

        match result {
            Ok(output) => {
                info!(
                    "Table created: {:?}",
                    output.table_description().and_then(|table| table.table_arn())
                );
                Ok(true)
            }
            Err(SdkError::ServiceError(val)) => match val.err() {
                CreateTableError::ResourceInUseException(_) => {
                    info!("Table {} already exists", self.table_name);
                    Ok(false)
                }
                _ => Err(BookError::record_store(SdkError::ServiceError(val))),
            },
            Err(err) => Err(BookError::record_store(err)),
        }
    }
}

#[async_trait]
impl RecordStore for DynamoRecordStore {
    async fn put_book(&self, record: &BookRecord) -> Result<(), BookError> {
        info!("Putting item for '{}' by {}", record.title, record.author);
        let result = self
            .client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(record.clone().into()))
            .condition_expression("attribute_not_exists(#author)")
            .expression_attribute_names("#author", AUTHOR_ATTRIBUTE)
            .send()
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(SdkError::ServiceError(val)) => match val.err() {
                PutItemError::ConditionalCheckFailedException(_) => {
                    error!("Book already exists");
                    Err(BookError::AlreadyExists {
                        author: record.author.clone(),
                        title: record.title.clone(),
                    })
                }
                _ => Err(BookError::record_store(SdkError::ServiceError(val))),
            },
            Err(err) => Err(BookError::record_store(err)),
        }
    }

    async fn get_book(&self, key: &BookKey) -> Result<Option<BookRecord>, BookError> {
        info!("Getting item for '{}' by {}", key.title, key.author);
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(key.to_key()))
            .send()
            .await
            .map_err(BookError::record_store)?;

        output.item.map(BookRecord::try_from).transpose()
    }
}
