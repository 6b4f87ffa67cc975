//! Lambda handlers that register new books and mail book recommendations.
//!
//! - `new-book`: stores the record in DynamoDB, uploads the file to S3 and
//!   announces it on an SNS topic.
//! - `user-recommendation`: looks the book up and sends an SES email.
//! - `new-book-http`, `user-recommendation-http`: the same handlers behind API
//!   Gateway.
//! - `create-books-table`: provisions the DynamoDB table.

pub mod adapters;
pub mod book;
pub mod common;
pub mod handlers;
