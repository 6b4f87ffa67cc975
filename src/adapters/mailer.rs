use async_trait::async_trait;
use aws_sdk_ses::types::{Body, Content, Destination, Message};
use tracing::info;

use crate::adapters::Mailer;
use crate::common::errors::BookError;

const CHARSET: &str = "UTF-8";

#[derive(Debug, Clone)]
pub struct SesMailer {
    client: aws_sdk_ses::Client,
    source_email: String,
}

impl SesMailer {
    pub fn new(client: aws_sdk_ses::Client, source_email: impl Into<String>) -> Self {
        Self {
            client,
            source_email: source_email.into(),
        }
    }

    fn message(subject: &str, body: &str) -> Result<Message, BookError> {
        let subject = Content::builder()
            .data(subject)
            .charset(CHARSET)
            .build()
            .map_err(BookError::mail)?;
        let text = Content::builder()
            .data(body)
            .charset(CHARSET)
            .build()
            .map_err(BookError::mail)?;

        Ok(Message::builder()
            .subject(subject)
            .body(Body::builder().text(text).build())
            .build())
    }
}

#[async_trait]
impl Mailer for SesMailer {
    async fn send(&self, to: &[String], subject: &str, body: &str) -> Result<(), BookError> {
        let destination = Destination::builder()
            .set_to_addresses(Some(to.to_vec()))
            .build();
        let message = Self::message(subject, body)?;

        info!("Sending email to {} recipient(s)", to.len());
        let output = self
            .client
            .send_email()
            .source(&self.source_email)
            .destination(destination)
            .message(message)
            .send()
            .await
            .map_err(BookError::mail)?;

        info!("email sent: {:?}", output.message_id());
        Ok(())
    }
}
