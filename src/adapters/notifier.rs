use async_trait::async_trait;
use tracing::info;

use crate::adapters::Notifier;
use crate::common::errors::BookError;

#[derive(Debug, Clone)]
pub struct SnsNotifier {
    client: aws_sdk_sns::Client,
    topic_arn: String,
}

impl SnsNotifier {
    pub fn new(client: aws_sdk_sns::Client, topic_arn: impl Into<String>) -> Self {
        Self {
            client,
            topic_arn: topic_arn.into(),
        }
    }
}

#[async_trait]
impl Notifier for SnsNotifier {
    async fn publish(&self, subject: &str, message: &str) -> Result<(), BookError> {
        info!("Publishing to {}", self.topic_arn);
        let output = self
            .client
            .publish()
            .topic_arn(&self.topic_arn)
            .subject(subject)
            .message(message)
            .send()
            .await
            .map_err(BookError::notification)?;

        info!(
            "message published: {}",
            output.message_id().unwrap_or("empty_id")
        );
        Ok(())
    }
}
