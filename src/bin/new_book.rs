use aws_config::BehaviorVersion;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde_json::Value;

use book_lambdas::adapters::{DynamoRecordStore, S3BlobStore, SnsNotifier};
use book_lambdas::common::utils::init_tracing;
use book_lambdas::common::NewBookConfig;
use book_lambdas::handlers::new_book::process_event;

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();

    let config = NewBookConfig::from_env()?;
    let aws_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let records = DynamoRecordStore::new(
        aws_sdk_dynamodb::Client::new(&aws_config),
        config.books_table,
    );
    let blobs = S3BlobStore::new(aws_sdk_s3::Client::new(&aws_config), config.books_bucket);
    let notifier = SnsNotifier::new(
        aws_sdk_sns::Client::new(&aws_config),
        config.new_book_topic_arn,
    );

    let (records, blobs, notifier) = (&records, &blobs, &notifier);
    run(service_fn(move |event: LambdaEvent<Value>| async move {
        process_event(event.payload, records, blobs, notifier).await
    }))
    .await
}
