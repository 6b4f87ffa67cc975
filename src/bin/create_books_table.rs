use aws_config::BehaviorVersion;
use lambda_http::Error as LambdaError;
use tracing::info;

use book_lambdas::adapters::DynamoRecordStore;
use book_lambdas::common::config::books_table_from_env;
use book_lambdas::common::utils::init_tracing;

#[tokio::main]
async fn main() -> Result<(), LambdaError> {
    init_tracing();

    let table_name = books_table_from_env()?;
    let aws_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let records = DynamoRecordStore::new(aws_sdk_dynamodb::Client::new(&aws_config), table_name);

    if records.create_table().await? {
        info!("Table {} created", records.table_name());
    } else {
        info!("Table {} left as is", records.table_name());
    }

    Ok(())
}
