use aws_config::BehaviorVersion;
use lambda_http::{run, service_fn, Error as LambdaError, Request as LambdaRequest};

use book_lambdas::adapters::{DynamoRecordStore, SesMailer};
use book_lambdas::common::errors::into_lambda_result;
use book_lambdas::common::utils::init_tracing;
use book_lambdas::common::RecommendationConfig;
use book_lambdas::handlers::user_recommendation::process_request;

#[tokio::main]
async fn main() -> Result<(), LambdaError> {
    init_tracing();

    let config = RecommendationConfig::from_env()?;
    let aws_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let records = DynamoRecordStore::new(
        aws_sdk_dynamodb::Client::new(&aws_config),
        config.books_table,
    );
    let mailer = SesMailer::new(
        aws_sdk_ses::Client::new(&aws_config),
        config.recommendation_source_email,
    );

    let (records, mailer) = (&records, &mailer);
    run(service_fn(move |request: LambdaRequest| async move {
        into_lambda_result(process_request(request, records, mailer).await)
    }))
    .await
}
