use lambda_http::http::StatusCode;
use lambda_http::{Request as LambdaRequest, Response as LambdaResponse};
use lambda_runtime::Error as RuntimeError;
use serde::Deserialize;
use serde_json::Value;
use tracing::{error, info};

use crate::adapters::{Mailer, RecordStore};
use crate::book::{BookKey, BookRecord};
use crate::common::errors::{BookError, Error};
use crate::common::event::{extract_event, into_status_response, StatusResponse};
use crate::common::utils::{extract_request, text_response};

pub const RECOMMENDATION_SENT: &str = "Your recommendation was sent";

#[derive(Debug, Clone, Deserialize)]
pub struct Request {
    pub user_name: String,
    pub author: String,
    pub title: String,
    pub emails: Vec<String>,
}

/// Subject and text body of a recommendation email.
pub fn recommendation_email(user_name: &str, book: &BookRecord) -> (String, String) {
    (
        format!("{} has a suggestion for you", user_name),
        format!(
            "Your friend {} sends a recommendation: check {} from {}! \n {}",
            user_name, book.title, book.author, book.description
        ),
    )
}

pub async fn send_user_recommendation(
    request: Request,
    records: &dyn RecordStore,
    mailer: &dyn Mailer,
) -> Result<(), BookError> {
    if request.emails.is_empty() {
        return Err(BookError::InvalidRequest(
            "at least one recipient email is required".into(),
        ));
    }

    let key = BookKey::new(request.author, request.title);
    info!("Looking up '{}' by {}", key.title, key.author);
    let book = match records.get_book(&key).await? {
        Some(book) => book,
        None => {
            error!("Book not found");
            return Err(BookError::NotFound {
                author: key.author,
                title: key.title,
            });
        }
    };

    let (subject, body) = recommendation_email(&request.user_name, &book);
    mailer.send(&request.emails, &subject, &body).await
}

#[tracing::instrument(skip_all)]
pub async fn process_request(
    request: LambdaRequest,
    records: &dyn RecordStore,
    mailer: &dyn Mailer,
) -> Result<LambdaResponse<String>, Error> {
    let request = extract_request::<Request>(request)?;
    send_user_recommendation(request, records, mailer).await?;

    text_response(StatusCode::CREATED, RECOMMENDATION_SENT)
}

/// Direct invocation: the event is the request payload.
#[tracing::instrument(skip_all)]
pub async fn process_event(
    event: Value,
    records: &dyn RecordStore,
    mailer: &dyn Mailer,
) -> Result<StatusResponse, RuntimeError> {
    let result = match extract_event::<Request>(event) {
        Ok(request) => send_user_recommendation(request, records, mailer).await,
        Err(err) => Err(err),
    };

    into_status_response(result, StatusCode::CREATED.as_u16(), RECOMMENDATION_SENT)
}
