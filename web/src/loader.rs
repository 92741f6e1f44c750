use clueboard_core::{LoadError, QuestionRecord, parse_payload};
use gloo::net::http::Request;

/// Fetches and decodes the payload at `path`. Non-2xx responses count as fetch failures.
pub(crate) async fn fetch_question_set(path: &str) -> Result<Vec<QuestionRecord>, LoadError> {
    let response = Request::get(path)
        .send()
        .await
        .map_err(|err| LoadError::Fetch(err.to_string()))?;

    if !response.ok() {
        return Err(LoadError::Fetch(format!(
            "{} {}",
            response.status(),
            response.status_text()
        )));
    }

    let body = response
        .binary()
        .await
        .map_err(|err| LoadError::Fetch(err.to_string()))?;
    parse_payload(&body)
}
