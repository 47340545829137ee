//! JSON request/response plumbing for talking to a remote HTTP service.

use reqwest::{header::CONTENT_TYPE, Client, Method, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid base url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("response status of {status}")]
    Status { status: StatusCode },
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Sends `entity` as a JSON body (empty when `None`) with a JSON content type.
pub async fn request<T: Serialize + ?Sized>(
    client: &Client,
    method: Method,
    url: &str,
    entity: Option<&T>,
) -> Result<Response, ClientError> {
    let body = match entity {
        Some(entity) => serde_json::to_vec(entity).map_err(ClientError::Encode)?,
        None => Vec::new(),
    };
    let req = client
        .request(method, url)
        .header(CONTENT_TYPE, "application/json")
        .body(body)
        .build()?;
    Ok(client.execute(req).await?)
}

pub async fn read_body_as_bytes(
    response: Response,
    expected: StatusCode,
) -> Result<Vec<u8>, ClientError> {
    check_status(&response, expected)?;
    Ok(response.bytes().await?.to_vec())
}

pub async fn read_body_as_entity<T: DeserializeOwned>(
    response: Response,
    expected: StatusCode,
) -> Result<T, ClientError> {
    let body = read_body_as_bytes(response, expected).await?;
    serde_json::from_slice(&body).map_err(ClientError::Decode)
}

pub fn check_status(response: &Response, expected: StatusCode) -> Result<(), ClientError> {
    if response.status() != expected {
        return Err(ClientError::Status {
            status: response.status(),
        });
    }
    Ok(())
}
