//! HTTP helpers over `gloo-net`.
//!
//! Все запросы к REST API идут через эти функции: единая обработка статусов,
//! извлечение `message` из тела ошибки и разворачивание конверта `{ "data": ... }`.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx response that carried a readable message.
    #[error("{message}")]
    Server { status: u16, message: String },
    #[error("HTTP {0}")]
    Status(u16),
    #[error("failed to parse response: {0}")]
    Decode(String),
    #[error("failed to build request: {0}")]
    Encode(String),
}

impl ApiError {
    /// Text for a toast: the server's own message when it sent one, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Server { message, .. } => message.clone(),
            _ => fallback.to_string(),
        }
    }

    pub fn from_response_body(status: u16, body: &str) -> Self {
        serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(ErrorBody::into_message)
            .map(|message| ApiError::Server { status, message })
            .unwrap_or(ApiError::Status(status))
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl ErrorBody {
    fn into_message(self) -> Option<String> {
        self.message
            .or(self.error)
            .filter(|m| !m.trim().is_empty())
    }
}

/// Сервер отдаёт либо голое значение, либо `{ "data": value }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum Envelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Envelope<T> {
    fn into_inner(self) -> T {
        match self {
            Envelope::Wrapped { data } => data,
            Envelope::Bare(value) => value,
        }
    }
}

pub fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str::<Envelope<T>>(body)
        .map(Envelope::into_inner)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

fn network(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

async fn read_body(response: Response) -> Result<String, ApiError> {
    let status = response.status();
    let body = response.text().await.map_err(network)?;
    if !response.ok() {
        return Err(ApiError::from_response_body(status, &body));
    }
    Ok(body)
}

pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(network)?;
    decode_body(&read_body(response).await?)
}

pub async fn send_json<B, T>(builder: RequestBuilder, body: &B) -> Result<T, ApiError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let request = builder
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    let response = request.send().await.map_err(network)?;
    decode_body(&read_body(response).await?)
}

/// Multipart upload. Content-Type with the boundary is set by the browser.
pub async fn send_form<T: DeserializeOwned>(
    builder: RequestBuilder,
    form: web_sys::FormData,
) -> Result<T, ApiError> {
    let request = builder
        .header("Accept", "application/json")
        .body(form)
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    let response = request.send().await.map_err(network)?;
    decode_body(&read_body(response).await?)
}

/// Request whose response body is not needed (DELETE, reorder).
pub async fn send_expect_ok(request: Request) -> Result<(), ApiError> {
    let response = request.send().await.map_err(network)?;
    read_body(response).await.map(|_| ())
}

pub async fn send_json_expect_ok<B: Serialize + ?Sized>(
    builder: RequestBuilder,
    body: &B,
) -> Result<(), ApiError> {
    let request = builder
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    send_expect_ok(request).await
}

pub async fn delete(url: &str) -> Result<(), ApiError> {
    let request = Request::delete(url)
        .build()
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    send_expect_ok(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        #[serde(rename = "_id")]
        id: String,
    }

    #[test]
    fn test_decode_wrapped_and_bare() {
        let wrapped: Vec<Item> = decode_body(r#"{"data":[{"_id":"a"}]}"#).unwrap();
        let bare: Vec<Item> = decode_body(r#"[{"_id":"a"}]"#).unwrap();
        assert_eq!(wrapped, bare);

        let empty: Vec<Item> = decode_body("[]").unwrap();
        assert!(empty.is_empty());

        let single: Item = decode_body(r#"{"data":{"_id":"x"}}"#).unwrap();
        assert_eq!(single.id, "x");
    }

    #[test]
    fn test_decode_garbage() {
        let result: Result<Vec<Item>, _> = decode_body("<html>");
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_error_body_message() {
        let err = ApiError::from_response_body(409, r#"{"message":"Email already exists"}"#);
        assert_eq!(
            err,
            ApiError::Server {
                status: 409,
                message: "Email already exists".into()
            }
        );
        assert_eq!(err.user_message("Failed"), "Email already exists");

        let err = ApiError::from_response_body(400, r#"{"error":"Bad pincode"}"#);
        assert_eq!(err.user_message("Failed"), "Bad pincode");
    }

    #[test]
    fn test_error_without_message_uses_fallback() {
        let err = ApiError::from_response_body(500, "Internal Server Error");
        assert_eq!(err, ApiError::Status(500));
        assert_eq!(err.user_message("Failed to save"), "Failed to save");

        let err = ApiError::from_response_body(500, r#"{"message":"  "}"#);
        assert_eq!(err, ApiError::Status(500));
    }
}
