use std::ops::{Deref, DerefMut};

use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::{FromRequest, HttpRequest};
use bytes::BytesMut;
use futures_util::StreamExt;
use serde::de::DeserializeOwned;
use serde_json::Error as JsonError;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::trace_ctx;
use crate::validation::Validate;

/// Largest request body accepted by [`ValidatedJson`].
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// Validated JSON extractor that provides standardized error handling for JSON parse/validation failures
///
/// The body must be a JSON object that deserializes into `T` and passes
/// `T::validate`. Every failure is rendered as 422 `VALIDATION_ERROR` with a
/// sanitized detail; bodies over [`MAX_BODY_BYTES`] are 413.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T> ValidatedJson<T> {
    /// Extract the inner value from the ValidatedJson wrapper
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for ValidatedJson<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> FromRequest for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + 'static,
{
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let mut payload = payload.take();

        // Extract headers before creating the async future to avoid borrow-across-await
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|ct| ct.to_str().ok())
            .unwrap_or("")
            .to_string();
        let declared_len = req
            .headers()
            .get(header::CONTENT_LENGTH)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<usize>().ok());

        Box::pin(async move {
            let trace_id = trace_ctx::trace_id();

            if declared_len.is_some_and(|len| len > MAX_BODY_BYTES) {
                return Err(too_large());
            }

            // Collect the request body into BytesMut
            let mut body = BytesMut::new();
            while let Some(chunk) = payload.next().await {
                let chunk = chunk.map_err(|e| {
                    warn!(
                        trace_id = %trace_id,
                        error = %e,
                        "Failed to read request body chunk"
                    );
                    AppError::bad_request(ErrorCode::BadRequest, "Failed to read request body")
                })?;
                if body.len() + chunk.len() > MAX_BODY_BYTES {
                    return Err(too_large());
                }
                body.extend_from_slice(&chunk);
            }

            let value = serde_json::from_slice::<Value>(&body).map_err(|e| {
                debug!(
                    trace_id = %trace_id,
                    category = ?e.classify(),
                    content_type = %content_type,
                    body_size = body.len(),
                    "JSON parsing failed"
                );
                AppError::invalid(ErrorCode::ValidationError, classify_json_error(&e))
            })?;

            if !value.is_object() {
                return Err(AppError::invalid(
                    ErrorCode::ValidationError,
                    "Request body must be a JSON object",
                ));
            }

            let parsed = serde_json::from_value::<T>(value).map_err(|e| {
                debug!(trace_id = %trace_id, "request body does not match schema");
                AppError::invalid(ErrorCode::ValidationError, classify_json_error(&e))
            })?;

            parsed.validate()?;

            Ok(ValidatedJson(parsed))
        })
    }
}

fn too_large() -> AppError {
    AppError::payload_too_large(format!(
        "Request body exceeds {MAX_BODY_BYTES} bytes"
    ))
}

/// Classify serde_json::Error and return a sanitized error message
///
/// Field names are kept; offending values never are.
fn classify_json_error(error: &JsonError) -> String {
    match error.classify() {
        serde_json::error::Category::Syntax => {
            let line = error.line();
            format!("Invalid JSON at line {line}")
        }
        serde_json::error::Category::Eof => "Invalid JSON: unexpected end of input".to_string(),
        serde_json::error::Category::Data => {
            let message = error.to_string();
            if let Some(field) = field_in(&message, "missing field") {
                format!("Missing required field '{field}'")
            } else if let Some(field) = field_in(&message, "unknown field") {
                format!("Unknown field '{field}'")
            } else {
                "Invalid JSON: wrong types for one or more fields".to_string()
            }
        }
        serde_json::error::Category::Io => "Invalid JSON: I/O error while reading body".to_string(),
    }
}

/// Pull the backtick-quoted field name out of a serde message like
/// "missing field `name`".
fn field_in<'a>(message: &'a str, prefix: &str) -> Option<&'a str> {
    let rest = message.strip_prefix(prefix)?.trim_start();
    let rest = rest.strip_prefix('`')?;
    let end = rest.find('`')?;
    Some(&rest[..end])
}
