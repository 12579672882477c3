//! Typed `{id}` path parameters.
//!
//! A path segment that can never name a row (not an integer, or not
//! positive) is reported the same way as a missing row: 404 with the
//! entity's not-found code.

use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::errors::ErrorCode;

fn parse_id(req: &HttpRequest, entity: &str, code: ErrorCode) -> Result<i64, AppError> {
    let raw = req.match_info().get("id").unwrap_or("");
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::not_found(code, format!("{entity} {raw} not found"))),
    }
}

/// Console id taken from the `{id}` route segment.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleId(pub i64);

impl FromRequest for ConsoleId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(parse_id(req, "Console", ErrorCode::ConsoleNotFound).map(ConsoleId))
    }
}

/// Game id taken from the `{id}` route segment.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct GameId(pub i64);

impl FromRequest for GameId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(parse_id(req, "Game", ErrorCode::GameNotFound).map(GameId))
    }
}
