//! Request extractors: loosely typed parameters and the caller's address.

use crate::error::InventoryError;
use axum::async_trait;
use axum::extract::{ConnectInfo, Form, FromRequest, FromRequestParts, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::request::Parts;
use axum::Json;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::convert::Infallible;
use std::fmt;
use std::net::SocketAddr;

/// Request parameters taken from a JSON object body, or from form fields
/// when the body is not JSON. A malformed body yields no parameters.
#[derive(Debug, Default, Clone)]
pub struct Params(Map<String, Value>);

#[async_trait]
impl<S> FromRequest<S> for Params
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(is_json_content_type)
            .unwrap_or(false);

        if is_json {
            let map = match Json::<Value>::from_request(req, state).await {
                Ok(Json(Value::Object(map))) => map,
                _ => Map::new(),
            };
            return Ok(Self(map));
        }

        let map = match Form::<HashMap<String, String>>::from_request(req, state).await {
            Ok(Form(fields)) => fields
                .into_iter()
                .map(|(k, v)| (k, Value::String(v)))
                .collect(),
            Err(_) => Map::new(),
        };
        Ok(Self(map))
    }
}

/// `application/json` and any `application/*+json` media type, parameters ignored.
fn is_json_content_type(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    match essence.split_once('/') {
        Some((kind, subtype)) => {
            kind == "application" && (subtype == "json" || subtype.ends_with("+json"))
        }
        None => false,
    }
}

impl Params {
    #[cfg(test)]
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }

    /// Checks `fields` in order and fails on the first one absent.
    pub fn require(&self, fields: &'static [&'static str]) -> Result<(), InventoryError> {
        match fields.iter().find(|f| !self.0.contains_key(**f)) {
            Some(missing) => Err(InventoryError::MissingField(*missing)),
            None => Ok(()),
        }
    }

    /// String value of `field`; non-string JSON values are rendered as JSON text.
    pub fn text(&self, field: &str) -> String {
        match self.0.get(field) {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => String::new(),
        }
    }

    /// `count` as an integer, 1 when absent. Fractional numbers truncate.
    pub fn count(&self) -> Result<i64, InventoryError> {
        let invalid = |v: &Value| InventoryError::InvalidCount(v.to_string());
        match self.0.get("count") {
            None => Ok(1),
            Some(Value::Number(n)) => n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
                .ok_or_else(|| invalid(&Value::Number(n.clone()))),
            Some(Value::String(s)) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| InventoryError::InvalidCount(s.clone())),
            Some(other) => Err(invalid(other)),
        }
    }
}

/// Peer address of the connection, `unknown` when the server was not started
/// with connect info.
#[derive(Debug, Clone, Copy)]
pub struct ClientOrigin(pub Option<SocketAddr>);

#[async_trait]
impl<S> FromRequestParts<S> for ClientOrigin
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(
            parts
                .extensions
                .get::<ConnectInfo<SocketAddr>>()
                .map(|ConnectInfo(addr)| *addr),
        ))
    }
}

impl fmt::Display for ClientOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(addr) => write!(f, "{}", addr.ip()),
            None => write!(f, "unknown"),
        }
    }
}
