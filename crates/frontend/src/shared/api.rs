//! JSON requests against the REST API.
//!
//! Every helper attaches the session token (if any) and maps transport,
//! status and decoding failures to a `String` error.

use gloo_net::http::{Method, Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::shared::api_utils::{api_url, api_url_with_query};
use crate::system::auth::storage;

fn authorized(builder: RequestBuilder) -> RequestBuilder {
    let builder = builder.header("Accept", "application/json");
    match storage::get_access_token() {
        Some(token) => builder.header("Authorization", &format!("Token {}", token)),
        None => builder,
    }
}

async fn decode<T: DeserializeOwned>(response: Response, what: &str) -> Result<T, String> {
    if !response.ok() {
        let detail = response.text().await.unwrap_or_default();
        return Err(format!("{} failed: {} {}", what, response.status(), detail));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn get_json<T: DeserializeOwned>(
    path: &str,
    params: &[(String, String)],
) -> Result<T, String> {
    let response = authorized(Request::get(&api_url_with_query(path, params)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    decode(response, path).await
}

/// Raw JSON body of a GET request
pub async fn get_value(path: &str, params: &[(String, String)]) -> Result<Value, String> {
    get_json::<Value>(path, params).await
}

/// Field metadata of an endpoint
pub async fn options_json(path: &str) -> Result<Value, String> {
    let response = authorized(RequestBuilder::new(&api_url(path)).method(Method::OPTIONS))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    decode(response, path).await
}

pub async fn post_json<B: Serialize>(path: &str, body: &B) -> Result<Value, String> {
    let response = authorized(Request::post(&api_url(path)))
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    decode(response, path).await
}

/// Send a form body with `method`.
///
/// A rejected request yields the server's JSON error document (field errors);
/// transport failures yield the message as a JSON string.
pub async fn submit_json(method: Method, path: &str, body: &Value) -> Result<Value, Value> {
    let response = authorized(RequestBuilder::new(&api_url(path)).method(method))
        .json(body)
        .map_err(|e| Value::String(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| Value::String(format!("Failed to send request: {}", e)))?;

    if response.ok() {
        // 204 responses have no body
        return Ok(response.json::<Value>().await.unwrap_or(Value::Null));
    }
    let status = response.status();
    match response.json::<Value>().await {
        Ok(errors) => Err(errors),
        Err(_) => Err(Value::String(format!("{} failed: {}", path, status))),
    }
}
