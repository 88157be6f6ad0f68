//! HTTP client wrapper - executes requests and decodes responses

use std::time::Instant;

use crate::messages::NetworkResponse;
use crate::models::{HttpMethod, Request};

/// Build a request from the given parameters
fn build_request(client: &reqwest::Client, request: &Request) -> reqwest::RequestBuilder {
    let mut req_builder = match request.method {
        HttpMethod::GET => client.get(&request.url),
        HttpMethod::POST => client.post(&request.url),
        HttpMethod::PUT => client.put(&request.url),
        HttpMethod::PATCH => client.patch(&request.url),
        HttpMethod::DELETE => client.delete(&request.url),
    };

    // Headers fold into a unique-key mapping before hitting the wire
    for (key, value) in request.header_map() {
        req_builder = req_builder.header(key, value);
    }

    if !request.body.is_empty() {
        req_builder = req_builder.body(request.body.clone());
    }

    req_builder
}

/// Execute an HTTP request and decode the body as UTF-8.
///
/// Always produces exactly one response. Transport errors (timeout,
/// connection failure, malformed request) are logged and reported with an
/// empty body; a body that is not valid UTF-8 is reported with a decode
/// note. The displayed text is the decoded bytes verbatim, never
/// reformatted.
pub async fn execute_request(
    client: &reqwest::Client,
    request: Request,
    request_id: u64,
) -> NetworkResponse {
    let start = Instant::now();
    let req_builder = build_request(client, &request);

    let result = req_builder.send().await;
    let elapsed = start.elapsed().as_millis() as u64;

    match result {
        Ok(resp) => {
            let status = resp.status().as_u16();
            match resp.bytes().await {
                Ok(bytes) => match String::from_utf8(bytes.to_vec()) {
                    Ok(body) => NetworkResponse::Completed {
                        id: request_id,
                        status,
                        body,
                        time_ms: elapsed,
                    },
                    Err(e) => NetworkResponse::Failed {
                        id: request_id,
                        body: format!("Response body is not valid UTF-8: {}", e),
                        time_ms: elapsed,
                    },
                },
                Err(e) => {
                    tracing::warn!(id = request_id, error = %e, "Error reading response body");
                    NetworkResponse::Failed {
                        id: request_id,
                        body: String::new(),
                        time_ms: elapsed,
                    }
                }
            }
        }
        Err(e) => {
            if e.is_timeout() {
                tracing::warn!(id = request_id, "Request timed out (30s)");
            } else if e.is_connect() {
                tracing::warn!(id = request_id, error = %e, "Connection failed");
            } else {
                tracing::warn!(id = request_id, error = %e, "Request failed");
            }
            NetworkResponse::Failed {
                id: request_id,
                body: String::new(),
                time_ms: elapsed,
            }
        }
    }
}

/// Create an HTTP client with default configuration
pub fn create_client() -> reqwest::Client {
    use std::time::Duration;

    reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}
