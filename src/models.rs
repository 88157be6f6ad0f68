use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// HTTP Method enum
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum HttpMethod {
    GET,
    POST,
    PUT,
    PATCH,
    DELETE,
}

impl HttpMethod {
    pub fn as_str(&self) -> &str {
        match self {
            HttpMethod::GET => "GET",
            HttpMethod::POST => "POST",
            HttpMethod::PUT => "PUT",
            HttpMethod::PATCH => "PATCH",
            HttpMethod::DELETE => "DELETE",
        }
    }

    pub fn next(&self) -> HttpMethod {
        match self {
            HttpMethod::GET => HttpMethod::POST,
            HttpMethod::POST => HttpMethod::PUT,
            HttpMethod::PUT => HttpMethod::PATCH,
            HttpMethod::PATCH => HttpMethod::DELETE,
            HttpMethod::DELETE => HttpMethod::GET,
        }
    }
}

/// HTTP Header
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Header {
    pub key: String,
    pub value: String,
}

impl Header {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Header {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A single HTTP request
///
/// Headers are kept as a list so the display preserves insertion order;
/// [`Request::header_map`] folds them into the unique-key mapping the wire
/// call uses.
#[derive(Clone, Debug)]
pub struct Request {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<Header>,
    pub body: String,
}

impl Default for Request {
    fn default() -> Self {
        use crate::constants::DEFAULT_HTTP_URL;
        Request {
            method: HttpMethod::GET,
            url: String::from(DEFAULT_HTTP_URL),
            headers: vec![
                Header::new("Content-Type", "application/json"),
                Header::new("Accept", "application/json"),
            ],
            body: String::new(),
        }
    }
}

impl Request {
    /// Fold the header list into a unique-key mapping. Later entries win on
    /// duplicate keys.
    pub fn header_map(&self) -> HashMap<String, String> {
        let mut map = HashMap::new();
        for header in &self.headers {
            map.insert(header.key.clone(), header.value.clone());
        }
        map
    }
}

/// Response from an HTTP request
#[derive(Clone, Debug)]
pub struct Response {
    pub status_code: Option<u16>,
    pub body: String,
    pub time_ms: u64,
}

impl Default for Response {
    fn default() -> Self {
        Response {
            status_code: None,
            body: String::from(
                r#"Quick Reference:
────────────────────────────
  s     Send request
  m     Change method
  Tab   Next panel
  e     Edit field
  c     Collections
  ?     Full help
  q     Quit
────────────────────────────
Press 's' to send your first request!"#,
            ),
            time_ms: 0,
        }
    }
}

/// A named request definition, persisted as one JSON file per entry
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CollectionEntry {
    pub name: String,
    pub method: HttpMethod,
    pub url: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

impl CollectionEntry {
    /// Build a request from the stored fields.
    pub fn to_request(&self) -> Request {
        // Map iteration order is unstable; sort for a stable header display
        let mut headers: Vec<Header> = self
            .headers
            .iter()
            .map(|(k, v)| Header::new(k.clone(), v.clone()))
            .collect();
        headers.sort_by(|a, b| a.key.cmp(&b.key));

        Request {
            method: self.method,
            url: self.url.clone(),
            headers,
            body: self.body.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_cycle_covers_all() {
        let mut method = HttpMethod::GET;
        for _ in 0..5 {
            method = method.next();
        }
        assert_eq!(method, HttpMethod::GET);
    }

    #[test]
    fn test_header_map_round_trip() {
        let mut request = Request::default();
        request.headers.clear();
        request.headers.push(Header::new("Accept", "application/json"));
        request.headers.push(Header::new("X-Test", "1"));

        let map = request.header_map();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("Accept").map(String::as_str), Some("application/json"));
        assert_eq!(map.get("X-Test").map(String::as_str), Some("1"));
    }

    #[test]
    fn test_header_map_later_entry_wins() {
        let mut request = Request::default();
        request.headers.clear();
        request.headers.push(Header::new("Accept", "text/plain"));
        request.headers.push(Header::new("Accept", "application/json"));

        let map = request.header_map();
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("Accept").map(String::as_str), Some("application/json"));
    }

    #[test]
    fn test_entry_to_request() {
        let mut headers = HashMap::new();
        headers.insert("Accept".to_string(), "application/json".to_string());

        let entry = CollectionEntry {
            name: String::from("list users"),
            method: HttpMethod::POST,
            url: String::from("https://api.example.com/users"),
            body: String::from(r#"{"page":1}"#),
            headers,
        };

        let request = entry.to_request();
        assert_eq!(request.method, HttpMethod::POST);
        assert_eq!(request.url, "https://api.example.com/users");
        assert_eq!(request.body, r#"{"page":1}"#);
        assert_eq!(request.headers, vec![Header::new("Accept", "application/json")]);
    }
}
