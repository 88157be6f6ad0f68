//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Default URL for new HTTP requests
pub const DEFAULT_HTTP_URL: &str = "https://httpbin.org/get";

/// Directory under the home directory where collections are stored
pub const CONFIG_DIR_NAME: &str = ".relay";

/// File extension recognized by the collection store
pub const COLLECTION_EXT: &str = "json";

/// Log file name
pub const LOG_FILE: &str = "relay.log";

/// Placeholder shown in the response area while a request is in flight
pub const SENDING_PLACEHOLDER: &str = "Sending request...";

/// Application name
#[allow(dead_code)]
pub const APP_NAME: &str = "Relay TUI";

/// Application version
#[allow(dead_code)]
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
