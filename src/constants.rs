//! Application constants
//!
//! Centralized location for sentinels, user-facing messages and defaults.

/// Body format selection meaning "send no Content-Type"
pub const NO_BODY_FORMAT: &str = "xo";

/// Body formats offered by the format picker, besides [`NO_BODY_FORMAT`]
pub const BODY_FORMATS: [&str; 4] = [
    "application/json",
    "application/x-www-form-urlencoded",
    "text/plain",
    "application/xml",
];

/// Shown when a send produced neither decodable text nor an error
pub const NO_RESPONSE_TEXT: &str = "No response received.";

/// Displayed in place of a missing status code
pub const MISSING_STATUS_DISPLAY: i32 = -100;

/// URL text could not be parsed at all
pub const URL_COMPONENTS_ERROR: &str = "Can't get url components";

/// URL parsed but could not be turned into a request target
pub const URL_EXTRACT_ERROR: &str = "Failed to extract URL, Check for invalid url!!";

/// Header injected when a body format is selected
pub const CONTENT_TYPE_HEADER: &str = "Content-Type";

/// Directory under the home directory holding app data
pub const DATA_DIR_NAME: &str = ".ravens-rock";

/// Autosave drafts sub-directory
pub const DRAFTS_DIR_NAME: &str = "drafts";

/// Application name
pub const APP_NAME: &str = "Ravens Rock";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable overriding the client timeout, in seconds
pub const TIMEOUT_ENV_VAR: &str = "RAVENS_ROCK_TIMEOUT_SECS";
