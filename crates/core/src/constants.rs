//! Shared constants for frn-console.
//!
//! Centralizes labels and timings that several crates need to agree on.

/// Console title shown in the page header and CLI banner.
pub const CONSOLE_TITLE: &str = "FRN API";

/// Tagline shown under the console title.
pub const CONSOLE_TAGLINE: &str = "Free REST API Collection";

/// Product label stamped into every simulated payload as `powered_by`.
pub const POWERED_BY: &str = "Wataru API";

/// Artificial latency of a simulated request, in milliseconds.
pub const DEFAULT_LATENCY_MS: u64 = 1000;

/// How long the "copied" flag stays raised after a clipboard write, in milliseconds.
pub const DEFAULT_COPIED_FLASH_MS: u64 = 2000;

/// Upper bound on concurrently tracked console sessions.
/// The least recently used session is evicted past this limit.
pub const DEFAULT_MAX_SESSIONS: usize = 256;

/// Payload returned in place of a response when mock generation fails.
pub const REQUEST_FAILED_MESSAGE: &str = "Request failed";

/// Toast shown after a successful simulated request.
pub const REQUEST_SUCCEEDED_TOAST: &str = "API request successful!";

/// Toast shown after a failed simulated request.
pub const REQUEST_FAILED_TOAST: &str = "API request failed!";

/// Toast shown after a clipboard write.
pub const COPIED_TOAST: &str = "Copied to clipboard!";

/// Toast shown when the clipboard rejects a write.
pub const COPY_FAILED_TOAST: &str = "Could not copy to clipboard";

/// Environment variable overriding [`DEFAULT_LATENCY_MS`].
pub const ENV_LATENCY_MS: &str = "FRN_CONSOLE_LATENCY_MS";

/// Environment variable overriding [`DEFAULT_COPIED_FLASH_MS`].
pub const ENV_COPIED_FLASH_MS: &str = "FRN_CONSOLE_COPIED_FLASH_MS";

/// Environment variable overriding [`DEFAULT_MAX_SESSIONS`].
pub const ENV_MAX_SESSIONS: &str = "FRN_CONSOLE_MAX_SESSIONS";

/// Environment variable pointing at a JSON catalog that replaces the built-in one.
pub const ENV_CATALOG_PATH: &str = "FRN_CONSOLE_CATALOG";
