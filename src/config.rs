/// Local storage key holding the authentication flag.
pub const AUTH_STORAGE_KEY: &str = "tms:auth";

/// The only stored value that counts as signed in.
pub const AUTH_FLAG_VALUE: &str = "true";

/// Query parameter carrying the originally requested path on a sign-in redirect.
pub const REDIRECT_QUERY: &str = "redirect";

#[cfg(not(debug_assertions))]
pub const LOG_LEVEL: log::Level = log::Level::Info;
#[cfg(debug_assertions)]
pub const LOG_LEVEL: log::Level = log::Level::Trace;
