use std::time::Duration;

/// Upper bound on the duration of a single HTTP request.
pub(crate) const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// How many times [crate::AuthClient::poll_login] asks before giving up.
pub(crate) const POLL_MAX_ATTEMPTS: u32 = 240;

/// Pause before each login poll attempt.
pub(crate) const POLL_INTERVAL: Duration = Duration::from_millis(300);
