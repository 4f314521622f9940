use std::time::Duration;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThrottleError {
    /// Caller exceeded the rate of a throttle scope.
    ///
    /// `retry_after` is the time left until the caller's current window closes.
    #[error("Request was throttled. Expected available in {} seconds.", retry_after_secs(.retry_after))]
    Throttled { retry_after: Duration },
}

/// Rounds a wait up to whole seconds, never below one.
pub fn retry_after_secs(retry_after: &Duration) -> u64 {
    let secs = retry_after.as_secs() + u64::from(retry_after.subsec_nanos() > 0);
    secs.max(1)
}

/// Converts throttle errors into 429 Too Many Requests with a `Retry-After` header.
impl IntoResponse for ThrottleError {
    fn into_response(self) -> Response {
        match self {
            Self::Throttled { retry_after } => (
                StatusCode::TOO_MANY_REQUESTS,
                [(
                    header::RETRY_AFTER,
                    retry_after_secs(&retry_after).to_string(),
                )],
                Json(ErrorDto::message(self.to_string())),
            )
                .into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_partial_seconds_up() {
        assert_eq!(retry_after_secs(&Duration::from_millis(1500)), 2);
        assert_eq!(retry_after_secs(&Duration::from_secs(3)), 3);
    }

    #[test]
    fn never_reports_zero_seconds() {
        assert_eq!(retry_after_secs(&Duration::ZERO), 1);
    }
}
