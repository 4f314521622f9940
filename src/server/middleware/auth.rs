//! Caller resolution and the access guard used by every resource handler.

use std::net::{IpAddr, SocketAddr};

use axum::{
    extract::{ConnectInfo, FromRequestParts},
    http::{header, request::Parts, HeaderMap},
};

use crate::server::{
    error::AppError,
    middleware::{
        access::{decide, Credentials, Decision, Operation, ResourceKind},
        throttle::{ThrottleDecision, ThrottleGate, ThrottleScope},
    },
    service::token::TokenService,
    state::AppState,
};

/// The caller behind a request: its credentials and the key it is throttled under.
#[derive(Debug, Clone)]
pub struct Caller {
    pub credentials: Credentials,
    pub throttle_key: String,
}

impl Caller {
    pub fn new(credentials: Credentials, remote: Option<IpAddr>, headers: &HeaderMap) -> Self {
        let throttle_key = throttle_key(&credentials, headers, remote);
        Self {
            credentials,
            throttle_key,
        }
    }

    /// Id of the authenticated user, if any.
    pub fn user_id(&self) -> Option<i32> {
        self.credentials.identity().map(|identity| identity.user_id)
    }
}

/// Value of the `Authorization` header, as far as token authentication is concerned.
#[derive(Debug, PartialEq, Eq)]
enum TokenHeader<'a> {
    /// No header, or a scheme other than `Token`/`Bearer`.
    Missing,
    /// Right scheme but no key, extra parts or non-ASCII bytes.
    Malformed,
    Key(&'a str),
}

fn parse_authorization(headers: &HeaderMap) -> TokenHeader<'_> {
    let Some(value) = headers.get(header::AUTHORIZATION) else {
        return TokenHeader::Missing;
    };
    let Ok(value) = value.to_str() else {
        return TokenHeader::Malformed;
    };

    let mut parts = value.split_whitespace();
    let Some(scheme) = parts.next() else {
        return TokenHeader::Missing;
    };
    if !scheme.eq_ignore_ascii_case("token") && !scheme.eq_ignore_ascii_case("bearer") {
        return TokenHeader::Missing;
    }

    match (parts.next(), parts.next()) {
        (Some(key), None) => TokenHeader::Key(key),
        _ => TokenHeader::Malformed,
    }
}

/// Key a caller's throttle windows are stored under.
///
/// Authenticated callers are keyed by user id; everyone else by the first
/// `X-Forwarded-For` address, then the socket peer address.
fn throttle_key(credentials: &Credentials, headers: &HeaderMap, remote: Option<IpAddr>) -> String {
    if let Some(identity) = credentials.identity() {
        return format!("user:{}", identity.user_id);
    }

    let forwarded = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty());

    match (forwarded, remote) {
        (Some(addr), _) => format!("ip:{}", addr),
        (None, Some(addr)) => format!("ip:{}", addr),
        (None, None) => "ip:unknown".to_string(),
    }
}

impl FromRequestParts<AppState> for Caller {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let credentials = match parse_authorization(&parts.headers) {
            TokenHeader::Missing => Credentials::Anonymous,
            TokenHeader::Malformed => Credentials::Invalid,
            TokenHeader::Key(key) => match TokenService::new(&state.db).resolve(key).await? {
                Some(identity) => Credentials::Authenticated(identity),
                None => Credentials::Invalid,
            },
        };

        let remote = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip());

        Ok(Self::new(credentials, remote, &parts.headers))
    }
}

/// Gatekeeper run by handlers before touching the store.
///
/// Handlers call `require` with no instance loaded, then `throttle`, then load the
/// instance (404 if missing) and call `require_owner` for writes on owned resources.
pub struct AccessGuard<'a> {
    throttle: &'a ThrottleGate,
    caller: &'a Caller,
}

impl<'a> AccessGuard<'a> {
    pub fn new(throttle: &'a ThrottleGate, caller: &'a Caller) -> Self {
        Self { throttle, caller }
    }

    /// View-level access check.
    ///
    /// # Returns
    /// - `Ok(())` - Caller may attempt the operation
    /// - `Err(AppError::AuthErr)` - 401 for missing or invalid credentials
    pub fn require(&self, operation: Operation, kind: ResourceKind) -> Result<(), AppError> {
        self.decide(operation, kind, None)
    }

    /// Object-level access check against a loaded instance's owner.
    ///
    /// # Returns
    /// - `Ok(())` - Caller may perform the operation on this instance
    /// - `Err(AppError::AuthErr)` - 403 when the caller is not the owner, 401 when anonymous
    pub fn require_owner(
        &self,
        operation: Operation,
        kind: ResourceKind,
        owner: i32,
    ) -> Result<(), AppError> {
        self.decide(operation, kind, Some(owner))
    }

    /// Counts the request against `scope`.
    ///
    /// # Returns
    /// - `Ok(())` - Request fits in the caller's window
    /// - `Err(AppError::ThrottleErr)` - 429 with the remaining wait
    pub fn throttle(&self, scope: ThrottleScope) -> Result<(), AppError> {
        let decision = self.throttle.check(&self.caller.throttle_key, scope);

        if let ThrottleDecision::Deny { retry_after } = decision {
            tracing::warn!(
                key = %self.caller.throttle_key,
                scope = %scope,
                retry_after_secs = retry_after.as_secs(),
                "request throttled"
            );
        }

        Ok(decision.into_result()?)
    }

    fn decide(
        &self,
        operation: Operation,
        kind: ResourceKind,
        owner: Option<i32>,
    ) -> Result<(), AppError> {
        let decision = decide(operation, kind, owner, &self.caller.credentials);

        if let Decision::Deny(reason) = decision {
            tracing::warn!(
                key = %self.caller.throttle_key,
                ?operation,
                ?kind,
                ?reason,
                "access denied"
            );
        }

        Ok(decision.into_result()?)
    }
}
