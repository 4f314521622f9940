//! Absolute URL construction for hyperlinked representations.

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};

pub const DRONE_CATEGORIES_PATH: &str = "/api/drone-categories";
pub const DRONES_PATH: &str = "/api/drones";
pub const PILOTS_PATH: &str = "/api/pilots";
pub const COMPETITIONS_PATH: &str = "/api/competitions";
pub const USERS_PATH: &str = "/api/users";
pub const TOYS_PATH: &str = "/api/toys";

/// Builds absolute links rooted at the host the request was addressed to.
#[derive(Debug, Clone)]
pub struct Links {
    base: String,
}

impl Links {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into().trim_end_matches('/').to_string(),
        }
    }

    /// Derives the base URL from the `Host` and `X-Forwarded-Proto` headers.
    ///
    /// Falls back to `http://localhost` when the request carries no host.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let host = headers
            .get(header::HOST)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("localhost");
        let scheme = headers
            .get("x-forwarded-proto")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("http");

        Self::new(format!("{}://{}", scheme, host))
    }

    /// Absolute URL of a path such as `/api/drones`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub fn detail(&self, collection: &str, id: i32) -> String {
        format!("{}{}/{}", self.base, collection, id)
    }

    pub fn drone_category(&self, id: i32) -> String {
        self.detail(DRONE_CATEGORIES_PATH, id)
    }

    pub fn drone(&self, id: i32) -> String {
        self.detail(DRONES_PATH, id)
    }

    pub fn pilot(&self, id: i32) -> String {
        self.detail(PILOTS_PATH, id)
    }

    pub fn competition(&self, id: i32) -> String {
        self.detail(COMPETITIONS_PATH, id)
    }

    pub fn user(&self, id: i32) -> String {
        self.detail(USERS_PATH, id)
    }
}

impl<S> FromRequestParts<S> for Links
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(&parts.headers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn builds_detail_links_from_host() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("api.example.com"));

        let links = Links::from_headers(&headers);

        assert_eq!(links.drone(3), "http://api.example.com/api/drones/3");
        assert_eq!(links.url(PILOTS_PATH), "http://api.example.com/api/pilots");
    }

    #[test]
    fn honors_forwarded_proto() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("api.example.com"));
        headers.insert("x-forwarded-proto", HeaderValue::from_static("https"));

        let links = Links::from_headers(&headers);

        assert_eq!(links.user(1), "https://api.example.com/api/users/1");
    }

    #[test]
    fn defaults_to_localhost() {
        let links = Links::from_headers(&HeaderMap::new());

        assert_eq!(links.drone_category(2), "http://localhost/api/drone-categories/2");
    }
}
