//! REST client for the booking backend.
//!
//! Browser (`csr`): real HTTP calls via `gloo-net`, with the session bearer
//! token attached when present.
//! Native builds: every call resolves to [`ApiError::Unavailable`] so pages
//! and tests compile and run without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`; non-2xx responses keep the parsed
//! `detail` payload so views can show the backend's own message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{
    AddOn, AddOnCategory, AddOnInput, AuthGrant, Booking, BookingRequest, BookingStatus, BookingStatusUpdate, Delivery,
    DeliveryInput, LoginRequest, Package, PackageCategory, PackageInput, RegisterRequest,
};
use crate::config::ApiConfig;

/// Remote authentication endpoints the session manager depends on.
#[allow(async_fn_in_trait)]
pub trait AuthGateway {
    /// `POST /auth/login`.
    async fn login(&self, credentials: &LoginRequest) -> Result<AuthGrant, ApiError>;
    /// `POST /auth/register`.
    async fn register(&self, request: &RegisterRequest) -> Result<AuthGrant, ApiError>;
}

/// Delivery endpoints, with the create-or-update decision on top.
#[allow(async_fn_in_trait)]
pub trait DeliveryGateway {
    /// `GET /delivery/{booking_id}`.
    async fn get_delivery(&self, booking_id: &str) -> Result<Delivery, ApiError>;
    /// `POST /delivery/`.
    async fn create_delivery(&self, input: &DeliveryInput) -> Result<Delivery, ApiError>;
    /// `PUT /delivery/{booking_id}`.
    async fn update_delivery(&self, booking_id: &str, input: &DeliveryInput) -> Result<Delivery, ApiError>;

    /// Update the booking's delivery if one exists, otherwise create it.
    ///
    /// # Errors
    ///
    /// Lookup failures other than 404 are returned without attempting a write.
    async fn upsert_delivery(
        &self,
        booking_id: &str,
        mut input: DeliveryInput,
    ) -> Result<(Delivery, DeliveryWrite), ApiError> {
        match self.get_delivery(booking_id).await {
            Ok(_) => {
                input.booking_id = None;
                let delivery = self.update_delivery(booking_id, &input).await?;
                Ok((delivery, DeliveryWrite::Updated))
            }
            Err(err) if err.is_not_found() => {
                input.booking_id = Some(booking_id.to_owned());
                let delivery = self.create_delivery(&input).await?;
                Ok((delivery, DeliveryWrite::Created))
            }
            Err(err) => Err(err),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

/// Catalogue visibility for package and add-on listings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CatalogScope {
    /// Server default: active entries only.
    Active,
    /// Include deactivated entries (admin screens).
    All,
}

impl CatalogScope {
    fn active_only(self) -> Option<&'static str> {
        match self {
            Self::Active => None,
            Self::All => Some("false"),
        }
    }
}

/// Which path an upsert took.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeliveryWrite {
    Created,
    Updated,
}

/// HTTP client bound to one base URL and, optionally, one bearer token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self { base_url: config.base_url.clone(), token: None }
    }

    /// Attach (or clear) the bearer token sent with every request.
    #[must_use]
    pub fn with_token(mut self, token: Option<&str>) -> Self {
        self.token = token.map(str::to_owned);
        self
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn authorization(&self) -> Option<String> {
        self.token.as_deref().map(|token| format!("Bearer {token}"))
    }

    // -------------------------------------------------------------------------
    // Packages
    // -------------------------------------------------------------------------

    /// `GET /packages/`, optionally narrowed to one category.
    pub async fn list_packages(
        &self,
        category: Option<PackageCategory>,
        scope: CatalogScope,
    ) -> Result<Vec<Package>, ApiError> {
        let params = [("category", category.map(PackageCategory::as_str)), ("active_only", scope.active_only())];
        let path = with_query("/packages/", &params);
        self.fetch(Verb::Get, &path, None).await
    }

    pub async fn get_package(&self, id: &str) -> Result<Package, ApiError> {
        self.fetch(Verb::Get, &format!("/packages/{id}"), None).await
    }

    pub async fn create_package(&self, input: &PackageInput) -> Result<Package, ApiError> {
        self.fetch(Verb::Post, "/packages/", Some(encode(input)?)).await
    }

    pub async fn update_package(&self, id: &str, input: &PackageInput) -> Result<Package, ApiError> {
        self.fetch(Verb::Put, &format!("/packages/{id}"), Some(encode(input)?)).await
    }

    pub async fn delete_package(&self, id: &str) -> Result<(), ApiError> {
        self.send(Verb::Delete, &format!("/packages/{id}"), None).await.map(drop)
    }

    // -------------------------------------------------------------------------
    // Add-ons
    // -------------------------------------------------------------------------

    /// `GET /addons/`, optionally narrowed to one category.
    pub async fn list_addons(
        &self,
        category: Option<AddOnCategory>,
        scope: CatalogScope,
    ) -> Result<Vec<AddOn>, ApiError> {
        let params = [("category", category.map(AddOnCategory::as_str)), ("active_only", scope.active_only())];
        let path = with_query("/addons/", &params);
        self.fetch(Verb::Get, &path, None).await
    }

    pub async fn create_addon(&self, input: &AddOnInput) -> Result<AddOn, ApiError> {
        self.fetch(Verb::Post, "/addons/", Some(encode(input)?)).await
    }

    pub async fn update_addon(&self, id: &str, input: &AddOnInput) -> Result<AddOn, ApiError> {
        self.fetch(Verb::Put, &format!("/addons/{id}"), Some(encode(input)?)).await
    }

    pub async fn delete_addon(&self, id: &str) -> Result<(), ApiError> {
        self.send(Verb::Delete, &format!("/addons/{id}"), None).await.map(drop)
    }

    // -------------------------------------------------------------------------
    // Bookings
    // -------------------------------------------------------------------------

    pub async fn create_booking(&self, request: &BookingRequest) -> Result<Booking, ApiError> {
        self.fetch(Verb::Post, "/bookings/", Some(encode(request)?)).await
    }

    /// `GET /bookings/user/{user_id}`: the caller's own bookings with package detail.
    pub async fn list_user_bookings(&self, user_id: &str) -> Result<Vec<Booking>, ApiError> {
        self.fetch(Verb::Get, &format!("/bookings/user/{user_id}"), None).await
    }

    /// `GET /bookings/` (admin), optionally filtered by status server-side.
    pub async fn list_bookings(&self, status: Option<BookingStatus>) -> Result<Vec<Booking>, ApiError> {
        let path = with_query("/bookings/", &[("status_filter", status.map(BookingStatus::as_str))]);
        self.fetch(Verb::Get, &path, None).await
    }

    pub async fn get_booking(&self, id: &str) -> Result<Booking, ApiError> {
        self.fetch(Verb::Get, &format!("/bookings/{id}"), None).await
    }

    pub async fn update_booking_status(&self, id: &str, update: &BookingStatusUpdate) -> Result<Booking, ApiError> {
        self.fetch(Verb::Put, &format!("/bookings/{id}/status"), Some(encode(update)?)).await
    }

    // -------------------------------------------------------------------------
    // Transport
    // -------------------------------------------------------------------------

    async fn fetch<T: DeserializeOwned>(
        &self,
        verb: Verb,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T, ApiError> {
        let text = self.send(verb, path, body).await?;
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Issue one request and return the raw body of a 2xx response.
    async fn send(&self, verb: Verb, path: &str, body: Option<serde_json::Value>) -> Result<String, ApiError> {
        #[cfg(feature = "csr")]
        {
            use gloo_net::http::Request;

            let url = self.endpoint(path);
            let mut builder = match verb {
                Verb::Get => Request::get(&url),
                Verb::Post => Request::post(&url),
                Verb::Put => Request::put(&url),
                Verb::Delete => Request::delete(&url),
            };
            if let Some(authorization) = self.authorization() {
                builder = builder.header("Authorization", &authorization);
            }
            let request = match body {
                Some(payload) => builder.json(&payload),
                None => builder.build(),
            }
            .map_err(|e| ApiError::Network(e.to_string()))?;

            let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
            let text = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                log::warn!("{verb:?} {path} failed with status {}", resp.status());
                return Err(ApiError::from_status(resp.status(), &text));
            }
            Ok(text)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (verb, self.endpoint(path), self.authorization(), body);
            Err(ApiError::Unavailable)
        }
    }
}

impl AuthGateway for ApiClient {
    async fn login(&self, credentials: &LoginRequest) -> Result<AuthGrant, ApiError> {
        self.fetch(Verb::Post, "/auth/login", Some(encode(credentials)?)).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthGrant, ApiError> {
        self.fetch(Verb::Post, "/auth/register", Some(encode(request)?)).await
    }
}

impl DeliveryGateway for ApiClient {
    async fn get_delivery(&self, booking_id: &str) -> Result<Delivery, ApiError> {
        self.fetch(Verb::Get, &format!("/delivery/{booking_id}"), None).await
    }

    async fn create_delivery(&self, input: &DeliveryInput) -> Result<Delivery, ApiError> {
        self.fetch(Verb::Post, "/delivery/", Some(encode(input)?)).await
    }

    async fn update_delivery(&self, booking_id: &str, input: &DeliveryInput) -> Result<Delivery, ApiError> {
        self.fetch(Verb::Put, &format!("/delivery/{booking_id}"), Some(encode(input)?)).await
    }
}

fn encode<B: Serialize>(body: &B) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Append the present query parameters to `path`.
///
/// Values are enum slugs, so no percent-encoding is needed.
fn with_query(path: &str, params: &[(&str, Option<&str>)]) -> String {
    let pairs: Vec<String> = params.iter().filter_map(|(key, value)| value.map(|v| format!("{key}={v}"))).collect();
    if pairs.is_empty() {
        path.to_owned()
    } else {
        format!("{path}?{}", pairs.join("&"))
    }
}
