/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 20/10/25
******************************************************************************/

//! Client for the remote authorization service
//!
//! This module provides a thin client that performs one HTTP round trip per
//! check and validates the service's response envelope:
//! - No caching, no retries, no token refresh
//! - Safe to share across tasks; all methods take `&self`
//!
//! # Example
//! ```ignore
//! use authz_client::client::AuthClient;
//! use authz_client::config::Config;
//!
//! let config = Config::new();
//! let client = AuthClient::new(config)?;
//!
//! let allowed = client.has_any_role(&req).await?;
//! ```

use crate::config::Config;
use crate::constants::{
    CHECK_INTERFACE_AUTH_PATH, HAS_ANY_PERMISSION_PATH, HAS_ANY_ROLE_PATH, USER_AGENT,
};
use crate::error::AppError;
use crate::model::requests::{
    CheckHasPermissionRequest, CheckHasRoleRequest, CheckInterfaceAuthRequest,
};
use crate::model::responses::ResponseEnvelope;
use reqwest::{Client as HttpClient, Method, Response};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};

/// Client for the remote authorization service
///
/// Holds the service base URL and a static token; immutable after
/// construction. Each check is a single request against the service and a
/// single envelope decode.
pub struct AuthClient {
    http_client: HttpClient,
    config: Arc<Config>,
}

impl AuthClient {
    /// Creates a new client from the given configuration
    ///
    /// # Returns
    /// * `Ok(AuthClient)` - Client ready to use
    /// * `Err(AppError)` - If the base URL is empty or the HTTP client cannot be built
    pub fn new(config: Config) -> Result<Self, AppError> {
        if config.base_url.trim().is_empty() {
            return Err(AppError::InvalidInput("base URL must not be empty".to_string()));
        }

        let http_client = HttpClient::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            http_client,
            config: Arc::new(config),
        })
    }

    /// Checks whether a user may access an interface
    ///
    /// Sent as a GET request with all four fields encoded as query
    /// parameters (`method` as its integer code).
    ///
    /// # Returns
    /// * `Ok(true)` - Access is granted
    /// * `Ok(false)` - Access is denied
    /// * `Err(AppError)` - If the request fails or the envelope is invalid
    pub async fn check_interface_auth(
        &self,
        req: &CheckInterfaceAuthRequest,
    ) -> Result<bool, AppError> {
        self.permission_request(Method::GET, CHECK_INTERFACE_AUTH_PATH, Some(req), None::<&()>)
            .await
    }

    /// Checks whether a user holds any of the listed permissions
    ///
    /// Sent as a POST request with the full JSON body.
    pub async fn has_any_permission(
        &self,
        req: &CheckHasPermissionRequest,
    ) -> Result<bool, AppError> {
        self.permission_request(Method::POST, HAS_ANY_PERMISSION_PATH, None::<&()>, Some(req))
            .await
    }

    /// Checks whether a user holds any of the listed roles
    ///
    /// Sent as a POST request with the full JSON body.
    pub async fn has_any_role(&self, req: &CheckHasRoleRequest) -> Result<bool, AppError> {
        self.permission_request(Method::POST, HAS_ANY_ROLE_PATH, None::<&()>, Some(req))
            .await
    }

    /// Gets the configuration this client was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Shared request path for the three checks
    async fn permission_request<Q: Serialize, B: Serialize>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Q>,
        body: Option<&B>,
    ) -> Result<bool, AppError> {
        let response = self.request_internal(method, path, query, body).await?;
        let text = response.text().await?;
        let envelope: ResponseEnvelope = serde_json::from_str(&text)?;
        envelope.into_permission()
    }

    /// Internal method to make HTTP requests
    async fn request_internal<Q: Serialize, B: Serialize>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Q>,
        body: Option<&B>,
    ) -> Result<Response, AppError> {
        let base = self.config.base_url.trim_end_matches('/');
        let url = format!("{}/{}", base, path.trim_start_matches('/'));

        debug!("{} {}", method, url);

        let mut request = self
            .http_client
            .request(method, &url)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .header("Authorization", &self.config.token);

        if let Some(q) = query {
            request = request.query(q);
        }
        if let Some(b) = body {
            request = request.json(b);
        }

        let response = request.send().await?;
        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Request failed with status {}: {}", status, body);
            return Err(AppError::Unexpected(status));
        }

        Ok(response)
    }
}
