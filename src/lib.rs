/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/25
******************************************************************************/

//! # Authorization Service Client
//!
//! Client library for a remote authorization service. It exposes three
//! checks, each a single HTTP round trip:
//!
//! - interface-level access (`checkInterfaceAuth`, GET with query parameters)
//! - permission membership (`hasAnyPermission`, POST with a JSON body)
//! - role membership (`hasAnyRole`, POST with a JSON body)
//!
//! Every response arrives in the service's uniform envelope
//! `{code, data, msg}`; a call succeeds only when `code` is `2000` and
//! `data` is a boolean. There is no caching, no retry policy and no token
//! refresh: each call opens a request, sends it and decodes one response.
//!
//! # Example
//! ```ignore
//! use authz_client::prelude::*;
//!
//! let config = Config::with_values("https://auth.example.com/api/permissionManage", "token");
//! let client = AuthClient::new(config)?;
//!
//! let allowed = client
//!     .check_interface_auth(&CheckInterfaceAuthRequest::new(
//!         AccessMethod::Get,
//!         "/projects",
//!         45,
//!         4,
//!     ))
//!     .await?;
//! ```

/// Client implementation and the shared request path
pub mod client;
/// Client configuration loaded from the environment
pub mod config;
/// Global constants
pub mod constants;
/// Error types for the library
pub mod error;
/// Service trait implemented by the client
pub mod interface;
/// Request and response models
pub mod model;
/// Convenience re-exports
pub mod prelude;
/// Environment and logging utilities
pub mod utils;

/// Library version, taken from Cargo metadata
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}
