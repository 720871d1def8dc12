/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/8/25
******************************************************************************/

//! # Authorization Client Prelude
//!
//! Convenient re-exports of the types needed for most uses of the library.
//!
//! ## Usage
//!
//! ```rust
//! use authz_client::prelude::*;
//!
//! let config = Config::with_values("https://auth.example.com/api", "token");
//! ```

/// Configuration for the authorization service client
pub use crate::config::Config;

/// Library version information
pub use crate::{VERSION, version};

/// Main error type for the library
pub use crate::error::AppError;

/// Client for the remote authorization service
pub use crate::client::AuthClient;

/// Service trait implemented by the client
pub use crate::interface::AuthorizationService;

/// Request models for the three checks
pub use crate::model::requests::{
    AccessMethod, CheckHasPermissionRequest, CheckHasRoleRequest, CheckInterfaceAuthRequest,
};

/// Response envelope from the authorization service
pub use crate::model::responses::ResponseEnvelope;

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Environment helpers
pub use crate::utils::config::{get_env_or_default, get_env_or_none};

/// Global constants
pub use crate::constants::*;

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use tracing::{debug, error, info, warn};
