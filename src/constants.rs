/// Envelope code returned by the authorization service on success
pub const SUCCESS_CODE: i64 = 2000;
/// Endpoint for interface-level access checks
pub const CHECK_INTERFACE_AUTH_PATH: &str = "checkInterfaceAuth";
/// Endpoint for permission membership checks
pub const HAS_ANY_PERMISSION_PATH: &str = "hasAnyPermission";
/// Endpoint for role membership checks
pub const HAS_ANY_ROLE_PATH: &str = "hasAnyRole";
/// Default timeout in seconds for requests to the authorization service
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// User agent string used in HTTP requests to identify this client to the authorization service
pub const USER_AGENT: &str = "authz-client/0.2.0";
