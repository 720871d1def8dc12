/// Request models for the authorization checks
pub mod requests;
/// Response envelope from the authorization service
pub mod responses;
