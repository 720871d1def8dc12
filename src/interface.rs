/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 20/10/25
******************************************************************************/
use crate::client::AuthClient;
use crate::error::AppError;
use crate::model::requests::{
    CheckHasPermissionRequest, CheckHasRoleRequest, CheckInterfaceAuthRequest,
};
use async_trait::async_trait;

/// Trait for the three authorization checks
///
/// Implemented by [`AuthClient`]; callers that want to substitute a fake in
/// tests can depend on this trait instead of the concrete client.
#[async_trait]
pub trait AuthorizationService: Send + Sync {
    /// Checks whether a user may access an interface
    async fn check_interface_auth(
        &self,
        req: &CheckInterfaceAuthRequest,
    ) -> Result<bool, AppError>;

    /// Checks whether a user holds any of the listed permissions
    async fn has_any_permission(
        &self,
        req: &CheckHasPermissionRequest,
    ) -> Result<bool, AppError>;

    /// Checks whether a user holds any of the listed roles
    async fn has_any_role(&self, req: &CheckHasRoleRequest) -> Result<bool, AppError>;
}

#[async_trait]
impl AuthorizationService for AuthClient {
    async fn check_interface_auth(
        &self,
        req: &CheckInterfaceAuthRequest,
    ) -> Result<bool, AppError> {
        AuthClient::check_interface_auth(self, req).await
    }

    async fn has_any_permission(
        &self,
        req: &CheckHasPermissionRequest,
    ) -> Result<bool, AppError> {
        AuthClient::has_any_permission(self, req).await
    }

    async fn has_any_role(&self, req: &CheckHasRoleRequest) -> Result<bool, AppError> {
        AuthClient::has_any_role(self, req).await
    }
}
