/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/25
******************************************************************************/
use pretty_simple_display::DisplaySimple;
use serde::de::{Deserializer, Error as DeError, Unexpected};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// HTTP method of the interface being checked
///
/// The authorization service identifies methods by integer code, not by
/// name; the codes are part of the wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccessMethod {
    /// GET, code 1
    #[default]
    Get,
    /// POST, code 2
    Post,
    /// PUT, code 3
    Put,
    /// DELETE, code 4
    Delete,
}

impl AccessMethod {
    /// Integer code used on the wire for this method
    pub fn code(&self) -> u8 {
        match self {
            AccessMethod::Get => 1,
            AccessMethod::Post => 2,
            AccessMethod::Put => 3,
            AccessMethod::Delete => 4,
        }
    }

    /// Maps a wire code back to a method
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(AccessMethod::Get),
            2 => Some(AccessMethod::Post),
            3 => Some(AccessMethod::Put),
            4 => Some(AccessMethod::Delete),
            _ => None,
        }
    }
}

impl Serialize for AccessMethod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for AccessMethod {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = u8::deserialize(deserializer)?;
        AccessMethod::from_code(code).ok_or_else(|| {
            D::Error::invalid_value(Unexpected::Unsigned(code as u64), &"a method code in 1..=4")
        })
    }
}

/// Parameters for an interface-level access check
///
/// Sent as query parameters on a GET request; the JSON field names double as
/// the query parameter names.
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, Default)]
pub struct CheckInterfaceAuthRequest {
    /// HTTP method of the interface being accessed
    pub method: AccessMethod,
    /// Route path of the interface being accessed
    pub path: String,
    /// User performing the access
    pub user_id: i64,
    /// Project the interface belongs to, as registered in the auth system
    pub project_id: i64,
}

impl CheckInterfaceAuthRequest {
    /// Creates a request for the given interface and subject
    pub fn new(method: AccessMethod, path: impl Into<String>, user_id: i64, project_id: i64) -> Self {
        Self {
            method,
            path: path.into(),
            user_id,
            project_id,
        }
    }
}

/// Parameters for a permission membership check
///
/// The call asks whether the user holds any of the listed permissions.
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, Default)]
pub struct CheckHasPermissionRequest {
    /// User being checked
    pub user_id: i64,
    /// Project scope of the check
    pub project_id: i64,
    /// Permissions to test, in caller order
    pub permission_list: Vec<String>,
}

impl CheckHasPermissionRequest {
    /// Creates a request with an empty permission list
    pub fn new(user_id: i64, project_id: i64) -> Self {
        Self {
            user_id,
            project_id,
            permission_list: Vec::new(),
        }
    }

    /// Adds a permission to test
    pub fn with_permission(mut self, permission: impl Into<String>) -> Self {
        self.permission_list.push(permission.into());
        self
    }

    /// Replaces the permission list
    pub fn with_permissions(mut self, permissions: Vec<String>) -> Self {
        self.permission_list = permissions;
        self
    }
}

/// Parameters for a role membership check
///
/// The call asks whether the user holds any of the listed roles.
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, Default)]
pub struct CheckHasRoleRequest {
    /// User being checked
    pub user_id: i64,
    /// Project scope of the check
    pub project_id: i64,
    /// Role identifiers to test, in caller order
    pub role_id_list: Vec<i64>,
}

impl CheckHasRoleRequest {
    /// Creates a request with an empty role list
    pub fn new(user_id: i64, project_id: i64) -> Self {
        Self {
            user_id,
            project_id,
            role_id_list: Vec::new(),
        }
    }

    /// Adds a role to test
    pub fn with_role(mut self, role_id: i64) -> Self {
        self.role_id_list.push(role_id);
        self
    }

    /// Replaces the role list
    pub fn with_roles(mut self, role_ids: Vec<i64>) -> Self {
        self.role_id_list = role_ids;
        self
    }
}
