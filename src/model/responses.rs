/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/25
******************************************************************************/
use crate::constants::SUCCESS_CODE;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Uniform wrapper used by the authorization service for all responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    /// Service status code; `2000` means success
    pub code: i64,
    /// Payload; a boolean for the permission checks
    #[serde(default)]
    pub data: Value,
    /// Human-readable message accompanying the code
    #[serde(default)]
    pub msg: String,
}

impl ResponseEnvelope {
    /// Validates the envelope and extracts the boolean permission result
    ///
    /// Fails on a non-success code or when `data` is anything other than a
    /// JSON boolean.
    pub fn into_permission(self) -> Result<bool, AppError> {
        if self.code != SUCCESS_CODE {
            return Err(AppError::UnexpectedCode {
                code: self.code,
                msg: self.msg,
            });
        }
        match self.data {
            Value::Bool(allowed) => Ok(allowed),
            other => Err(AppError::UnexpectedDataType(json_type_name(&other).to_string())),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
