//! API endpoint definitions and request/response types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use aula_core::types::{FieldFilter, SortKey};

// ============================================================================
// Endpoint Names
// ============================================================================

/// accounts:signInWithPassword
pub const SIGN_IN: &str = "accounts:signInWithPassword";

/// accounts:sendOobCode
pub const SEND_OOB_CODE: &str = "accounts:sendOobCode";

/// Out-of-band code request type for password resets.
pub const OOB_PASSWORD_RESET: &str = "PASSWORD_RESET";

/// Returns the query method path for a collection.
pub fn query_method(project_id: &str, collection: &str) -> String {
    format!("projects/{}/collections/{}:query", project_id, collection)
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for signInWithPassword.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub return_secure_token: bool,
}

/// Response from signInWithPassword.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInResponse {
    pub local_id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    pub id_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

/// Request body for sendOobCode.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendOobCodeRequest<'a> {
    pub request_type: &'a str,
    pub email: &'a str,
}

/// Response from sendOobCode.
#[derive(Debug, Deserialize)]
pub struct SendOobCodeResponse {
    #[allow(dead_code)]
    #[serde(default)]
    pub email: Option<String>,
}

/// Request body for a collection query.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRequest<'a> {
    #[serde(rename = "where", skip_serializing_if = "Option::is_none")]
    pub filter: Option<&'a FieldFilter>,
    pub order_by: &'a SortKey,
}

/// Response from a collection query.
#[derive(Debug, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub documents: Vec<DocumentEntry>,
}

/// A single document entry from a query response.
#[derive(Debug, Deserialize)]
pub struct DocumentEntry {
    pub id: String,
    #[serde(default)]
    pub fields: Map<String, Value>,
}

/// API error response format.
#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// The error object inside an error response.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
