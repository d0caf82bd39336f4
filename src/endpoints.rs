//! Endpoints of the reqres user-management API.

use reqwest::Method;
use std::fmt;

/// Path of the paginated user listing.
pub const LIST_USERS_PATH: &str = "/api/users";
/// Prefix for single-user operations; the id is appended.
pub const USERS_PATH: &str = "/api/users/";
/// Registration endpoint.
pub const REGISTER_PATH: &str = "/api/register";
/// Prefix for the unknown-resource lookup; the id is appended.
pub const UNKNOWN_PATH: &str = "/api/unknown/";

/// One operation exposed by the remote service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `GET /api/users?page={page}`
    ListUsers { page: u32 },
    /// `GET /api/users/{id}`
    GetUser { id: u32 },
    /// `POST /api/users`
    CreateUser,
    /// `PUT /api/users/{id}`
    UpdateUser { id: u32 },
    /// `DELETE /api/users/{id}`
    DeleteUser { id: u32 },
    /// `POST /api/register`
    Register,
    /// `GET /api/unknown/{id}`
    GetUnknown { id: u32 },
}

impl Endpoint {
    pub fn method(&self) -> Method {
        match self {
            Self::ListUsers { .. } | Self::GetUser { .. } | Self::GetUnknown { .. } => Method::GET,
            Self::CreateUser | Self::Register => Method::POST,
            Self::UpdateUser { .. } => Method::PUT,
            Self::DeleteUser { .. } => Method::DELETE,
        }
    }

    /// Request path without query string.
    pub fn path(&self) -> String {
        match self {
            Self::ListUsers { .. } => LIST_USERS_PATH.to_string(),
            Self::CreateUser => USERS_PATH.to_string(),
            Self::GetUser { id } | Self::UpdateUser { id } | Self::DeleteUser { id } => {
                format!("{USERS_PATH}{id}")
            }
            Self::Register => REGISTER_PATH.to_string(),
            Self::GetUnknown { id } => format!("{UNKNOWN_PATH}{id}"),
        }
    }

    /// Query parameters carried by the request.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::ListUsers { page } => vec![("page", page.to_string())],
            _ => Vec::new(),
        }
    }

    /// Full URL for this endpoint under `base_url`.
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path())
    }

    /// Whether the operation changes remote state.
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Self::CreateUser | Self::UpdateUser { .. } | Self::DeleteUser { .. }
        )
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method(), self.path())?;
        if let Self::ListUsers { page } = self {
            write!(f, "?page={page}")?;
        }
        Ok(())
    }
}
