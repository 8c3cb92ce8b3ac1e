//! Users endpoints.

use super::descriptor::EndpointDescriptor;
use super::headers::HeaderSet;

/// Every call shape the users feature makes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsersEndpoint {
    /// `GET /users`
    List,
    /// `GET /users/{id}`
    Details(u64),
}

impl UsersEndpoint {
    pub fn path(self) -> String {
        match self {
            Self::List => "/users".to_string(),
            Self::Details(id) => format!("/users/{id}"),
        }
    }

    pub fn descriptor(self) -> EndpointDescriptor {
        EndpointDescriptor::get(self.path()).with_headers(HeaderSet::json_defaults())
    }
}

impl From<UsersEndpoint> for EndpointDescriptor {
    fn from(endpoint: UsersEndpoint) -> Self {
        endpoint.descriptor()
    }
}
