//! Endpoint descriptors and the values they are built from.
//!
//! The endpoint set is closed: each feature exposes a small enum whose
//! variants produce [`EndpointDescriptor`] values.

mod descriptor;
mod headers;
mod users;

pub use descriptor::{Body, EndpointDescriptor, HttpMethod, MultipartPart};
pub use headers::{ContentType, HeaderSet, header_name};
pub use users::UsersEndpoint;
