//! Domain error types.

mod resource_error;

pub use resource_error::ResourceError;
