//! Response and error translation helpers.

pub mod error;

pub use error::{envelope, error_envelope};
