//! # Portal Shared
//!
//! Cross-cutting pieces used by every layer of the news portal backend:
//! configuration loaded from the environment, the `{errno, errmsg}` response
//! envelope, and small utilities such as mobile number validation.

pub mod config;
pub mod types;
pub mod utils;
