//! # Portal Core
//!
//! Core business logic and domain layer for the news portal backend.
//! This crate contains domain entities, the verification and session
//! services, repository interfaces, and the error taxonomy. It performs no
//! I/O of its own; the keyed expiring store, the SMS dispatcher, and the
//! user store are reached through traits injected at construction time.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

pub use errors::{AuthError, AuthResult};
