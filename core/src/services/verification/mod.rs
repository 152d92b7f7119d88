//! Verification coordinator for the challenge-code lifecycle.
//!
//! Orchestrates the two-step handshake: issue a visual challenge, then
//! validate it and dispatch an SMS one-time code, then validate that code.
//! All shared state lives in the injected keyed expiring store; the
//! coordinator itself holds nothing mutable.

pub mod mocks;
mod service;
mod traits;


pub use service::VerificationService;
pub use traits::{CodeStore, SmsSender};
