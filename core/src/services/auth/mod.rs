//! Session authenticator: registration, login, and session construction.

mod service;


pub use service::AuthService;
