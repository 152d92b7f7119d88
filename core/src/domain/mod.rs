//! Domain layer

pub mod entities;
