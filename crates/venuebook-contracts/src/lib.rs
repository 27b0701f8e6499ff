// Public contracts for the Venuebook API
// This crate defines the DTOs exchanged over the HTTP surface

pub mod common;
pub mod event;

pub use common::*;
pub use event::*;
