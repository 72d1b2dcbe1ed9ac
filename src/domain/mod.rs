//! Address-book domain types
//!
//! Provides the stored `Person` record, the typed request/response payloads, and resource URI helpers.

pub mod person;

pub use person::{Person, PersonId, PersonPayload, PersonResource};
