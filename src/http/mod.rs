//! HTTP transport layer for the address book
//!
//! Provides the external REST routing over the contact store.

pub mod handlers;
