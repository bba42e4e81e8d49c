//! # Providers
//!
//! Clients for the external services the relay talks to.

pub mod ai;
