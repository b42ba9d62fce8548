//! Infrastructure layer providing external integrations.
//!
//! This module wires the remote artworks API client from configuration.

pub mod clients;
