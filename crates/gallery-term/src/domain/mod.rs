//! Core domain logic for the terminal gallery.
//!
//! This module contains the artwork and ban-list models, the fetch loop, and
//! the session state that drive the terminal UI, independent of terminal or
//! HTTP details.

pub mod models;
pub mod services;
