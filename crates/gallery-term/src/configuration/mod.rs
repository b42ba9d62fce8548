//! Configuration management for the terminal gallery.
//!
//! Values come from built-in defaults, an optional TOML file, and command line
//! flags or `GALLERY_*` environment variables, in increasing precedence.

mod config;

pub use config::*;
