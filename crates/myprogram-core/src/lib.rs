//! MyProgram Core Library
//!
//! This crate provides the pieces the `myprogram` binary is built from:
//! - Configuration loaded from the process environment
//! - The on-disk config directory (`~/.myprogram`)
//! - Greeting, input validation and date helpers

pub mod config;
pub mod error;
pub mod utils;

pub use error::{Error, Result};

/// Application display name
pub const APP_NAME: &str = "MyProgram";

/// Application version, shared by the library and the binary
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

