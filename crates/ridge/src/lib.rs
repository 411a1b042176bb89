//! # Ridge
//!
//! A minimal library that hands out a greeting.
//!
//! Ridge exposes a fixed message and a printer for it. The message is a
//! compile-time constant, so reading it is pure and safe from any thread.
//!
//! ## Usage
//!
//! ```
//! assert_eq!(ridge::get_message(), "Hello, World!");
//!
//! let mut out = Vec::new();
//! ridge::write_message(&mut out).unwrap();
//! assert_eq!(out, b"Hello, World!\n");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod message;

// Re-export main types
pub use error::{Result, RidgeError};
pub use message::{get_message, print_message, write_message, MESSAGE};

/// Ridge version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
