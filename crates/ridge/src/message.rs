//! The greeting and the ways to emit it.

use std::io::{self, Write};

use crate::error::{Result, RidgeError};

/// The greeting handed out by [`get_message`].
pub const MESSAGE: &str = "Hello, World!";

/// Return the greeting.
///
/// Always returns the same `'static` string. Safe to call from any number
/// of threads without coordination.
pub fn get_message() -> &'static str {
    MESSAGE
}

/// Write the greeting followed by a single `'\n'` into `out`.
pub fn write_message<W: Write>(out: &mut W) -> Result<()> {
    let message = get_message();
    tracing::trace!(len = message.len(), "writing message");
    writeln!(out, "{message}")?;
    Ok(())
}

/// Print the greeting and a newline to standard output.
///
/// A failed write is left to the environment: it is logged at debug level
/// and otherwise ignored.
pub fn print_message() {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let written =
        write_message(&mut handle).and_then(|()| handle.flush().map_err(RidgeError::from));
    if let Err(err) = written {
        tracing::debug!(error = %err, "failed to print message");
    }
}
