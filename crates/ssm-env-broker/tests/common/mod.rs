// crates/ssm-env-broker/tests/common/mod.rs
// ============================================================================
// Module: Broker Test Support
// Description: In-memory and failing writers for sink and masker tests.
// Purpose: Capture command output without touching stdout.
// Dependencies: std
// ============================================================================

#![allow(dead_code, reason = "Shared helpers are not used by every test crate.")]

use std::io::Write;
use std::sync::Arc;
use std::sync::Mutex;

// ============================================================================
// SECTION: Shared Buffer
// ============================================================================

/// Cloneable writer whose contents can be read back after use.
#[derive(Clone, Default)]
pub struct SharedBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    /// Creates a new empty shared buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the contents as a string.
    pub fn to_string_lossy(&self) -> String {
        let guard = self.inner.lock().expect("buffer lock");
        String::from_utf8_lossy(&guard).to_string()
    }

    /// Returns true if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().expect("buffer lock").is_empty()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.inner.lock().expect("buffer lock").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

// ============================================================================
// SECTION: Failing Writer for Error Testing
// ============================================================================

/// A writer that always fails, for testing error paths.
pub struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::other("simulated write failure"))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
