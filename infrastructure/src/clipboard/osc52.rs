//! OSC 52 clipboard adapter
//!
//! Writes the selection through the terminal itself with an OSC 52 escape
//! sequence, which works over SSH and inside multiplexers that pass the
//! sequence through. Terminals that ignore OSC 52 simply drop it, which
//! matches the best-effort clipboard contract.

use base64::{engine::general_purpose::STANDARD, Engine};
use folio_application::{ClipboardError, ClipboardPort};
use std::io::{self, Write};

/// Practical payload cap; most terminals truncate beyond a few KiB anyway
const MAX_PAYLOAD_BYTES: usize = 8 * 1024;

pub struct Osc52Clipboard;

impl ClipboardPort for Osc52Clipboard {
    fn write(&self, text: &str) -> Result<(), ClipboardError> {
        if text.len() > MAX_PAYLOAD_BYTES {
            return Err(ClipboardError::Write(format!(
                "payload of {} bytes exceeds the OSC 52 cap",
                text.len()
            )));
        }
        let payload = STANDARD.encode(text.as_bytes());
        let mut out = io::stdout().lock();
        write!(out, "\x1b]52;c;{}\x07", payload)
            .and_then(|_| out.flush())
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }
}
