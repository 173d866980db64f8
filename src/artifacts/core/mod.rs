//! Output plumbing shared by the commands

use minus::Pager;
use std::io::{self, Write};

/// `Write` adapter feeding the `minus` pager used by `fool log`
///
/// Bytes are forwarded as text. A multi-byte character split across two
/// `write` calls is held back until its remaining bytes arrive.
pub struct PagerWriter {
    pager: Pager,
    pending: Vec<u8>,
}

impl PagerWriter {
    pub fn new(pager: Pager) -> Self {
        PagerWriter {
            pager,
            pending: Vec::new(),
        }
    }
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.pending.extend_from_slice(buf);

        let valid_len = match std::str::from_utf8(&self.pending) {
            Ok(text) => text.len(),
            // an incomplete sequence at the end is kept for the next write
            Err(err) if err.error_len().is_none() => err.valid_up_to(),
            Err(err) => {
                self.pending.clear();
                return Err(io::Error::new(io::ErrorKind::InvalidData, err));
            }
        };

        let text = String::from_utf8_lossy(&self.pending[..valid_len]).into_owned();
        self.pending.drain(..valid_len);
        self.pager.push_str(text).map_err(io::Error::other)?;

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.pending.is_empty() {
            return Ok(());
        }

        let rest = String::from_utf8_lossy(&self.pending).into_owned();
        self.pending.clear();
        self.pager.push_str(rest).map_err(io::Error::other)
    }
}
