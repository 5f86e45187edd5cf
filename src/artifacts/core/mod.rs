//! Core utilities and shared types
//!
//! This module contains shared utilities used across the application.

use derive_new::new;
use is_terminal::IsTerminal;
use minus::Pager;
use std::io::{self, Write};

/// Whether output should go through the pager by default
///
/// Paging wants a terminal on stdout and no `NO_PAGER` in the
/// environment; redirected output stays plain so it can be piped and
/// compared byte for byte.
pub fn pager_enabled() -> bool {
    io::stdout().is_terminal() && std::env::var_os("NO_PAGER").is_none()
}

/// Wrapper that implements `Write` for the minus pager
///
/// The minus pager doesn't implement `std::io::Write` directly, so this
/// wrapper adapts it to be compatible with Rust's standard I/O traits.
/// A listing can then be written to a pager or to stdout through the
/// same `Box<dyn Write>`.
///
/// ## Usage
///
/// ```ignore
/// let pager = Pager::new();
/// let mut writer = PagerWriter::new(pager.clone());
/// writeln!(writer, "Some long output...")?;
/// page_all(pager)?;
/// ```
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let s =
            std::str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pager.push_str(s).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
