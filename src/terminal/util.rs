//! Terminal utilities

use crate::{Result, VoiceboxError};
use nix::libc;
use std::io::{self, Write};
use std::os::unix::io::RawFd;

/// Check whether `fd` refers to a terminal
pub fn is_tty(fd: RawFd) -> bool {
    unsafe { libc::isatty(fd) != 0 }
}

/// Get the terminal size for the given file descriptor
///
/// Falls back to 80x24 when the size cannot be queried.
pub fn get_terminal_size(fd: RawFd) -> Result<(u16, u16)> {
    let mut ws: libc::winsize = unsafe { std::mem::zeroed() };

    let result = unsafe { libc::ioctl(fd, libc::TIOCGWINSZ, &mut ws) };

    if result == 0 && ws.ws_col > 0 {
        Ok((ws.ws_col, ws.ws_row))
    } else {
        Ok((80, 24))
    }
}

/// Set raw mode on a terminal file descriptor
///
/// Raw mode delivers every keypress immediately, including arrows and Enter,
/// without local echo. Returns the previous attributes for restoring.
pub fn set_raw_mode(fd: RawFd) -> Result<libc::termios> {
    let mut original_termios: libc::termios = unsafe { std::mem::zeroed() };

    if unsafe { libc::tcgetattr(fd, &mut original_termios) } != 0 {
        return Err(VoiceboxError::Terminal(format!(
            "tcgetattr failed: {}",
            io::Error::last_os_error()
        )));
    }

    let mut raw_termios = original_termios;

    unsafe {
        libc::cfmakeraw(&mut raw_termios);
        if libc::tcsetattr(fd, libc::TCSANOW, &raw_termios) != 0 {
            return Err(VoiceboxError::Terminal(format!(
                "tcsetattr failed: {}",
                io::Error::last_os_error()
            )));
        }
    }

    Ok(original_termios)
}

/// Restore terminal attributes saved by `set_raw_mode`
pub fn restore_termios(fd: RawFd, termios: &libc::termios) {
    unsafe {
        libc::tcsetattr(fd, libc::TCSANOW, termios);
    }
}

/// Write `line` followed by "\r\n"
///
/// Output processing is off in raw mode, so a bare "\n" would not return
/// the cursor to the first column.
pub fn write_raw_line<W: Write + ?Sized>(out: &mut W, line: &str) -> io::Result<()> {
    write!(out, "{}\r\n", line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_raw_line() {
        let mut out = Vec::new();
        write_raw_line(&mut out, "No languages available").unwrap();
        write_raw_line(&mut out, "").unwrap();
        assert_eq!(out, b"No languages available\r\n\r\n");
    }
}
