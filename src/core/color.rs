//! Zero-alloc ANSI colour wrapper.  No external deps.

use std::{fmt, str};

// --- AnsiCode ---
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnsiCode {
    Static(&'static str),
    Inline { buf: [u8; 8], len: u8 },
}

impl AnsiCode {
    pub const fn red() -> Self {
        Self::Static("\x1b[31m")
    }
    pub const fn yellow() -> Self {
        Self::Static("\x1b[33m")
    }
    pub const fn blue() -> Self {
        Self::Static("\x1b[34m")
    }
    pub const fn white() -> Self {
        Self::Static("\x1b[37m")
    }
    pub const fn green() -> Self {
        Self::Static("\x1b[32m")
    }
    pub const fn bright_red() -> Self {
        Self::Static("\x1b[91m")
    }
    pub const fn bright_blue() -> Self {
        Self::Static("\x1b[94m")
    }
    #[inline]
    pub const fn bold() -> Self {
        Self::Static("\x1b[1m")
    }
    #[inline]
    pub const fn reset() -> Self {
        Self::Static("\x1b[0m")
    }

    /// Plain SGR escape `ESC[<code>m`, e.g. `sgr(92)` for bright green.
    #[must_use]
    pub fn sgr(code: u8) -> Self {
        let mut buf = [0u8; 8];
        buf[..2].copy_from_slice(b"\x1b[");
        let mut len = 2;
        len += write_u8(&mut buf[len..], code);
        buf[len] = b'm';
        len += 1;
        Self::Inline {
            buf,
            len: len as u8,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Static(s) => s,
            // only ever filled with ASCII by `sgr`
            Self::Inline { buf, len } => str::from_utf8(&buf[..*len as usize]).unwrap_or(""),
        }
    }
}

// --- Helpers ---
fn write_u8(dst: &mut [u8], mut n: u8) -> usize {
    let mut tmp = [0u8; 3];
    let mut i = 3;
    loop {
        i -= 1;
        tmp[i] = b'0' + n % 10;
        n /= 10;
        if n == 0 {
            break;
        }
    }
    let len = 3 - i;
    dst[..len].copy_from_slice(&tmp[i..]);
    len
}

impl fmt::Display for AnsiCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wrap `text` in colour + reset sequence.
#[inline]
#[must_use]
pub fn colorize(c: &AnsiCode, text: &str) -> String {
    format!("{c}{text}{}", AnsiCode::reset())
}

/// Same as [`colorize`] with the bold attribute switched on.
#[inline]
#[must_use]
pub fn colorize_bold(c: &AnsiCode, text: &str) -> String {
    format!("{}{c}{text}{}", AnsiCode::bold(), AnsiCode::reset())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sgr_matches_static_codes() {
        assert_eq!(AnsiCode::sgr(31).as_str(), AnsiCode::red().as_str());
        assert_eq!(AnsiCode::sgr(94).as_str(), AnsiCode::bright_blue().as_str());
        assert_eq!(AnsiCode::sgr(7).as_str(), "\x1b[7m");
    }

    #[test]
    fn colorize_wraps_and_resets() {
        assert_eq!(colorize(&AnsiCode::yellow(), "42"), "\x1b[33m42\x1b[0m");
        assert_eq!(
            colorize_bold(&AnsiCode::white(), "src"),
            "\x1b[1m\x1b[37msrc\x1b[0m"
        );
    }
}
