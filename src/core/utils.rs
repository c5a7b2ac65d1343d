//! ### Shared helpers
//!

use std::io;

use crossterm::execute;

use super::error::AppResult;

/// Decodes tf output. tf writes in the console code page on Windows, so UTF-8 is not guaranteed.
pub fn auto_decode(input: &[u8]) -> AppResult<String> {
    let utf8_err = match String::from_utf8(input.to_vec()) {
        Ok(s) => return Ok(s.trim_start_matches('\u{feff}').trim().to_string()),
        Err(e) => e,
    };

    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(input, true);
    let encoding: &'static encoding_rs::Encoding = detector.guess(None, true);
    tracing::debug!("tf output is not UTF-8, decoding as {}", encoding.name());
    let (decoded, _, had_errors) = encoding.decode(input);

    if had_errors {
        return Err(utf8_err.into());
    }

    Ok(decoded.trim().to_string())
}

pub struct CursorGuard;

impl CursorGuard {
    pub fn new() -> Self {
        execute!(io::stdout(), crossterm::cursor::Hide).ok();
        execute!(io::stderr(), crossterm::cursor::Hide).ok();
        CursorGuard
    }
}

impl Drop for CursorGuard {
    fn drop(&mut self) {
        execute!(io::stdout(), crossterm::cursor::Show).ok();
        execute!(io::stderr(), crossterm::cursor::Show).ok();
    }
}
