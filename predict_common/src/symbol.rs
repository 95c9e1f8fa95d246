//! Reading the requested symbol.
//!
//! The symbol is taken verbatim from the first input line, trimmed and
//! uppercased. No syntax check is made; an unknown symbol simply fails at the
//! API.
use std::io::BufRead;

use crate::error::PredictError;
use crate::result::Result;

/// Trims surrounding whitespace and uppercases `raw`.
pub fn normalize_symbol(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Reads one line from `reader` and normalizes it.
///
/// Fails with [`PredictError::EndOfInput`] when the stream is already closed.
pub fn read_symbol<R: BufRead>(mut reader: R) -> Result<String> {
    let mut line = String::new();
    let read = reader.read_line(&mut line).map_err(PredictError::Io)?;
    if read == 0 {
        return Err(PredictError::EndOfInput);
    }
    Ok(normalize_symbol(&line))
}
