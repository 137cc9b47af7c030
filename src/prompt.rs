//! Overwrite confirmation protocol.

use std::io::{Read, Write};

pub const OVERWRITE_PROMPT: &str = "The destination file already exists.\n\
    Overwriting it will erase its contents.\n\
    Do you want to continue? (y/n)\n";

pub const INVALID_INPUT: &str = "Invalid input. Please enter 'y' or 'n'.\n";

/// Terminal result of one confirmation exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Overwrite,
    Cancel,
}

/// Ask whether an existing destination should be overwritten.
///
/// Writes the prompt to `output`, then reads a single byte from `input`:
/// `y`/`Y` confirms, `n`/`N` declines, end-of-input or a read error declines,
/// anything else re-issues the prompt. There is no retry bound. Note that a
/// line-buffered caller answering "x\n" gets prompted once for the 'x' and
/// once more for the newline, since each iteration consumes exactly one byte.
///
/// Failures writing to `output` are ignored; the protocol is driven by the
/// input side.
pub fn ask_overwrite<I: Read, O: Write>(input: &mut I, output: &mut O) -> Choice {
    let mut byte = [0u8; 1];
    loop {
        let _ = output.write_all(OVERWRITE_PROMPT.as_bytes());
        let _ = output.flush();
        match input.read(&mut byte) {
            Ok(1) => {}
            // end of input, or the input stream failed
            Ok(_) | Err(_) => {
                tracing::debug!("confirmation input closed, declining overwrite");
                return Choice::Cancel;
            }
        }
        match byte[0] {
            b'y' | b'Y' => return Choice::Overwrite,
            b'n' | b'N' => return Choice::Cancel,
            _ => {
                let _ = output.write_all(INVALID_INPUT.as_bytes());
                let _ = output.flush();
            }
        }
    }
}
