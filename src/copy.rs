//! Copy engine: existence check, overwrite confirmation and the buffered
//! byte-copy loop.

use std::io::{Read, Write};
use std::os::unix::fs::OpenOptionsExt;

use crate::prompt;

/// Read buffer size for the copy loop.
pub const BUF_SIZE: usize = 8192;

/// Creation mode for a newly created destination (owner rw, group/other r).
const DEST_MODE: u32 = 0o644;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("source file does not exist or cannot be read")]
    SourceOpen(#[source] std::io::Error),
    #[error("cannot open destination file")]
    DestOpen(#[source] std::io::Error),
    #[error("read failed")]
    Read(#[source] std::io::Error),
    #[error("write failed")]
    Write(#[source] std::io::Error),
}

/// Totals for a completed copy.
#[derive(Debug, Copy, Clone, Default)]
pub struct Summary {
    pub bytes_copied: u64,
    pub files_copied: usize,
}

impl std::ops::Add for Summary {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self {
            bytes_copied: self.bytes_copied + other.bytes_copied,
            files_copied: self.files_copied + other.files_copied,
        }
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "bytes copied: {}\n\
            files copied: {}",
            bytesize::ByteSize(self.bytes_copied),
            self.files_copied,
        )
    }
}

/// Result of one engine run.
#[derive(Debug)]
pub enum Outcome {
    Copied(Summary),
    Cancelled,
}

/// Write the whole of `buf`, re-issuing short writes for the remainder.
///
/// A short count (including zero) is not an error and is retried; only an
/// `Err` from the writer terminates the attempt.
fn write_all<W: Write>(writer: &mut W, buf: &[u8]) -> std::io::Result<()> {
    let mut written = 0;
    while written < buf.len() {
        written += writer.write(&buf[written..])?;
    }
    Ok(())
}

/// Stream `reader` into `writer` through a fixed-size buffer until end of
/// input.
fn copy_data<R: Read, W: Write>(reader: &mut R, writer: &mut W) -> Result<Summary, Error> {
    let mut buffer = [0u8; BUF_SIZE];
    let mut summary = Summary {
        files_copied: 1,
        ..Default::default()
    };
    loop {
        let count = reader.read(&mut buffer).map_err(Error::Read)?;
        if count == 0 {
            break;
        }
        write_all(writer, &buffer[..count]).map_err(Error::Write)?;
        summary.bytes_copied += count as u64;
    }
    Ok(summary)
}

/// Check destination existence with a read-only open.
///
/// A destination that exists but cannot be opened for reading is treated as
/// absent: the confirmation is skipped and the overwrite open is attempted
/// directly.
fn destination_exists(path: &std::path::Path) -> bool {
    std::fs::File::open(path).is_ok()
}

/// Copy `src` to `dst`, asking on `input`/`output` before overwriting an
/// existing destination.
///
/// The destination is created with mode 0644 if absent and truncated in
/// place if present; a mid-copy failure leaves a partial file behind. Both
/// file handles are closed by scope exit on every path out of this function.
pub fn copy_file<I: Read, O: Write>(
    src: &std::path::Path,
    dst: &std::path::Path,
    input: &mut I,
    output: &mut O,
) -> Result<Outcome, Error> {
    tracing::debug!("opening {:?} for reading", &src);
    let mut reader = std::fs::File::open(src).map_err(Error::SourceOpen)?;
    if destination_exists(dst) {
        tracing::debug!("destination {:?} exists, asking before overwriting", &dst);
        if let prompt::Choice::Cancel = prompt::ask_overwrite(input, output) {
            tracing::info!("copy of {:?} cancelled by the user", &src);
            return Ok(Outcome::Cancelled);
        }
    }
    tracing::debug!("opening {:?} for writing", &dst);
    let mut writer = std::fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(DEST_MODE)
        .open(dst)
        .map_err(Error::DestOpen)?;
    tracing::debug!("copying data");
    let summary = copy_data(&mut reader, &mut writer)?;
    tracing::debug!("copied {} bytes", summary.bytes_copied);
    Ok(Outcome::Copied(summary))
}
